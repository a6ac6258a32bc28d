use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use cs_core::capture::CaptureSettings;
use cs_core::ids::ImageRef;
use cs_core::ports::CameraPort;
use tokio::time::sleep;
use tracing::debug;
use uuid::Uuid;

/// Pretends to take a photo; returns a fresh file URI under `directory`.
///
/// Nothing is written to disk.
pub struct SimulatedCamera {
    latency: Duration,
    directory: PathBuf,
}

impl SimulatedCamera {
    pub fn new(latency: Duration, directory: impl Into<PathBuf>) -> Self {
        Self {
            latency,
            directory: directory.into(),
        }
    }
}

#[async_trait]
impl CameraPort for SimulatedCamera {
    async fn capture(&self, settings: CaptureSettings) -> anyhow::Result<ImageRef> {
        sleep(self.latency).await;
        let path = self.directory.join(format!("IMG_{}.jpg", Uuid::new_v4()));
        let image = ImageRef::new(format!("file://{}", path.display()));
        debug!(image = %image, facing = ?settings.facing, flash = ?settings.flash, "simulated capture");
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::capture::{CameraFacing, FlashMode};

    #[tokio::test]
    async fn every_capture_gets_a_new_uri() {
        let camera = SimulatedCamera::new(Duration::ZERO, "/data/photos");
        let settings = CaptureSettings {
            facing: CameraFacing::Back,
            flash: FlashMode::Off,
        };
        let first = camera.capture(settings).await.unwrap();
        let second = camera.capture(settings).await.unwrap();

        assert!(first.as_str().starts_with("file:///data/photos/IMG_"));
        assert!(first.as_str().ends_with(".jpg"));
        assert_ne!(first, second);
    }
}
