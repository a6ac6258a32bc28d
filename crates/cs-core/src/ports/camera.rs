use anyhow::Result;

use crate::capture::CaptureSettings;
use crate::ids::ImageRef;

#[async_trait::async_trait]
pub trait CameraPort: Send + Sync {
    /// Takes one photo and returns where it was stored.
    async fn capture(&self, settings: CaptureSettings) -> Result<ImageRef>;
}
