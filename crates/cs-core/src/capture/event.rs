use serde::{Deserialize, Serialize};

use super::{CaptureTrigger, SensorReading};
use crate::ids::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureEvent {
    /// Screen became active; start sampling.
    Activate,
    /// Screen dismissed; stop every timer.
    Deactivate,
    SensorsSampled { reading: SensorReading },
    /// One second of the auto-capture countdown elapsed.
    CountdownTick,
    CaptureRequested { trigger: CaptureTrigger },
    CaptureSucceeded { image: ImageRef, trigger: CaptureTrigger },
    CaptureFailed,
    /// The review screen could not be opened for a captured photo.
    HandOffFailed,
    DismissAlert,
    ToggleCameraFacing,
    CycleFlashMode,
}

impl CaptureEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            CaptureEvent::Activate => "Activate",
            CaptureEvent::Deactivate => "Deactivate",
            CaptureEvent::SensorsSampled { .. } => "SensorsSampled",
            CaptureEvent::CountdownTick => "CountdownTick",
            CaptureEvent::CaptureRequested { .. } => "CaptureRequested",
            CaptureEvent::CaptureSucceeded { .. } => "CaptureSucceeded",
            CaptureEvent::CaptureFailed => "CaptureFailed",
            CaptureEvent::HandOffFailed => "HandOffFailed",
            CaptureEvent::DismissAlert => "DismissAlert",
            CaptureEvent::ToggleCameraFacing => "ToggleCameraFacing",
            CaptureEvent::CycleFlashMode => "CycleFlashMode",
        }
    }
}
