use serde::{Deserialize, Serialize};

use super::{CaptureSettings, CaptureTrigger};
use crate::ids::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureAction {
    StartSampling,
    StopSampling,
    StartCountdown,
    StopCountdown,
    Capture {
        trigger: CaptureTrigger,
        settings: CaptureSettings,
    },
    /// Attach location and hand the photo to the review screen.
    HandOff {
        image: ImageRef,
        trigger: CaptureTrigger,
    },
}
