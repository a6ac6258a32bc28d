use serde::{Deserialize, Serialize};

use super::{CaptureTrigger, CropStage};
use crate::ids::ImageRef;

/// What the capture screen hands to the next screen in the flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturePayload {
    pub image: ImageRef,
    pub crop_stage: CropStage,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub captured_at_ms: i64,
    pub trigger: CaptureTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}
