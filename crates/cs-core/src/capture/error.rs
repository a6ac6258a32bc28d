use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CaptureError {
    #[error("failed to capture photo, please try again")]
    CaptureFailed,
    #[error("could not open the photo for review, please try again")]
    HandOffFailed,
}

impl CaptureError {
    pub fn message_key(&self) -> &'static str {
        match self {
            CaptureError::CaptureFailed => "error.capture_failed",
            CaptureError::HandOffFailed => "error.handoff_failed",
        }
    }
}
