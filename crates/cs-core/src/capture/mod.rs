//! Capture guidance domain module.
//!
//! Readiness sampling, auto-capture countdown and capture hand-off.

mod action;
mod error;
mod event;
mod payload;
mod policy;
mod state;
pub mod state_machine;

pub use action::CaptureAction;
pub use error::CaptureError;
pub use event::CaptureEvent;
pub use payload::{CapturePayload, GeoPoint};
pub use policy::CapturePolicy;
pub use state::{
    CameraFacing, CaptureGuidanceState, CaptureSettings, CaptureTrigger, CropStage,
    DistanceStatus, FlashMode, LightStatus, SensorReading,
};
pub use state_machine::CaptureStateMachine;
