//! Screen controllers.

pub mod capture;
pub mod context;
pub mod registration;
pub mod timer;

pub use capture::{CaptureController, CaptureDeps};
pub use registration::{RegistrationController, RegistrationDeps};

/// Errors a controller reports to its caller.
///
/// Neither variant changes screen state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("screen is not mounted")]
    NotMounted,
    #[error("screen was unmounted while the operation was in flight")]
    Unmounted,
}
