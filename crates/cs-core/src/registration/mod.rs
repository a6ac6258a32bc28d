//! Registration domain module.
//!
//! Phone entry, OTP verification, PMFBY id validation and completion.

mod action;
mod error;
mod event;
mod policy;
mod profile;
mod state;
pub mod state_machine;
pub mod validation;

pub use action::RegistrationAction;
pub use error::{
    ErrorSurface, LimitExceededError, RegistrationError, RemoteError, ValidationError,
};
pub use event::RegistrationEvent;
pub use policy::RegistrationPolicy;
pub use profile::{FarmerProfile, RegistrationSubmission};
pub use state::{PendingRequest, RegistrationSession, RegistrationStep};
pub use state_machine::RegistrationStateMachine;
