//! # cs-core
//!
//! Core domain models and state machines for Cropsure.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod capture;
pub mod config;
pub mod ids;
pub mod locale;
pub mod ports;
pub mod registration;

// Re-export commonly used types at the crate root
pub use capture::{CaptureGuidanceState, CaptureStateMachine};
pub use config::AppConfig;
pub use ids::{CaptureSessionId, ImageRef, RegistrationSessionId};
pub use locale::{Language, LocaleContext};
pub use registration::{RegistrationSession, RegistrationStateMachine, RegistrationStep};
