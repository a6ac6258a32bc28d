//! Cropsure library
//!
//! Host-facing entry point: loads configuration, installs tracing and
//! assembles the registration and capture controllers over the simulated
//! service adapters.

pub mod bootstrap;

pub use bootstrap::{init_tracing_subscriber, load_config, AppRuntime};
pub use cs_app::usecases::{
    CaptureController, ControllerError, RegistrationController,
};
pub use cs_core::{AppConfig, Language, LocaleContext};
