//! Cropsure application layer
//!
//! Controllers that drive the registration and capture state machines,
//! run their side effects through ports, and own every timer a screen needs.

pub mod usecases;

pub use usecases::{
    CaptureController, CaptureDeps, ControllerError, RegistrationController, RegistrationDeps,
};
