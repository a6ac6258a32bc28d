//! Registration use cases.
//!
//! This module exposes the registration flow controller.

mod controller;

pub use controller::{RegistrationController, RegistrationDeps};
