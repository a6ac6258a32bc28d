//! Capture use cases.
//!
//! This module exposes the capture guidance controller.

mod controller;

pub use controller::{CaptureController, CaptureDeps};
