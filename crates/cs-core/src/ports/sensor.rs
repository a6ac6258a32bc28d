//! Readiness sensor port.
//!
//! Each call yields three independently classified signals. Real
//! implementations analyse the preview frame; tests plug in a scripted one.

use crate::capture::SensorReading;

pub trait SensorSamplerPort: Send + Sync {
    fn sample(&self) -> SensorReading;
}
