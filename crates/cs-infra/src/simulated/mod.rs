//! Stand-ins for the remote services and device hardware.
//!
//! Each adapter waits a fixed latency before answering so the controllers
//! see the same suspension points a real backend would give them.

mod camera;
mod farmer_registry;
mod geolocation;
mod otp;
mod sensors;
mod submitter;

pub use camera::SimulatedCamera;
pub use farmer_registry::StaticFarmerRegistry;
pub use geolocation::FixedGeolocation;
pub use otp::SimulatedOtpService;
pub use sensors::RandomSensorSampler;
pub use submitter::SimulatedRegistrationSubmitter;
