//! Port interfaces for the application layer
//!
//! Ports define the contract between the controllers and the services
//! they drive. Everything outside this crate (simulated backends, the
//! camera, the host navigator) is reached through one of these traits.

mod camera;
mod clock;
mod farmer_lookup;
mod geolocation;
mod localization;
mod navigation;
mod otp;
mod registration_submit;
mod sensor;

pub use camera::CameraPort;
pub use clock::ClockPort;
pub use farmer_lookup::FarmerLookupPort;
pub use geolocation::GeolocationPort;
pub use localization::LocalizationPort;
pub use navigation::{NavigationPort, NavigationTarget};
pub use otp::OtpServicePort;
pub use registration_submit::RegistrationSubmitPort;
pub use sensor::SensorSamplerPort;
