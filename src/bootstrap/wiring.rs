//! # Dependency injection
//!
//! Builds the adapters named by [`AppConfig`] and groups them into the port
//! bundles each controller takes. Assembly only: no business decisions and
//! no config validation happen here.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use cs_app::usecases::{CaptureDeps, RegistrationDeps};
use cs_core::config::{AppConfig, SimulationConfig};
use cs_core::ports::{LocalizationPort, NavigationPort};
use cs_infra::simulated::{
    FixedGeolocation, RandomSensorSampler, SimulatedCamera, SimulatedOtpService,
    SimulatedRegistrationSubmitter, StaticFarmerRegistry,
};
use cs_infra::{StaticLocalization, SystemClock};

/// Everything the controllers need, wired.
#[derive(Clone)]
pub struct AppDeps {
    pub registration: RegistrationDeps,
    pub capture: CaptureDeps,
    pub localization: Arc<dyn LocalizationPort>,
}

/// Wire the simulated adapters described by `config`.
///
/// `navigation` is the host's navigator; both screens share it.
pub fn wire_dependencies(config: &AppConfig, navigation: Arc<dyn NavigationPort>) -> AppDeps {
    let sim = &config.simulation;

    let registration = RegistrationDeps {
        otp: Arc::new(SimulatedOtpService::new(
            millis(sim.otp_latency_ms),
            sim.accepted_otp.clone(),
        )),
        farmer_lookup: Arc::new(StaticFarmerRegistry::new(millis(sim.lookup_latency_ms))),
        submit: Arc::new(SimulatedRegistrationSubmitter::new(millis(
            sim.submit_latency_ms,
        ))),
        navigation: navigation.clone(),
    };

    let capture = CaptureDeps {
        camera: Arc::new(SimulatedCamera::new(
            millis(sim.capture_latency_ms),
            photo_dir(),
        )),
        sensors: Arc::new(RandomSensorSampler::new(sim.sensor_seed)),
        geolocation: Arc::new(geolocation(sim)),
        navigation,
        clock: Arc::new(SystemClock),
    };

    AppDeps {
        registration,
        capture,
        localization: Arc::new(StaticLocalization),
    }
}

fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn geolocation(sim: &SimulationConfig) -> FixedGeolocation {
    FixedGeolocation::from_coordinates(sim.latitude, sim.longitude)
}

/// Where captured photos would land on this platform.
fn photo_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("cropsure")
}
