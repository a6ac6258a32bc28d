//! Application configuration model.
//!
//! Every section is optional in the file; missing keys take the values in
//! `defaults.rs`.

mod defaults;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::capture::{CapturePolicy, CropStage};
use crate::locale::Language;
use crate::registration::RegistrationPolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub registration: RegistrationConfig,
    pub capture: CaptureConfig,
    pub simulation: SimulationConfig,
    pub locale: LocaleConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    pub otp_window_secs: u32,
    pub max_otp_resends: u8,
    pub home_navigation_delay_ms: u64,
    pub external_registration_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub countdown_start: u8,
    pub sample_interval_ms: u64,
    pub countdown_interval_ms: u64,
    pub default_crop_stage: CropStage,
}

/// Latencies and fixtures of the simulated services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub otp_latency_ms: u64,
    pub lookup_latency_ms: u64,
    pub submit_latency_ms: u64,
    pub capture_latency_ms: u64,
    /// The only OTP the simulated service accepts.
    pub accepted_otp: String,
    /// Fixed seed for the simulated sensors; random when absent.
    pub sensor_seed: Option<u64>,
    /// Reported device position, if any.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub default_language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file_logging: bool,
    /// Overrides the platform log directory.
    pub directory: Option<PathBuf>,
}

impl RegistrationConfig {
    pub fn to_policy(&self) -> RegistrationPolicy {
        RegistrationPolicy {
            otp_window_secs: self.otp_window_secs,
            max_otp_resends: self.max_otp_resends,
            home_navigation_delay: Duration::from_millis(self.home_navigation_delay_ms),
            external_registration_url: self.external_registration_url.clone(),
        }
    }
}

impl CaptureConfig {
    pub fn to_policy(&self) -> CapturePolicy {
        CapturePolicy {
            countdown_start: self.countdown_start,
            sample_interval: Duration::from_millis(self.sample_interval_ms),
            countdown_interval: Duration::from_millis(self.countdown_interval_ms),
        }
    }
}
