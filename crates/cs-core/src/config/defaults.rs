use super::*;

impl Default for RegistrationConfig {
    fn default() -> Self {
        let policy = RegistrationPolicy::default();
        Self {
            otp_window_secs: policy.otp_window_secs,
            max_otp_resends: policy.max_otp_resends,
            home_navigation_delay_ms: policy.home_navigation_delay.as_millis() as u64,
            external_registration_url: policy.external_registration_url,
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        let policy = CapturePolicy::default();
        Self {
            countdown_start: policy.countdown_start,
            sample_interval_ms: policy.sample_interval.as_millis() as u64,
            countdown_interval_ms: policy.countdown_interval.as_millis() as u64,
            default_crop_stage: CropStage::Vegetative,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            otp_latency_ms: 1500,
            lookup_latency_ms: 2000,
            submit_latency_ms: 2000,
            capture_latency_ms: 500,
            accepted_otp: "123456".to_string(),
            sensor_seed: None,
            latitude: None,
            longitude: None,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_logging: true,
            directory: None,
        }
    }
}
