use std::time::Duration;

/// Tunables for the registration flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPolicy {
    /// Seconds before resend unlocks after an OTP is sent.
    pub otp_window_secs: u32,
    pub max_otp_resends: u8,
    /// Pause on the completion screen before navigating home.
    pub home_navigation_delay: Duration,
    /// Escape hatch opened when a PMFBY id is unknown.
    pub external_registration_url: String,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            otp_window_secs: 60,
            max_otp_resends: 3,
            home_navigation_delay: Duration::from_secs(2),
            external_registration_url: "https://pmfby.gov.in/farmerRegistrationForm".to_string(),
        }
    }
}
