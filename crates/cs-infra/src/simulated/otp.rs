use std::time::Duration;

use async_trait::async_trait;
use cs_core::ports::OtpServicePort;
use cs_core::registration::validation::mask_phone;
use tokio::time::sleep;
use tracing::info;

/// Accepts exactly one configured code for every phone number.
pub struct SimulatedOtpService {
    latency: Duration,
    accepted_otp: String,
}

impl SimulatedOtpService {
    pub fn new(latency: Duration, accepted_otp: impl Into<String>) -> Self {
        Self {
            latency,
            accepted_otp: accepted_otp.into(),
        }
    }
}

#[async_trait]
impl OtpServicePort for SimulatedOtpService {
    async fn send(&self, phone: &str) -> anyhow::Result<()> {
        sleep(self.latency).await;
        info!(phone = %mask_phone(phone), "simulated otp dispatched");
        Ok(())
    }

    async fn verify(&self, _phone: &str, code: &str) -> anyhow::Result<bool> {
        sleep(self.latency).await;
        Ok(code == self.accepted_otp)
    }
}
