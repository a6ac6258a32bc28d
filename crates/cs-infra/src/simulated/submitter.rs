use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use cs_core::ports::RegistrationSubmitPort;
use cs_core::registration::RegistrationSubmission;
use tokio::time::sleep;
use tracing::info;

/// Accepts every submission and keeps it in memory.
pub struct SimulatedRegistrationSubmitter {
    latency: Duration,
    accepted: Mutex<Vec<RegistrationSubmission>>,
}

impl SimulatedRegistrationSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            accepted: Mutex::new(Vec::new()),
        }
    }

    pub fn accepted(&self) -> Vec<RegistrationSubmission> {
        self.accepted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl RegistrationSubmitPort for SimulatedRegistrationSubmitter {
    async fn submit(&self, submission: &RegistrationSubmission) -> anyhow::Result<()> {
        sleep(self.latency).await;
        info!(external_id = %submission.external_id, "simulated registration accepted");
        self.accepted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(submission.clone());
        Ok(())
    }
}
