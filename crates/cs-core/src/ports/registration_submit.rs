use anyhow::Result;

use crate::registration::RegistrationSubmission;

#[async_trait::async_trait]
pub trait RegistrationSubmitPort: Send + Sync {
    async fn submit(&self, submission: &RegistrationSubmission) -> Result<()>;
}
