//! PMFBY farmer registry port.

use anyhow::Result;

use crate::registration::FarmerProfile;

#[async_trait::async_trait]
pub trait FarmerLookupPort: Send + Sync {
    /// Looks up a normalized (uppercase) PMFBY id. `Ok(None)` means not found.
    async fn lookup(&self, external_id: &str) -> Result<Option<FarmerProfile>>;
}
