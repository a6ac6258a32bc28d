//! Navigation boundary.
//!
//! Controllers only say where to go next; the host's navigator decides how.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::capture::CapturePayload;
use crate::registration::FarmerProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigationTarget {
    /// Review screen for a freshly captured photo.
    CaptureReview(CapturePayload),
    /// Authenticated home after registration.
    Home { profile: FarmerProfile },
    /// Link opened outside the app.
    ExternalUrl(String),
}

#[async_trait::async_trait]
pub trait NavigationPort: Send + Sync {
    async fn navigate(&self, target: NavigationTarget) -> Result<()>;
}
