use anyhow::Result;

use crate::capture::GeoPoint;

#[async_trait::async_trait]
pub trait GeolocationPort: Send + Sync {
    /// `Ok(None)` when no fix is available.
    async fn current_position(&self) -> Result<Option<GeoPoint>>;
}
