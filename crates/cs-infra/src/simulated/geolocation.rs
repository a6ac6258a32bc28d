use async_trait::async_trait;
use cs_core::capture::GeoPoint;
use cs_core::ports::GeolocationPort;

/// Reports the same position, or none, on every call.
pub struct FixedGeolocation {
    position: Option<GeoPoint>,
}

impl FixedGeolocation {
    pub fn new(position: Option<GeoPoint>) -> Self {
        Self { position }
    }

    /// Both coordinates are needed for a fix.
    pub fn from_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        let position = latitude
            .zip(longitude)
            .map(|(latitude, longitude)| GeoPoint {
                latitude,
                longitude,
            });
        Self { position }
    }
}

#[async_trait]
impl GeolocationPort for FixedGeolocation {
    async fn current_position(&self) -> anyhow::Result<Option<GeoPoint>> {
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn half_a_coordinate_is_no_fix() {
        let gps = FixedGeolocation::from_coordinates(Some(18.52), None);
        assert_eq!(gps.current_position().await.unwrap(), None);

        let gps = FixedGeolocation::from_coordinates(Some(18.52), Some(73.85));
        assert_eq!(
            gps.current_position().await.unwrap(),
            Some(GeoPoint {
                latitude: 18.52,
                longitude: 73.85
            })
        );
    }
}
