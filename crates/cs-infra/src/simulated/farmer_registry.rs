use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use cs_core::ports::FarmerLookupPort;
use cs_core::registration::FarmerProfile;
use tokio::time::sleep;
use tracing::debug;

/// Fixed allow-list of PMFBY ids with their scheme records.
pub struct StaticFarmerRegistry {
    latency: Duration,
    profiles: HashMap<String, FarmerProfile>,
}

impl StaticFarmerRegistry {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            profiles: seed_profiles(),
        }
    }

    pub fn known_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.profiles.keys().cloned().collect();
        ids.sort();
        ids
    }
}

#[async_trait]
impl FarmerLookupPort for StaticFarmerRegistry {
    async fn lookup(&self, external_id: &str) -> anyhow::Result<Option<FarmerProfile>> {
        sleep(self.latency).await;
        let found = self.profiles.get(&external_id.to_ascii_uppercase()).cloned();
        debug!(external_id, found = found.is_some(), "simulated pmfby lookup");
        Ok(found)
    }
}

fn profile(
    name: &str,
    relative_name: &str,
    state: &str,
    district: &str,
    village: &str,
    land_area: &str,
    crops: &[&str],
) -> FarmerProfile {
    FarmerProfile {
        name: name.to_string(),
        relative_name: relative_name.to_string(),
        state: state.to_string(),
        district: district.to_string(),
        village: village.to_string(),
        land_area: land_area.to_string(),
        crops: crops.iter().map(|crop| crop.to_string()).collect(),
    }
}

fn seed_profiles() -> HashMap<String, FarmerProfile> {
    HashMap::from([
        (
            "PMFBY2024000001".to_string(),
            profile(
                "Ramesh Patil",
                "Suresh Patil",
                "Maharashtra",
                "Pune",
                "Wagholi",
                "2.5 acres",
                &["Soybean", "Wheat"],
            ),
        ),
        (
            "PMFBY2024000002".to_string(),
            profile(
                "Sunita Devi",
                "Mahesh Singh",
                "Uttar Pradesh",
                "Lucknow",
                "Malihabad",
                "1.8 acres",
                &["Paddy", "Mustard"],
            ),
        ),
        (
            "PMFBY2024000003".to_string(),
            profile(
                "Harpreet Singh",
                "Gurdev Singh",
                "Punjab",
                "Ludhiana",
                "Khanna",
                "4.0 acres",
                &["Wheat", "Cotton"],
            ),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn allow_list_has_three_ids() {
        let registry = StaticFarmerRegistry::new(Duration::ZERO);
        assert_eq!(
            registry.known_ids(),
            vec!["PMFBY2024000001", "PMFBY2024000002", "PMFBY2024000003"]
        );
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let registry = StaticFarmerRegistry::new(Duration::ZERO);
        let found = registry.lookup("pmfby2024000002").await.unwrap();
        assert_eq!(found.map(|p| p.district), Some("Lucknow".to_string()));
    }

    #[tokio::test]
    async fn well_formed_but_unknown_id_is_not_found() {
        let registry = StaticFarmerRegistry::new(Duration::ZERO);
        assert_eq!(registry.lookup("PMFBY2024000004").await.unwrap(), None);
    }
}
