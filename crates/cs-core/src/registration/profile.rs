use serde::{Deserialize, Serialize};

/// Farmer record returned by a successful PMFBY lookup.
///
/// Read-only once the external id is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmerProfile {
    pub name: String,
    /// Father's or husband's name as recorded on the scheme.
    pub relative_name: String,
    pub state: String,
    pub district: String,
    pub village: String,
    /// Display string, e.g. "2.5 acres".
    pub land_area: String,
    pub crops: Vec<String>,
}

/// Payload of the final registration submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSubmission {
    pub phone_number: String,
    pub external_id: String,
    pub profile: FarmerProfile,
}
