use serde::{Deserialize, Serialize};
use crate::models::domain::{BloodGroup, Pagination, ScoredDonor};

/// Response for the donor search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDonorsResponse {
    pub donors: Vec<ScoredDonor>,
    pub total: usize,
    pub pagination: Pagination,
}

/// Donor and recipient groups for a single blood group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    #[serde(rename = "bloodGroup")]
    pub blood_group: BloodGroup,
    pub donors: Vec<BloodGroup>,
    pub recipients: Vec<BloodGroup>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
