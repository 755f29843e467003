use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::DonorCandidate;
use crate::services::store::{DonorStore, StoreError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed file: {0}")]
    Json(#[from] serde_json::Error),
}

/// One donor record of a seed file
///
/// ```json
/// { "donorId": "…", "name": "…", "bloodGroup": "O-",
///   "location": { "region": "Dhaka", "subRegion": "Dhaka", "locality": "Shahbag" },
///   "totalDonations": 6, "available": true }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDonor {
    #[serde(flatten)]
    pub donor: DonorCandidate,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool { true }

/// Parse a JSON array of donor records
pub fn parse_seed(json: &str) -> Result<Vec<SeedDonor>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<SeedDonor>, SeedError> {
    let contents = std::fs::read_to_string(path)?;
    parse_seed(&contents)
}

/// Upsert every record into the store, returning how many were written
pub async fn seed_store(store: &dyn DonorStore, donors: &[SeedDonor]) -> Result<usize, StoreError> {
    for record in donors {
        store.upsert_donor(&record.donor, record.available).await?;
    }

    tracing::debug!("Seeded {} donors", donors.len());
    Ok(donors.len())
}
