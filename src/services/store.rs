use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{BloodGroup, DonorCandidate};
use crate::services::postgres::{PostgresClient, PostgresError};

/// Errors surfaced by a donor store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] PostgresError),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Source of the donor pool for a search
///
/// Implementations only ever return donors that are currently available.
#[async_trait]
pub trait DonorStore: Send + Sync {
    /// Available donors whose group is in `groups`, in a stable order
    async fn fetch_available_donors(
        &self,
        groups: &[BloodGroup],
    ) -> Result<Vec<DonorCandidate>, StoreError>;

    /// Insert a donor or replace the record with the same id
    async fn upsert_donor(&self, donor: &DonorCandidate, available: bool) -> Result<(), StoreError>;

    /// Set a donor's availability, returning false for an unknown donor
    async fn set_availability(&self, donor_id: Uuid, available: bool) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}

#[async_trait]
impl DonorStore for PostgresClient {
    async fn fetch_available_donors(
        &self,
        groups: &[BloodGroup],
    ) -> Result<Vec<DonorCandidate>, StoreError> {
        Ok(PostgresClient::fetch_available_donors(self, groups).await?)
    }

    async fn upsert_donor(&self, donor: &DonorCandidate, available: bool) -> Result<(), StoreError> {
        Ok(PostgresClient::upsert_donor(self, donor, available).await?)
    }

    async fn set_availability(&self, donor_id: Uuid, available: bool) -> Result<bool, StoreError> {
        Ok(PostgresClient::set_availability(self, donor_id, available).await?)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(PostgresClient::health_check(self).await?)
    }
}

#[derive(Debug, Clone)]
struct StoredDonor {
    donor: DonorCandidate,
    available: bool,
}

/// Donor store held in memory, in insertion order
///
/// Used for local runs without a database and in tests.
#[derive(Debug, Default)]
pub struct InMemoryDonorStore {
    donors: RwLock<Vec<StoredDonor>>,
}

impl InMemoryDonorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DonorStore for InMemoryDonorStore {
    async fn fetch_available_donors(
        &self,
        groups: &[BloodGroup],
    ) -> Result<Vec<DonorCandidate>, StoreError> {
        let donors = self.donors.read().await;
        Ok(donors
            .iter()
            .filter(|d| d.available && groups.contains(&d.donor.blood_group))
            .map(|d| d.donor.clone())
            .collect())
    }

    async fn upsert_donor(&self, donor: &DonorCandidate, available: bool) -> Result<(), StoreError> {
        let mut donor = donor.clone();
        donor.location = donor.location.canonical();

        let mut donors = self.donors.write().await;
        match donors.iter_mut().find(|d| d.donor.donor_id == donor.donor_id) {
            Some(existing) => {
                existing.donor = donor;
                existing.available = available;
            }
            None => donors.push(StoredDonor { donor, available }),
        }
        Ok(())
    }

    async fn set_availability(&self, donor_id: Uuid, available: bool) -> Result<bool, StoreError> {
        let mut donors = self.donors.write().await;
        match donors.iter_mut().find(|d| d.donor.donor_id == donor_id) {
            Some(stored) => {
                stored.available = available;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
