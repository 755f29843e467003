// Service exports
pub mod postgres;
pub mod seed;
pub mod store;

pub use postgres::{PostgresClient, PostgresError};
pub use seed::{load_seed_file, parse_seed, seed_store, SeedDonor, SeedError};
pub use store::{DonorStore, InMemoryDonorStore, StoreError};
