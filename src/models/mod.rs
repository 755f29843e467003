// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BloodGroup, UnknownBloodGroup, Location, DonorCandidate, MatchRequest, ScoredDonor, Pagination, ScoringRules};
pub use requests::{SearchDonorsQuery, UpdateAvailabilityRequest};
pub use responses::{SearchDonorsResponse, CompatibilityResponse, HealthResponse, ErrorResponse};
