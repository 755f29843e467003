//! Blood Match - donor matching and prioritization for emergency blood requests
//!
//! This library provides the matching engine that ranks available donors
//! against an open blood request: compatibility filtering, location
//! proximity, rarity and experience scoring, and pagination.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, SearchResult, compatible_donors, location_score, rarity_boost, calculate_match_score};
pub use models::{BloodGroup, Location, DonorCandidate, MatchRequest, ScoredDonor, Pagination, ScoringRules};
