// Core algorithm exports
pub mod compatibility;
pub mod filters;
pub mod location;
pub mod matcher;
pub mod scoring;

pub use compatibility::{compatible_donors, compatible_donors_for_label, compatible_recipients, can_donate_to};
pub use filters::matches_blood_group;
pub use location::{location_score, same_name};
pub use matcher::{Matcher, SearchResult};
pub use scoring::{calculate_match_score, rarity_boost, MAX_MATCH_SCORE};
