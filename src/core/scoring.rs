use crate::models::{BloodGroup, DonorCandidate, MatchRequest, ScoringRules};
use crate::core::location::location_score;

pub const RARITY_BOOST: u8 = 2;
pub const EXPERIENCE_BONUS: u8 = 1;

/// Highest score a donor can reach
pub const MAX_MATCH_SCORE: u8 = 6;

/// Calculate the match score (0-6) of a donor against a request
///
/// Scoring formula:
/// score = location_score(donor, request)        # 0..=3
///       + rarity_boost(donor group)             # 0 or 2
///       + experience bonus                      # 1 if donations >= threshold
///
/// Compatibility is not checked here, callers filter first.
pub fn calculate_match_score(
    donor: &DonorCandidate,
    request: &MatchRequest,
    rules: &ScoringRules,
) -> u8 {
    location_score(&donor.location, &request.location)
        + rarity_boost(donor.blood_group)
        + experience_bonus(donor.total_donations, rules.experienced_donor_threshold)
}

/// Flat bonus for Rh-negative donors, regardless of the requested group
#[inline]
pub fn rarity_boost(group: BloodGroup) -> u8 {
    if group.is_rh_negative() {
        RARITY_BOOST
    } else {
        0
    }
}

#[inline]
fn experience_bonus(total_donations: u32, threshold: u32) -> u8 {
    if total_donations >= threshold {
        EXPERIENCE_BONUS
    } else {
        0
    }
}
