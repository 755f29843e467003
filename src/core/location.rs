use crate::models::Location;

pub const SAME_LOCALITY_SCORE: u8 = 3;
pub const SAME_SUB_REGION_SCORE: u8 = 2;
pub const SAME_REGION_SCORE: u8 = 1;

/// Proximity score between a donor and a request location
///
/// The finest level that matches wins: locality 3, sub-region 2, region 1,
/// otherwise 0. Levels are compared independently, no containment check.
#[inline]
pub fn location_score(donor: &Location, request: &Location) -> u8 {
    if same_name(&donor.locality, &request.locality) {
        SAME_LOCALITY_SCORE
    } else if same_name(&donor.sub_region, &request.sub_region) {
        SAME_SUB_REGION_SCORE
    } else if same_name(&donor.region, &request.region) {
        SAME_REGION_SCORE
    } else {
        0
    }
}

/// Location name equality ignoring surrounding whitespace and case
#[inline]
pub fn same_name(a: &str, b: &str) -> bool {
    a.trim()
        .chars()
        .flat_map(char::to_uppercase)
        .eq(b.trim().chars().flat_map(char::to_uppercase))
}
