use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// ABO/Rh blood group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }

    /// Rh-negative groups are the scarce ones
    pub fn is_rh_negative(self) -> bool {
        matches!(
            self,
            BloodGroup::ANegative
                | BloodGroup::BNegative
                | BloodGroup::AbNegative
                | BloodGroup::ONegative
        )
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label that is not one of the eight ABO/Rh groups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown blood group: {0}")]
pub struct UnknownBloodGroup(pub String);

impl FromStr for BloodGroup {
    type Err = UnknownBloodGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_uppercase();
        BloodGroup::ALL
            .into_iter()
            .find(|group| group.label() == label)
            .ok_or_else(|| UnknownBloodGroup(s.to_string()))
    }
}

/// Three-level administrative location (division / district / thana)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub region: String,
    #[serde(rename = "subRegion")]
    pub sub_region: String,
    pub locality: String,
}

impl Location {
    pub fn new(
        region: impl Into<String>,
        sub_region: impl Into<String>,
        locality: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            sub_region: sub_region.into(),
            locality: locality.into(),
        }
    }

    /// Canonical form used for storage: trimmed, uppercased
    pub fn canonical(&self) -> Self {
        Self {
            region: canonical_name(&self.region),
            sub_region: canonical_name(&self.sub_region),
            locality: canonical_name(&self.locality),
        }
    }
}

pub fn canonical_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Read-only view of a donor as seen by the matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorCandidate {
    #[serde(rename = "donorId")]
    pub donor_id: Uuid,
    pub name: String,
    #[serde(rename = "bloodGroup")]
    pub blood_group: BloodGroup,
    pub location: Location,
    #[serde(rename = "totalDonations", default)]
    pub total_donations: u32,
    #[serde(rename = "lastDonationAt", default)]
    pub last_donation_at: Option<DateTime<Utc>>,
}

/// Open blood request the pool is matched against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(rename = "bloodGroup")]
    pub blood_group: BloodGroup,
    pub location: Location,
}

/// Compatible donor with its composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDonor {
    #[serde(flatten)]
    pub donor: DonorCandidate,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Pagination metadata; `total` counts matches before slicing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub pages: usize,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: usize) -> Self {
        let pages = if limit == 0 {
            0
        } else {
            total.div_ceil(limit as usize)
        };

        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}

/// Tunable parts of the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    /// Donation count at which a donor earns the experience point
    pub experienced_donor_threshold: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            experienced_donor_threshold: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        for group in BloodGroup::ALL {
            assert_eq!(group.label().parse::<BloodGroup>(), Ok(group));
        }
        assert_eq!(" ab- ".parse::<BloodGroup>(), Ok(BloodGroup::AbNegative));
        assert!("C+".parse::<BloodGroup>().is_err());
        assert!("".parse::<BloodGroup>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&BloodGroup::AbPositive).unwrap();
        assert_eq!(json, "\"AB+\"");

        let parsed: BloodGroup = serde_json::from_str("\"O-\"").unwrap();
        assert_eq!(parsed, BloodGroup::ONegative);
    }

    #[test]
    fn test_canonical_location() {
        let loc = Location::new(" Dhaka", "dhaka ", "Shahbag");
        assert_eq!(loc.canonical(), Location::new("DHAKA", "DHAKA", "SHAHBAG"));
    }

    #[test]
    fn test_pagination_pages() {
        assert_eq!(Pagination::new(1, 20, 0).pages, 0);
        assert_eq!(Pagination::new(1, 20, 20).pages, 1);
        assert_eq!(Pagination::new(1, 20, 21).pages, 2);
        assert_eq!(Pagination::new(1, 3, 7).pages, 3);
    }

    #[test]
    fn test_scored_donor_flattens_candidate() {
        let scored = ScoredDonor {
            donor: DonorCandidate {
                donor_id: Uuid::nil(),
                name: "Rahim".to_string(),
                blood_group: BloodGroup::BNegative,
                location: Location::new("Dhaka", "Dhaka", "Mirpur"),
                total_donations: 3,
                last_donation_at: None,
            },
            match_score: 4,
        };

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["bloodGroup"], "B-");
        assert_eq!(value["matchScore"], 4);
        assert_eq!(value["location"]["subRegion"], "Dhaka");
    }
}
