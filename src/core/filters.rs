use crate::models::{DonorCandidate, MatchRequest};
use crate::core::compatibility::can_donate_to;

/// Check if a donor's group can give to the requested group
///
/// First stage of the search pipeline. Availability is filtered by the
/// store before the pool reaches the matcher.
#[inline]
pub fn matches_blood_group(donor: &DonorCandidate, request: &MatchRequest) -> bool {
    can_donate_to(donor.blood_group, request.blood_group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BloodGroup, Location};
    use uuid::Uuid;

    fn donor(group: BloodGroup) -> DonorCandidate {
        DonorCandidate {
            donor_id: Uuid::new_v4(),
            name: format!("Donor {}", group),
            blood_group: group,
            location: Location::new("Dhaka", "Dhaka", "Mirpur"),
            total_donations: 0,
            last_donation_at: None,
        }
    }

    #[test]
    fn test_b_negative_request() {
        let request = MatchRequest {
            blood_group: BloodGroup::BNegative,
            location: Location::new("Dhaka", "Dhaka", "Mirpur"),
        };

        let kept: Vec<BloodGroup> = [
            BloodGroup::BNegative,
            BloodGroup::ONegative,
            BloodGroup::APositive,
            BloodGroup::AbPositive,
        ]
        .into_iter()
        .map(donor)
        .filter(|d| matches_blood_group(d, &request))
        .map(|d| d.blood_group)
        .collect();

        assert_eq!(kept, vec![BloodGroup::BNegative, BloodGroup::ONegative]);
    }
}
