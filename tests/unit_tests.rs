// Unit tests for Blood Match

use blood_match::core::{
    compatibility::{compatible_donors, compatible_donors_for_label, can_donate_to},
    location::location_score,
    scoring::{calculate_match_score, rarity_boost, MAX_MATCH_SCORE},
    Matcher,
};
use blood_match::models::{BloodGroup, DonorCandidate, Location, MatchRequest, ScoringRules};
use std::collections::HashSet;
use uuid::Uuid;

fn donor(name: &str, group: BloodGroup, location: Location, total_donations: u32) -> DonorCandidate {
    DonorCandidate {
        donor_id: Uuid::new_v4(),
        name: name.to_string(),
        blood_group: group,
        location,
        total_donations,
        last_donation_at: None,
    }
}

fn request(group: BloodGroup) -> MatchRequest {
    MatchRequest {
        blood_group: group,
        location: Location::new("Dhaka", "Dhaka", "Shahbag"),
    }
}

fn locations() -> Vec<Location> {
    vec![
        Location::new("Dhaka", "Dhaka", "Shahbag"),
        Location::new("Dhaka", "Dhaka", "Gulshan"),
        Location::new("Dhaka", "Gazipur", "Tongi"),
        Location::new("Khulna", "Jessore", "Sadar"),
    ]
}

#[test]
fn test_o_negative_donates_to_every_group() {
    for group in BloodGroup::ALL {
        assert!(compatible_donors(group).contains(&BloodGroup::ONegative));
    }
}

#[test]
fn test_ab_positive_receives_from_every_group() {
    let donors: HashSet<BloodGroup> = compatible_donors(BloodGroup::AbPositive).iter().copied().collect();
    assert_eq!(donors, BloodGroup::ALL.into_iter().collect());
}

#[test]
fn test_every_group_donates_to_itself() {
    for group in BloodGroup::ALL {
        assert!(can_donate_to(group, group), "{} should donate to itself", group);
    }
}

#[test]
fn test_malformed_label_has_no_donors() {
    assert!(compatible_donors_for_label("O").is_empty());
    assert!(compatible_donors_for_label("unknown").is_empty());
}

#[test]
fn test_location_score_decreases_with_coarser_match() {
    let req = Location::new("Dhaka", "Dhaka", "Shahbag");
    let scores: Vec<u8> = locations().iter().map(|loc| location_score(loc, &req)).collect();

    assert_eq!(scores, vec![3, 2, 1, 0]);
    assert!(scores.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn test_rarity_boost_only_for_rh_negative() {
    let rare = [
        BloodGroup::ANegative,
        BloodGroup::BNegative,
        BloodGroup::AbNegative,
        BloodGroup::ONegative,
    ];
    for group in BloodGroup::ALL {
        let expected = if rare.contains(&group) { 2 } else { 0 };
        assert_eq!(rarity_boost(group), expected, "{}", group);
    }
}

#[test]
fn test_score_bounds() {
    let rules = ScoringRules::default();

    for group in BloodGroup::ALL {
        for location in locations() {
            for total_donations in [0, 4, 5, 100] {
                let d = donor("d", group, location.clone(), total_donations);
                let score = calculate_match_score(&d, &request(BloodGroup::AbPositive), &rules);
                assert!(score <= MAX_MATCH_SCORE, "score {} out of range", score);
            }
        }
    }
}

#[test]
fn test_b_negative_request_keeps_only_b_negative_and_o_negative() {
    let matcher = Matcher::with_default_rules();
    let shahbag = Location::new("Dhaka", "Dhaka", "Shahbag");
    let pool = vec![
        donor("b-", BloodGroup::BNegative, shahbag.clone(), 0),
        donor("o-", BloodGroup::ONegative, shahbag.clone(), 0),
        donor("a+", BloodGroup::APositive, shahbag.clone(), 0),
        donor("ab+", BloodGroup::AbPositive, shahbag, 0),
    ];

    let groups: HashSet<BloodGroup> = matcher
        .rank(pool, &request(BloodGroup::BNegative))
        .into_iter()
        .map(|d| d.donor.blood_group)
        .collect();

    assert_eq!(groups, HashSet::from([BloodGroup::BNegative, BloodGroup::ONegative]));
}

#[test]
fn test_end_to_end_example() {
    let matcher = Matcher::with_default_rules();
    let pool = vec![
        donor("first", BloodGroup::ONegative, Location::new("Dhaka", "Dhaka", "Shahbag"), 6),
        donor("second", BloodGroup::ONegative, Location::new("Dhaka", "Narayanganj", "Gulshan"), 1),
    ];

    let result = matcher.search(pool, &request(BloodGroup::ONegative), None, None);

    let ranked: Vec<(&str, u8)> = result
        .donors
        .iter()
        .map(|d| (d.donor.name.as_str(), d.match_score))
        .collect();
    assert_eq!(ranked, vec![("first", 6), ("second", 3)]);
}

#[test]
fn test_equal_scores_preserve_input_order() {
    let matcher = Matcher::with_default_rules();
    let gulshan = Location::new("Dhaka", "Dhaka", "Gulshan");
    let pool = vec![
        donor("x", BloodGroup::APositive, gulshan.clone(), 0),
        donor("best", BloodGroup::ANegative, Location::new("Dhaka", "Dhaka", "Shahbag"), 9),
        donor("y", BloodGroup::APositive, gulshan, 0),
    ];

    let names: Vec<String> = matcher
        .rank(pool, &request(BloodGroup::APositive))
        .into_iter()
        .map(|d| d.donor.name)
        .collect();

    assert_eq!(names, vec!["best", "x", "y"]);
}

#[test]
fn test_pages_reconstruct_full_ranking() {
    let matcher = Matcher::with_default_rules();
    let locs = locations();
    let pool: Vec<DonorCandidate> = (0..23)
        .map(|i| {
            donor(
                &format!("d{}", i),
                BloodGroup::ALL[i % 8],
                locs[i % locs.len()].clone(),
                (i % 7) as u32,
            )
        })
        .collect();
    let req = request(BloodGroup::AbPositive);

    let full: Vec<Uuid> = matcher
        .rank(pool.clone(), &req)
        .into_iter()
        .map(|d| d.donor.donor_id)
        .collect();

    let mut paged = Vec::new();
    let mut page = 1;
    loop {
        let result = matcher.search(pool.clone(), &req, Some(page), Some(4));
        if result.donors.is_empty() {
            break;
        }
        assert_eq!(result.pagination.total, full.len());
        paged.extend(result.donors.into_iter().map(|d| d.donor.donor_id));
        page += 1;
    }

    assert_eq!(paged, full);
    assert_eq!(page - 1, 6); // ceil(23 / 4)
}
