use crate::models::BloodGroup;
use BloodGroup::*;

/// Donor groups eligible to give to each recipient group
///
/// Fixed immunohematology table. O- gives to everyone, AB+ takes from everyone.
const DONORS_FOR_A_POS: &[BloodGroup] = &[APositive, ANegative, OPositive, ONegative];
const DONORS_FOR_A_NEG: &[BloodGroup] = &[ANegative, ONegative];
const DONORS_FOR_B_POS: &[BloodGroup] = &[BPositive, BNegative, OPositive, ONegative];
const DONORS_FOR_B_NEG: &[BloodGroup] = &[BNegative, ONegative];
const DONORS_FOR_AB_POS: &[BloodGroup] = &[
    APositive, ANegative, BPositive, BNegative, AbPositive, AbNegative, OPositive, ONegative,
];
const DONORS_FOR_AB_NEG: &[BloodGroup] = &[ANegative, BNegative, AbNegative, ONegative];
const DONORS_FOR_O_POS: &[BloodGroup] = &[OPositive, ONegative];
const DONORS_FOR_O_NEG: &[BloodGroup] = &[ONegative];

/// Blood groups that can donate to `recipient`
#[inline]
pub fn compatible_donors(recipient: BloodGroup) -> &'static [BloodGroup] {
    match recipient {
        APositive => DONORS_FOR_A_POS,
        ANegative => DONORS_FOR_A_NEG,
        BPositive => DONORS_FOR_B_POS,
        BNegative => DONORS_FOR_B_NEG,
        AbPositive => DONORS_FOR_AB_POS,
        AbNegative => DONORS_FOR_AB_NEG,
        OPositive => DONORS_FOR_O_POS,
        ONegative => DONORS_FOR_O_NEG,
    }
}

/// Same lookup keyed by a raw label; unknown labels have no donors
pub fn compatible_donors_for_label(label: &str) -> &'static [BloodGroup] {
    label
        .parse::<BloodGroup>()
        .map(compatible_donors)
        .unwrap_or(&[])
}

#[inline]
pub fn can_donate_to(donor: BloodGroup, recipient: BloodGroup) -> bool {
    compatible_donors(recipient).contains(&donor)
}

/// Recipient groups a donor can serve, in table order
pub fn compatible_recipients(donor: BloodGroup) -> Vec<BloodGroup> {
    BloodGroup::ALL
        .into_iter()
        .filter(|&recipient| can_donate_to(donor, recipient))
        .collect()
}
