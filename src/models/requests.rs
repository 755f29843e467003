use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::Location;

/// Query string of the donor search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchDonorsQuery {
    #[validate(custom(function = "not_blank"))]
    #[serde(rename = "bloodGroup", default)]
    pub blood_group: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub region: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(rename = "subRegion", default)]
    pub sub_region: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl SearchDonorsQuery {
    pub fn location(&self) -> Location {
        Location::new(&self.region, &self.sub_region, &self.locality)
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Body of the availability toggle endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(blood_group: &str, locality: &str) -> SearchDonorsQuery {
        SearchDonorsQuery {
            blood_group: blood_group.to_string(),
            region: "Dhaka".to_string(),
            sub_region: "Dhaka".to_string(),
            locality: locality.to_string(),
            page: None,
            limit: None,
        }
    }

    #[test]
    fn test_complete_query_is_valid() {
        assert!(query("O-", "Shahbag").validate().is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let errors = query("", "  ").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("blood_group"));
        assert!(fields.contains_key("locality"));
        assert!(!fields.contains_key("region"));
    }
}
