//! Record data model
//!
//! Defines the `Record` entered through the form, the derived BMI value,
//! and validation of raw form input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One validated personal-data entry
///
/// Records are immutable once created; the store only appends and clears.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub name: String,
    /// Age in whole years
    pub age: u32,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Body mass index, `None` when height or weight is zero
    pub bmi: Option<f64>,
    pub city: String,
    pub country: String,
}

impl Record {
    /// BMI formatted for display, `"N/A"` for the missing sentinel
    pub fn display_bmi(&self) -> String {
        match self.bmi {
            Some(bmi) => format!("{:.2}", bmi),
            None => "N/A".to_string(),
        }
    }
}

/// Compute BMI (kg / m²) rounded to 2 decimal places
///
/// Returns `None` when either input is zero or not a finite number, so a
/// record without usable measurements carries an explicit "not available"
/// value instead of a bogus one.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 || !weight_kg.is_finite() || !height_cm.is_finite() {
        return None;
    }

    let height_m = height_cm / 100.0;
    Some((weight_kg / (height_m * height_m) * 100.0).round() / 100.0)
}

/// Errors reported back to the user when form input does not validate
#[derive(Error, Debug, PartialEq)]
pub enum FormError {
    #[error("Please enter a name")]
    EmptyName,

    #[error("Age must be a whole number")]
    InvalidAge,

    #[error("Height must be a non-negative number (cm)")]
    InvalidHeight,

    #[error("Weight must be a non-negative number (kg)")]
    InvalidWeight,

    #[error("Please enter a city")]
    EmptyCity,

    #[error("Please enter a country")]
    EmptyCountry,
}

/// Raw form input before validation
///
/// Field values arrive as strings straight from the inputs; `parse`
/// turns them into a `Record` or reports the first failing field.
#[derive(Debug, Default, Clone)]
pub struct RecordDraft {
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub city: String,
    pub country: String,
}

impl RecordDraft {
    /// Validate the draft and build a `Record`
    ///
    /// Checks fields in form order and stops at the first failure, so the
    /// user is alerted about one problem at a time. Zero height or weight
    /// is accepted (it is a well-formed number) and flows into the BMI
    /// sentinel; negative and non-finite values are rejected.
    pub fn parse(&self) -> Result<Record, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }

        let age: u32 = self.age.trim().parse().map_err(|_| FormError::InvalidAge)?;

        let height: f64 = self
            .height
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidHeight)?;
        if !height.is_finite() || height < 0.0 {
            return Err(FormError::InvalidHeight);
        }

        let weight: f64 = self
            .weight
            .trim()
            .parse()
            .map_err(|_| FormError::InvalidWeight)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(FormError::InvalidWeight);
        }

        let city = self.city.trim();
        if city.is_empty() {
            return Err(FormError::EmptyCity);
        }

        let country = self.country.trim();
        if country.is_empty() {
            return Err(FormError::EmptyCountry);
        }

        Ok(Record {
            name: name.to_string(),
            age,
            height,
            weight,
            bmi: compute_bmi(weight, height),
            city: city.to_string(),
            country: country.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RecordDraft {
        RecordDraft {
            name: "Ana".to_string(),
            age: "30".to_string(),
            height: "165".to_string(),
            weight: "60".to_string(),
            city: "Lima".to_string(),
            country: "Peru".to_string(),
        }
    }

    #[test]
    fn test_compute_bmi_rounds_to_two_decimals() {
        // 60 / 1.65² = 22.0385... -> 22.04
        assert_eq!(compute_bmi(60.0, 165.0), Some(22.04));
        assert_eq!(compute_bmi(80.0, 180.0), Some(24.69));
    }

    #[test]
    fn test_compute_bmi_sentinel_for_missing_measurements() {
        assert_eq!(compute_bmi(0.0, 165.0), None);
        assert_eq!(compute_bmi(60.0, 0.0), None);
        assert_eq!(compute_bmi(f64::NAN, 165.0), None);
    }

    #[test]
    fn test_parse_valid_draft() {
        let record = valid_draft().parse().unwrap();
        assert_eq!(record.name, "Ana");
        assert_eq!(record.age, 30);
        assert_eq!(record.bmi, Some(22.04));
        assert_eq!(record.country, "Peru");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let mut draft = valid_draft();
        draft.name = "  Ana  ".to_string();
        draft.city = " Lima ".to_string();

        let record = draft.parse().unwrap();
        assert_eq!(record.name, "Ana");
        assert_eq!(record.city, "Lima");
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        assert_eq!(draft.parse(), Err(FormError::EmptyName));

        let mut draft = valid_draft();
        draft.age = "thirty".to_string();
        assert_eq!(draft.parse(), Err(FormError::InvalidAge));

        let mut draft = valid_draft();
        draft.age = "-3".to_string();
        assert_eq!(draft.parse(), Err(FormError::InvalidAge));

        let mut draft = valid_draft();
        draft.height = String::new();
        assert_eq!(draft.parse(), Err(FormError::InvalidHeight));

        let mut draft = valid_draft();
        draft.weight = "-60".to_string();
        assert_eq!(draft.parse(), Err(FormError::InvalidWeight));

        let mut draft = valid_draft();
        draft.country = String::new();
        assert_eq!(draft.parse(), Err(FormError::EmptyCountry));
    }

    #[test]
    fn test_parse_zero_measurements_yield_bmi_sentinel() {
        let mut draft = valid_draft();
        draft.weight = "0".to_string();

        let record = draft.parse().unwrap();
        assert_eq!(record.bmi, None);
        assert_eq!(record.display_bmi(), "N/A");
    }

    #[test]
    fn test_display_bmi_formats_two_decimals() {
        let record = valid_draft().parse().unwrap();
        assert_eq!(record.display_bmi(), "22.04");
    }

    #[test]
    fn test_form_error_messages() {
        assert_eq!(FormError::EmptyName.to_string(), "Please enter a name");
        assert_eq!(
            FormError::InvalidWeight.to_string(),
            "Weight must be a non-negative number (kg)"
        );
    }
}
