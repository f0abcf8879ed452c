use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::models::{CafeRecord, RatingScale};

/// Raw submission of the add form
///
/// Every field defaults to empty so that an absent field is reported by
/// [`validate`] as missing rather than rejected while decoding the body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CafeForm {
    pub cafe: String,
    pub location: String,
    pub open_time: String,
    pub close_time: String,
    pub coffee_rating: String,
    pub wifi_rating: String,
    pub power_rating: String,
    pub csrf_token: String,
}

/// Submittable fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Cafe,
    Location,
    OpenTime,
    CloseTime,
    CoffeeRating,
    WifiRating,
    PowerRating,
}

impl FormField {
    /// Name of the input element carrying this field
    pub fn name(self) -> &'static str {
        match self {
            FormField::Cafe => "cafe",
            FormField::Location => "location",
            FormField::OpenTime => "open_time",
            FormField::CloseTime => "close_time",
            FormField::CoffeeRating => "coffee_rating",
            FormField::WifiRating => "wifi_rating",
            FormField::PowerRating => "power_rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Cafe => "Cafe name",
            FormField::Location => "Location",
            FormField::OpenTime => "Open Time",
            FormField::CloseTime => "Closing Time",
            FormField::CoffeeRating => RatingScale::COFFEE.label,
            FormField::WifiRating => RatingScale::WIFI.label,
            FormField::PowerRating => RatingScale::POWER.label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    Missing,
    InvalidChoice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub reason: FailureReason,
}

impl FieldError {
    pub fn message(&self) -> String {
        match self.reason {
            FailureReason::Missing => "This field is required.".to_string(),
            FailureReason::InvalidChoice => "Not a valid choice.".to_string(),
        }
    }
}

/// Every field that failed, in form order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Form validation failed for {} field(s)", .errors.len())]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn reason_for(&self, field: FormField) -> Option<FailureReason> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.reason)
    }

    /// Inline messages keyed by input name, for re-rendering the form
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|e| (e.field.name(), e.message()))
            .collect()
    }
}

fn check_text(field: FormField, value: &str, errors: &mut Vec<FieldError>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError {
            field,
            reason: FailureReason::Missing,
        });
    }
    trimmed.to_string()
}

fn check_choice(
    field: FormField,
    scale: RatingScale,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> String {
    let reason = if value.is_empty() {
        Some(FailureReason::Missing)
    } else if !scale.contains(value) {
        Some(FailureReason::InvalidChoice)
    } else {
        None
    };

    if let Some(reason) = reason {
        errors.push(FieldError { field, reason });
    }
    value.to_string()
}

/// Validate a submission into a record ready for insertion
///
/// Free-text fields must be non-empty after trimming and are stored trimmed.
/// Ratings must match one of their scale's choices exactly.
pub fn validate(form: &CafeForm) -> Result<CafeRecord, ValidationFailure> {
    let mut errors = Vec::new();

    let record = CafeRecord {
        cafe_name: check_text(FormField::Cafe, &form.cafe, &mut errors),
        location: check_text(FormField::Location, &form.location, &mut errors),
        open_time: check_text(FormField::OpenTime, &form.open_time, &mut errors),
        close_time: check_text(FormField::CloseTime, &form.close_time, &mut errors),
        coffee_rating: check_choice(
            FormField::CoffeeRating,
            RatingScale::COFFEE,
            &form.coffee_rating,
            &mut errors,
        ),
        wifi_rating: check_choice(
            FormField::WifiRating,
            RatingScale::WIFI,
            &form.wifi_rating,
            &mut errors,
        ),
        power_rating: check_choice(
            FormField::PowerRating,
            RatingScale::POWER,
            &form.power_rating,
            &mut errors,
        ),
    };

    if errors.is_empty() {
        Ok(record)
    } else {
        Err(ValidationFailure { errors })
    }
}
