//! Field checks for doctor profiles.

use url::Url;

use crate::domain::validation::{FieldViolation, ViolationCode};

/// Highest accepted rating.
pub const RATING_MAX: f64 = 5.0;

pub(super) fn non_blank(value: String, field: &'static str) -> Result<String, FieldViolation> {
    if value.trim().is_empty() {
        return Err(FieldViolation::new(
            field,
            ViolationCode::BlankField,
            format!("{field} is required"),
        ));
    }
    Ok(value)
}

pub(super) fn non_negative(value: f64, field: &'static str) -> Result<f64, FieldViolation> {
    if !value.is_finite() {
        return Err(FieldViolation::new(
            field,
            ViolationCode::InvalidNumber,
            format!("{field} must be a finite number"),
        ));
    }
    if value < 0.0 {
        return Err(FieldViolation::new(
            field,
            ViolationCode::OutOfRange,
            format!("{field} must be a positive number"),
        ));
    }
    Ok(value)
}

pub(super) fn rating(value: f64, field: &'static str) -> Result<f64, FieldViolation> {
    let value = non_negative(value, field)?;
    if value > RATING_MAX {
        return Err(FieldViolation::new(
            field,
            ViolationCode::OutOfRange,
            format!("{field} must be between 0 and 5"),
        ));
    }
    Ok(value)
}

pub(super) fn image_url(value: String, field: &'static str) -> Result<String, FieldViolation> {
    match Url::parse(value.trim()) {
        Ok(_) => Ok(value),
        Err(_) => Err(FieldViolation::new(
            field,
            ViolationCode::InvalidUrl,
            "Invalid image URL",
        )),
    }
}
