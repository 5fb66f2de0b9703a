//! Doctor bounds mirroring the backend entity constraints.
//!
//! Keeping these rules in sync with `backend/src/domain/doctor` ensures
//! seeded records are always accepted by the backend.
//!
//! # Validation Rules
//!
//! - Text fields must not be blank
//! - `experience`, `fee` and `reviewCount` must be finite and non-negative
//! - `rating` must be finite and within [`RATING_MIN`]..=[`RATING_MAX`]
//! - `image` must parse as an absolute URL

use url::Url;

use crate::seed::ExampleDoctorSeed;

/// Lowest accepted rating.
pub const RATING_MIN: f64 = 0.0;

/// Highest accepted rating.
pub const RATING_MAX: f64 = 5.0;

/// Checks a doctor against the backend's entity bounds.
///
/// # Errors
///
/// Returns a short description of the first broken bound.
///
/// # Examples
///
/// ```
/// use example_data::{sample_doctors, validate_doctor};
///
/// let mut doctor = sample_doctors().remove(0).doctor;
/// assert!(validate_doctor(&doctor).is_ok());
///
/// doctor.rating = 6.0;
/// assert!(validate_doctor(&doctor).is_err());
/// ```
pub fn validate_doctor(doctor: &ExampleDoctorSeed) -> Result<(), &'static str> {
    if doctor.name.trim().is_empty() {
        return Err("name must not be blank");
    }
    if doctor.specialty.trim().is_empty() {
        return Err("specialty must not be blank");
    }
    if doctor.city.trim().is_empty() {
        return Err("city must not be blank");
    }
    if !is_non_negative(doctor.experience) {
        return Err("experience must be a non-negative number");
    }
    if !is_valid_rating(doctor.rating) {
        return Err("rating must be between 0 and 5");
    }
    if !is_non_negative(doctor.fee) {
        return Err("fee must be a non-negative number");
    }
    if doctor.review_count.is_some_and(|count| !is_non_negative(count)) {
        return Err("reviewCount must be a non-negative number");
    }
    if Url::parse(&doctor.image).is_err() {
        return Err("image must be a valid URL");
    }
    Ok(())
}

/// Returns `true` for finite ratings inside the accepted range.
#[must_use]
pub fn is_valid_rating(value: f64) -> bool {
    value.is_finite() && (RATING_MIN..=RATING_MAX).contains(&value)
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
