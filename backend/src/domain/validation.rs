//! Field-level validation failures shared by request parsers.
//!
//! Parsers collect every violated constraint instead of stopping at the
//! first, so clients can fix a request in one round trip.

use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use super::Error;

/// Message clients see on the top-level error for any validation failure.
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation error";

/// Machine-readable reason a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// A required field was absent.
    MissingField,
    /// Text was empty once trimmed.
    BlankField,
    /// Value has the wrong JSON type.
    InvalidType,
    /// Value was expected to be an integer.
    InvalidInteger,
    /// Value was expected to be a finite number.
    InvalidNumber,
    /// Number fell outside the accepted range.
    OutOfRange,
    /// Value is not one of the accepted options.
    InvalidOption,
    /// Value is not a well-formed absolute URL.
    InvalidUrl,
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    /// Wire name of the field, e.g. `reviewCount`.
    #[schema(example = "rating")]
    pub field: String,
    /// Why the field was rejected.
    pub code: ViolationCode,
    /// Human-readable explanation.
    #[schema(example = "rating must be between 0 and 5")]
    pub message: String,
}

impl FieldViolation {
    /// Build a violation.
    #[must_use]
    pub fn new(field: impl Into<String>, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

/// Every constraint a request broke, in field order.
///
/// ## Invariants
/// - `violations` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", violations.len())]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// A single-field failure.
    #[must_use]
    pub fn single(violation: FieldViolation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// The rejected fields.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        self.violations.as_slice()
    }

    /// Whether `field` is among the rejected fields.
    #[must_use]
    pub fn rejects(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl From<ValidationError> for Error {
    fn from(value: ValidationError) -> Self {
        Self::invalid_request(VALIDATION_ERROR_MESSAGE)
            .with_details(json!({ "errors": value.violations }))
    }
}

/// Accumulates violations while a parser walks its input.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<FieldViolation>);

impl Violations {
    pub(crate) fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    /// Record the error of `result`, if any, and pass the value through.
    pub(crate) fn check<T>(&mut self, result: Result<T, FieldViolation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.push(violation);
                None
            }
        }
    }

    /// `Ok(value)` when nothing was recorded.
    pub(crate) fn finish<T>(self, value: impl FnOnce() -> Option<T>) -> Result<T, ValidationError> {
        if !self.0.is_empty() {
            return Err(ValidationError { violations: self.0 });
        }
        // Every checked field succeeded, so the builder always has its
        // inputs; a `None` here means a field was never checked.
        value().ok_or_else(|| {
            ValidationError::single(FieldViolation::new(
                "body",
                ViolationCode::MissingField,
                "request is incomplete",
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn converts_to_invalid_request_with_errors_detail() {
        let error: Error = ValidationError::single(FieldViolation::new(
            "limit",
            ViolationCode::OutOfRange,
            "limit must be between 1 and 50",
        ))
        .into();

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), VALIDATION_ERROR_MESSAGE);
        assert_eq!(
            error.details(),
            Some(&json!({
                "errors": [{
                    "field": "limit",
                    "code": "out_of_range",
                    "message": "limit must be between 1 and 50"
                }]
            }))
        );
    }

    #[rstest]
    fn violations_collect_every_failure() {
        let mut violations = Violations::default();
        let first: Option<u32> = violations.check(Err(FieldViolation::new(
            "page",
            ViolationCode::InvalidInteger,
            "page must be an integer",
        )));
        let second = violations.check(Ok(3_u32));
        violations.push(FieldViolation::new(
            "gender",
            ViolationCode::InvalidOption,
            "gender must be male or female",
        ));

        assert_eq!((first, second), (None, Some(3)));
        let error = violations
            .finish(|| Some(()))
            .expect_err("violations were recorded");
        assert_eq!(error.violations().len(), 2);
        assert!(error.rejects("page"));
        assert!(error.rejects("gender"));
        assert!(!error.rejects("limit"));
    }

    #[rstest]
    fn empty_collector_yields_value() {
        assert_eq!(Violations::default().finish(|| Some(7)), Ok(7));
    }
}
