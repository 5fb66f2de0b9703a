//! Listing filter: parsing raw query parameters into a normalised filter.
//!
//! Raw parameters arrive as optional strings. Parsing trims each value and
//! treats empty text as absent, applies defaults, and reports every broken
//! constraint at once.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PageRequest};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::Gender;
use super::validation::{FieldViolation, ValidationError, ViolationCode, Violations};

/// Result ordering requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Highest rated first, then most experienced.
    #[default]
    Relevance,
    /// Most experienced first.
    Experience,
    /// Highest rated first.
    Rating,
    /// Alphabetical by name.
    Name,
}

impl SortKey {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Experience => "experience",
            Self::Rating => "rating",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = FieldViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "experience" => Ok(Self::Experience),
            "rating" => Ok(Self::Rating),
            "name" => Ok(Self::Name),
            _ => Err(FieldViolation::new(
                "sortBy",
                ViolationCode::InvalidOption,
                "sortBy must be one of: relevance, experience, rating, name",
            )),
        }
    }
}

/// Query parameters exactly as received.
///
/// Unknown parameters are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct RawDoctorFilter {
    /// Case-insensitive substring of the doctor's name.
    pub search: Option<String>,
    /// Specialty, matched case-insensitively.
    pub specialty: Option<String>,
    /// Case-insensitive substring of the city.
    pub city: Option<String>,
    /// `male` or `female`.
    pub gender: Option<String>,
    /// Minimum years of experience, inclusive.
    pub experience_min: Option<String>,
    /// Maximum years of experience, inclusive.
    pub experience_max: Option<String>,
    /// Minimum rating, inclusive.
    pub rating_min: Option<String>,
    /// One-based page number. Defaults to 1.
    pub page: Option<String>,
    /// Page size, 1 to 50. Defaults to 10.
    pub limit: Option<String>,
    /// `relevance`, `experience`, `rating` or `name`. Defaults to `relevance`.
    pub sort_by: Option<String>,
}

/// A validated listing filter.
///
/// Absent optional constraints mean "no constraint". Pagination always holds
/// a valid request.
///
/// # Examples
/// ```
/// use backend::domain::{DoctorFilter, Gender, RawDoctorFilter, SortKey};
///
/// let raw = RawDoctorFilter {
///     gender: Some("female".into()),
///     limit: Some("1".into()),
///     sort_by: Some("".into()),
///     ..RawDoctorFilter::default()
/// };
/// let filter = DoctorFilter::parse(raw).expect("valid filter");
/// assert_eq!(filter.gender(), Some(Gender::Female));
/// assert_eq!(filter.page_request().limit(), 1);
/// assert_eq!(filter.sort_by(), SortKey::Relevance);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorFilter {
    search: Option<String>,
    specialty: Option<String>,
    city: Option<String>,
    gender: Option<Gender>,
    experience_min: Option<f64>,
    experience_max: Option<f64>,
    rating_min: Option<f64>,
    page: PageRequest,
    sort_by: SortKey,
}

impl DoctorFilter {
    /// Validate raw parameters.
    ///
    /// # Errors
    /// Returns [`ValidationError`] naming every rejected parameter.
    pub fn parse(raw: RawDoctorFilter) -> Result<Self, ValidationError> {
        let mut violations = Violations::default();

        let gender = present(raw.gender)
            .map(|value| {
                value.parse::<Gender>().map_err(|_| {
                    FieldViolation::new(
                        "gender",
                        ViolationCode::InvalidOption,
                        "gender must be one of: male, female",
                    )
                })
            })
            .transpose();
        let gender = violations.check(gender);
        let experience_min = violations.check(optional_number(raw.experience_min, "experienceMin"));
        let experience_max = violations.check(optional_number(raw.experience_max, "experienceMax"));
        let rating_min = violations.check(optional_number(raw.rating_min, "ratingMin"));
        let page = violations.check(bounded_integer(raw.page, "page", DEFAULT_PAGE, None));
        let limit = violations.check(bounded_integer(
            raw.limit,
            "limit",
            DEFAULT_LIMIT,
            Some(MAX_LIMIT),
        ));
        let sort_by = violations.check(
            present(raw.sort_by)
                .map(|value| value.parse::<SortKey>())
                .transpose()
                .map(Option::unwrap_or_default),
        );
        let search = present(raw.search);
        let specialty = present(raw.specialty);
        let city = present(raw.city);

        violations.finish(|| {
            Some(Self {
                search,
                specialty,
                city,
                gender: gender?,
                experience_min: experience_min?,
                experience_max: experience_max?,
                rating_min: rating_min?,
                page: PageRequest::new(page?, limit?).ok()?,
                sort_by: sort_by?,
            })
        })
    }

    /// Name substring to match.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Specialty to match.
    #[must_use]
    pub fn specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
    }

    /// City substring to match.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    #[must_use]
    pub const fn gender(&self) -> Option<Gender> {
        self.gender
    }

    #[must_use]
    pub const fn experience_min(&self) -> Option<f64> {
        self.experience_min
    }

    #[must_use]
    pub const fn experience_max(&self) -> Option<f64> {
        self.experience_max
    }

    #[must_use]
    pub const fn rating_min(&self) -> Option<f64> {
        self.rating_min
    }

    /// Requested page window.
    #[must_use]
    pub const fn page_request(&self) -> PageRequest {
        self.page
    }

    #[must_use]
    pub const fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    /// Restrict to names containing `search`.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restrict to a specialty.
    #[must_use]
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    /// Restrict to cities containing `city`.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Restrict to one gender.
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Restrict experience to `min..=max`; either end may be open.
    #[must_use]
    pub const fn with_experience(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.experience_min = min;
        self.experience_max = max;
        self
    }

    /// Restrict to ratings of at least `rating_min`.
    #[must_use]
    pub const fn with_rating_min(mut self, rating_min: f64) -> Self {
        self.rating_min = Some(rating_min);
        self
    }

    /// Select the page window.
    #[must_use]
    pub const fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    /// Select the ordering.
    #[must_use]
    pub const fn with_sort(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }
}

impl TryFrom<RawDoctorFilter> for DoctorFilter {
    type Error = ValidationError;

    fn try_from(value: RawDoctorFilter) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

fn optional_number(value: Option<String>, field: &'static str) -> Result<Option<f64>, FieldViolation> {
    present(value)
        .map(|text| match text.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(number),
            _ => Err(FieldViolation::new(
                field,
                ViolationCode::InvalidNumber,
                format!("{field} must be a number"),
            )),
        })
        .transpose()
}

fn bounded_integer(
    value: Option<String>,
    field: &'static str,
    default: u32,
    max: Option<u32>,
) -> Result<u32, FieldViolation> {
    let Some(text) = present(value) else {
        return Ok(default);
    };
    let out_of_range = |too_large: bool| {
        let message = match (max, too_large) {
            (Some(max), _) => format!("{field} must be between 1 and {max}"),
            (None, true) => format!("{field} must be at most {}", u32::MAX),
            (None, false) => format!("{field} must be at least 1"),
        };
        FieldViolation::new(field, ViolationCode::OutOfRange, message)
    };
    let number = text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => out_of_range(true),
        IntErrorKind::NegOverflow => out_of_range(false),
        _ => FieldViolation::new(
            field,
            ViolationCode::InvalidInteger,
            format!("{field} must be an integer"),
        ),
    })?;
    if number < 1 {
        return Err(out_of_range(false));
    }
    u32::try_from(number)
        .ok()
        .filter(|value| max.is_none_or(|max| *value <= max))
        .ok_or_else(|| out_of_range(true))
}
