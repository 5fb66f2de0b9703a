//! Doctor directory entity.
//!
//! A profile is validated once, on the way in, and is immutable afterwards.
//! [`NewDoctor`] is a profile that has not been stored yet; [`Doctor`] pairs
//! a profile with the identifier the store assigned. Doctors are never
//! updated or deleted.

mod validation;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::validation::{FieldViolation, ValidationError, ViolationCode, Violations};

pub use self::validation::RATING_MAX;

/// Doctor gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male doctor.
    Male,
    /// Female doctor.
    Female,
}

impl Gender {
    /// Lowercase wire name, also the stored value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text names no [`Gender`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender '{0}'")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    /// Matching is exact: `"Male"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(UnknownGender(other.to_owned())),
        }
    }
}

/// Store-assigned doctor identifier.
///
/// Opaque to the domain: the PostgreSQL adapter issues UUIDs while the
/// bundled sample doctors use `"1"` to `"5"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
pub struct DoctorId(String);

/// Raised for blank identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("doctor id must not be empty")]
pub struct EmptyDoctorId;

impl DoctorId {
    /// Validate and wrap an identifier.
    ///
    /// # Errors
    /// Returns [`EmptyDoctorId`] when `id` is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, EmptyDoctorId> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EmptyDoctorId);
        }
        Ok(Self(id))
    }
}

impl From<Uuid> for DoctorId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for DoctorId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DoctorId> for String {
    fn from(value: DoctorId) -> Self {
        value.0
    }
}

impl TryFrom<String> for DoctorId {
    type Error = EmptyDoctorId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unvalidated input for [`NewDoctor`].
///
/// Field types are already correct; [`NewDoctor::try_from`] checks values.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDoctorDraft {
    pub name: String,
    pub specialty: String,
    /// `male` or `female`.
    pub gender: String,
    pub city: String,
    /// Years in practice.
    pub experience: f64,
    pub rating: f64,
    /// Absolute profile image URL.
    pub image: String,
    pub hospital: Option<String>,
    /// Consultation fee.
    pub fee: f64,
    pub review_count: Option<f64>,
}

/// A validated doctor profile that has not been stored yet.
///
/// ## Invariants
/// - `name`, `specialty` and `city` are non-blank.
/// - `experience`, `fee` and `review_count` are finite and `>= 0`.
/// - `rating` is finite and within `0..=5`.
/// - `image` parses as an absolute URL.
/// - `hospital` is either absent or non-blank.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    #[schema(example = "Dr. Rajesh Kumar")]
    name: String,
    #[schema(example = "General Physician")]
    specialty: String,
    gender: Gender,
    #[schema(example = "Mumbai")]
    city: String,
    #[schema(example = 15)]
    experience: f64,
    #[schema(example = 4.5)]
    rating: f64,
    #[schema(example = "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d")]
    image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Apollo Hospital")]
    hospital: Option<String>,
    #[schema(example = 500)]
    fee: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 125)]
    review_count: Option<f64>,
}

impl NewDoctor {
    /// Validate a draft, reporting every invalid field.
    ///
    /// # Errors
    /// Returns [`ValidationError`] listing each rejected field.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{NewDoctor, NewDoctorDraft};
    ///
    /// let draft = NewDoctorDraft {
    ///     name: "Dr. Asha Rao".into(),
    ///     specialty: "Cardiology".into(),
    ///     gender: "female".into(),
    ///     city: "Hyderabad".into(),
    ///     experience: 11.0,
    ///     rating: 6.0,
    ///     image: "https://example.com/asha.jpg".into(),
    ///     hospital: None,
    ///     fee: -1.0,
    ///     review_count: None,
    /// };
    /// let err = NewDoctor::new(draft).expect_err("rating and fee are invalid");
    /// assert!(err.rejects("rating"));
    /// assert!(err.rejects("fee"));
    /// ```
    pub fn new(draft: NewDoctorDraft) -> Result<Self, ValidationError> {
        Self::try_from(draft)
    }

    /// Display name, including any title.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    #[must_use]
    pub fn specialty(&self) -> &str {
        self.specialty.as_str()
    }
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }
    #[must_use]
    pub fn city(&self) -> &str {
        self.city.as_str()
    }
    #[must_use]
    pub const fn experience(&self) -> f64 {
        self.experience
    }
    #[must_use]
    pub const fn rating(&self) -> f64 {
        self.rating
    }
    #[must_use]
    pub fn image(&self) -> &str {
        self.image.as_str()
    }
    #[must_use]
    pub fn hospital(&self) -> Option<&str> {
        self.hospital.as_deref()
    }
    #[must_use]
    pub const fn fee(&self) -> f64 {
        self.fee
    }
    #[must_use]
    pub const fn review_count(&self) -> Option<f64> {
        self.review_count
    }

    /// Attach the identifier the store assigned.
    #[must_use]
    pub fn into_doctor(self, id: DoctorId) -> Doctor {
        Doctor { id, profile: self }
    }
}

impl TryFrom<NewDoctorDraft> for NewDoctor {
    type Error = ValidationError;

    fn try_from(draft: NewDoctorDraft) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();

        let name = violations.check(validation::non_blank(draft.name, "name"));
        let specialty = violations.check(validation::non_blank(draft.specialty, "specialty"));
        let gender = violations.check(parse_gender(&draft.gender));
        let city = violations.check(validation::non_blank(draft.city, "city"));
        let experience = violations.check(validation::non_negative(draft.experience, "experience"));
        let rating = violations.check(validation::rating(draft.rating, "rating"));
        let image = violations.check(validation::image_url(draft.image, "image"));
        let fee = violations.check(validation::non_negative(draft.fee, "fee"));
        let review_count = violations.check(
            draft
                .review_count
                .map(|count| validation::non_negative(count, "reviewCount"))
                .transpose(),
        );
        let hospital = draft.hospital.filter(|value| !value.trim().is_empty());

        violations.finish(|| {
            Some(Self {
                name: name?,
                specialty: specialty?,
                gender: gender?,
                city: city?,
                experience: experience?,
                rating: rating?,
                image: image?,
                hospital,
                fee: fee?,
                review_count: review_count?,
            })
        })
    }
}

fn parse_gender(value: &str) -> Result<Gender, FieldViolation> {
    value.parse().map_err(|_| {
        FieldViolation::new(
            "gender",
            ViolationCode::InvalidOption,
            "gender must be one of: male, female",
        )
    })
}

/// A stored doctor.
///
/// Serialises as the profile plus an `_id` key.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Doctor {
    #[serde(rename = "_id")]
    id: DoctorId,
    #[serde(flatten)]
    profile: NewDoctor,
}

impl Doctor {
    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &DoctorId {
        &self.id
    }

    /// The stored profile.
    #[must_use]
    pub const fn profile(&self) -> &NewDoctor {
        &self.profile
    }
}
