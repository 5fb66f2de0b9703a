//! Doctor seed types and the bundled sample doctors.
//!
//! These types are independent of backend domain types to avoid circular
//! dependencies; the backend converts them into its own entity at the point
//! of use.

use serde::{Deserialize, Serialize};

/// Gender of a seeded doctor.
///
/// Mirrors the backend's `Gender` enum without creating a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderSeed {
    /// Male doctor.
    Male,
    /// Female doctor.
    Female,
}

impl GenderSeed {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// A doctor profile ready to be inserted, without an identifier.
///
/// # Example
///
/// ```
/// use example_data::{ExampleDoctorSeed, GenderSeed};
///
/// let doctor = ExampleDoctorSeed {
///     name: "Dr. Meera Iyer".to_owned(),
///     specialty: "Cardiology".to_owned(),
///     gender: GenderSeed::Female,
///     city: "Chennai".to_owned(),
///     experience: 9.0,
///     rating: 4.4,
///     image: "https://example.com/meera.jpg".to_owned(),
///     hospital: None,
///     fee: 650.0,
///     review_count: Some(31.0),
/// };
///
/// assert_eq!(doctor.gender.as_str(), "female");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleDoctorSeed {
    /// Display name, including any title.
    pub name: String,
    /// Medical specialty.
    pub specialty: String,
    /// Gender.
    pub gender: GenderSeed,
    /// City of practice.
    pub city: String,
    /// Years of experience.
    pub experience: f64,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    /// Profile image URL.
    pub image: String,
    /// Affiliated hospital, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    /// Consultation fee.
    pub fee: f64,
    /// Number of reviews, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<f64>,
}

/// One of the fixed sample doctors, with its fixed identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDoctor {
    /// Identifier, `"1"` to `"5"`.
    pub id: &'static str,
    /// The profile.
    pub doctor: ExampleDoctorSeed,
}

const IMAGE_QUERY: &str = "?w=400&h=400&fit=crop&crop=face";

/// Unsplash photo ids used for sample and generated portraits.
pub(crate) const PORTRAIT_IDS: [&str; 5] = [
    "photo-1612349317150-e413f6a5b16d",
    "photo-1559839734-2b71ea197ec2",
    "photo-1582750433449-648ed127bb54",
    "photo-1594824720207-c1f7465ad6c6",
    "photo-1607990281513-2c110a25bd8c",
];

/// Portrait URL for an Unsplash photo id.
pub(crate) fn portrait_url(photo_id: &str) -> String {
    format!("https://images.unsplash.com/{photo_id}{IMAGE_QUERY}")
}

struct SampleRow {
    id: &'static str,
    name: &'static str,
    specialty: &'static str,
    gender: GenderSeed,
    city: &'static str,
    experience: f64,
    rating: f64,
    photo: &'static str,
    hospital: &'static str,
    fee: f64,
    review_count: f64,
}

const SAMPLE_ROWS: [SampleRow; 5] = [
    SampleRow {
        id: "1",
        name: "Dr. Rajesh Kumar",
        specialty: "General Physician",
        gender: GenderSeed::Male,
        city: "Mumbai",
        experience: 15.0,
        rating: 4.5,
        photo: PORTRAIT_IDS[0],
        hospital: "Apollo Hospital",
        fee: 500.0,
        review_count: 125.0,
    },
    SampleRow {
        id: "2",
        name: "Dr. Priya Sharma",
        specialty: "Internal Medicine",
        gender: GenderSeed::Female,
        city: "Delhi",
        experience: 12.0,
        rating: 4.7,
        photo: PORTRAIT_IDS[1],
        hospital: "Max Healthcare",
        fee: 600.0,
        review_count: 89.0,
    },
    SampleRow {
        id: "3",
        name: "Dr. Amit Patel",
        specialty: "General Physician",
        gender: GenderSeed::Male,
        city: "Pune",
        experience: 8.0,
        rating: 4.3,
        photo: PORTRAIT_IDS[2],
        hospital: "Ruby Hall Clinic",
        fee: 400.0,
        review_count: 67.0,
    },
    SampleRow {
        id: "4",
        name: "Dr. Sneha Gupta",
        specialty: "Internal Medicine",
        gender: GenderSeed::Female,
        city: "Bangalore",
        experience: 10.0,
        rating: 4.6,
        photo: PORTRAIT_IDS[3],
        hospital: "Manipal Hospital",
        fee: 550.0,
        review_count: 102.0,
    },
    SampleRow {
        id: "5",
        name: "Dr. Vikram Singh",
        specialty: "General Physician",
        gender: GenderSeed::Male,
        city: "Chennai",
        experience: 20.0,
        rating: 4.8,
        photo: PORTRAIT_IDS[4],
        hospital: "Apollo Hospital",
        fee: 700.0,
        review_count: 156.0,
    },
];

/// The five sample doctors served when the primary store is unreachable.
///
/// Order is stable and is the order the fallback listing returns them in.
///
/// # Example
///
/// ```
/// use example_data::sample_doctors;
///
/// let doctors = sample_doctors();
/// let ids: Vec<_> = doctors.iter().map(|d| d.id).collect();
/// assert_eq!(ids, ["1", "2", "3", "4", "5"]);
/// ```
#[must_use]
pub fn sample_doctors() -> Vec<SampleDoctor> {
    SAMPLE_ROWS
        .iter()
        .map(|row| SampleDoctor {
            id: row.id,
            doctor: ExampleDoctorSeed {
                name: row.name.to_owned(),
                specialty: row.specialty.to_owned(),
                gender: row.gender,
                city: row.city.to_owned(),
                experience: row.experience,
                rating: row.rating,
                image: portrait_url(row.photo),
                hospital: Some(row.hospital.to_owned()),
                fee: row.fee,
                review_count: Some(row.review_count),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_doctor;

    #[test]
    fn gender_seed_serializes_lowercase() {
        let female = serde_json::to_string(&GenderSeed::Female).expect("serialize");
        assert_eq!(female, "\"female\"");
    }

    #[test]
    fn sample_doctors_are_valid() {
        for sample in sample_doctors() {
            assert_eq!(validate_doctor(&sample.doctor), Ok(()), "{}", sample.id);
        }
    }

    #[test]
    fn sample_doctors_split_by_gender() {
        let doctors = sample_doctors();
        let female = doctors
            .iter()
            .filter(|d| d.doctor.gender == GenderSeed::Female)
            .count();
        assert_eq!((doctors.len(), female), (5, 2));
    }

    #[test]
    fn example_doctor_seed_serializes_to_camel_case() {
        let sample = sample_doctors().remove(0);
        let json = serde_json::to_value(&sample.doctor).expect("serialize");
        assert_eq!(json["reviewCount"], serde_json::json!(125.0));
        assert_eq!(
            json["image"],
            serde_json::json!(
                "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=400&h=400&fit=crop&crop=face"
            )
        );
    }
}
