//! Deterministic doctor generation from seed definitions.
//!
//! The same seed value always produces identical output.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::registry::{SeedDefinition, SeedRegistry};
use crate::seed::{ExampleDoctorSeed, GenderSeed, PORTRAIT_IDS, portrait_url};
use crate::validation::validate_doctor;

const EXPERIENCE_YEARS: std::ops::RangeInclusive<u32> = 1..=35;

/// Ratings are drawn in tenths so they read like real averages.
const RATING_TENTHS: std::ops::RangeInclusive<u32> = 30..=50;

/// Fees are drawn in hundreds.
const FEE_HUNDREDS: std::ops::RangeInclusive<u32> = 3..=15;

const MAX_REVIEWS: u32 = 400;

/// Probability that a generated doctor lists a hospital.
const HOSPITAL_PROBABILITY: f64 = 0.8;

/// Probability that a generated doctor has a review count.
const REVIEW_COUNT_PROBABILITY: f64 = 0.9;

/// Generates example doctors from a seed definition.
///
/// The seed's value initialises a `ChaCha8` RNG, so repeated calls with the
/// same registry and seed produce identical doctors. Every record is checked
/// with [`validate_doctor`](crate::validate_doctor) before it is returned.
///
/// # Errors
///
/// Returns [`GenerationError`] if the registry lacks specialties or cities,
/// or if a generated record breaks an entity bound.
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_doctors};
///
/// let registry = SeedRegistry::bundled().expect("bundled registry");
/// let seed_def = registry.find_seed("tiny-wren").expect("seed exists");
///
/// let doctors = generate_example_doctors(&registry, seed_def).expect("generated");
/// assert_eq!(doctors.len(), seed_def.doctor_count());
///
/// let again = generate_example_doctors(&registry, seed_def).expect("generated");
/// assert_eq!(doctors, again);
/// ```
pub fn generate_example_doctors(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<Vec<ExampleDoctorSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut doctors = Vec::with_capacity(seed_def.doctor_count());

    for index in 0..seed_def.doctor_count() {
        let doctor = generate_single_doctor(&mut rng, registry)?;
        validate_doctor(&doctor).map_err(|reason| GenerationError::InvalidDoctor {
            index,
            reason: reason.to_owned(),
        })?;
        doctors.push(doctor);
    }

    Ok(doctors)
}

fn generate_single_doctor(
    rng: &mut ChaCha8Rng,
    registry: &SeedRegistry,
) -> Result<ExampleDoctorSeed, GenerationError> {
    let gender = if rng.random_bool(0.5) {
        GenderSeed::Female
    } else {
        GenderSeed::Male
    };
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);

    let specialty = pick(rng, registry.specialties(), "specialties")?;
    let city = pick(rng, registry.cities(), "cities")?;
    let hospital = if rng.random_bool(HOSPITAL_PROBABILITY) {
        registry.hospitals().choose(rng).cloned()
    } else {
        None
    };
    let photo = PORTRAIT_IDS
        .choose(rng)
        .ok_or(GenerationError::EmptyVocabulary { field: "portraits" })?;

    let experience = f64::from(rng.random_range(EXPERIENCE_YEARS));
    let rating = f64::from(rng.random_range(RATING_TENTHS)) / 10.0;
    let fee = f64::from(rng.random_range(FEE_HUNDREDS)) * 100.0;
    let review_count = rng
        .random_bool(REVIEW_COUNT_PROBABILITY)
        .then(|| f64::from(rng.random_range(0..=MAX_REVIEWS)));

    Ok(ExampleDoctorSeed {
        name: format!("Dr. {first} {last}"),
        specialty,
        gender,
        city,
        experience,
        rating,
        image: portrait_url(photo),
        hospital,
        fee,
        review_count,
    })
}

fn pick(
    rng: &mut ChaCha8Rng,
    values: &[String],
    field: &'static str,
) -> Result<String, GenerationError> {
    values
        .choose(rng)
        .cloned()
        .ok_or(GenerationError::EmptyVocabulary { field })
}
