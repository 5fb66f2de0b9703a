//! In-memory listing over the bundled sample doctors.
//!
//! Used when the primary store cannot answer. Only the `search`, `city` and
//! `gender` constraints are applied; specialty, experience and rating
//! constraints and the requested sort are ignored, and doctors keep their
//! bundled order. Clients can tell these listings apart through
//! [`ListingSource::Fallback`](super::ports::ListingSource).

use example_data::{ExampleDoctorSeed, GenderSeed, SampleDoctor, sample_doctors};
use pagination::Page;

use super::{Doctor, DoctorFilter, DoctorId, Gender, NewDoctor, NewDoctorDraft};

/// Fixed doctor list with a forgiving filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackDirectory {
    doctors: Vec<Doctor>,
}

/// Raised when a bundled sample cannot be turned into a [`Doctor`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("bundled sample doctor '{id}' is invalid: {reason}")]
pub struct InvalidSampleDoctor {
    /// Sample identifier.
    pub id: String,
    /// What was wrong with it.
    pub reason: String,
}

impl FallbackDirectory {
    /// Directory over the five bundled sample doctors.
    ///
    /// # Errors
    /// Returns [`InvalidSampleDoctor`] if a bundled record no longer passes
    /// entity validation.
    pub fn bundled() -> Result<Self, InvalidSampleDoctor> {
        let doctors = sample_doctors()
            .into_iter()
            .map(sample_to_doctor)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(doctors))
    }

    /// Directory over an arbitrary list, kept in the given order.
    #[must_use]
    pub const fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// Every doctor, in listing order.
    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        self.doctors.as_slice()
    }

    /// Filter and paginate the fixed list.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{DoctorFilter, FallbackDirectory};
    ///
    /// let directory = FallbackDirectory::bundled().expect("bundled samples are valid");
    /// let page = directory.list(&DoctorFilter::default().with_city("mumbai"));
    /// assert_eq!(page.total(), 1);
    /// ```
    #[must_use]
    pub fn list(&self, filter: &DoctorFilter) -> Page<Doctor> {
        let search = filter.search().map(str::to_lowercase);
        let city = filter.city().map(str::to_lowercase);
        let gender = filter.gender();

        let candidates = self
            .doctors
            .iter()
            .filter(|doctor| contains_folded(doctor.profile().name(), search.as_deref()))
            .filter(|doctor| contains_folded(doctor.profile().city(), city.as_deref()))
            .filter(|doctor| gender.is_none_or(|g| doctor.profile().gender() == g))
            .cloned()
            .collect();

        Page::from_candidates(candidates, filter.page_request())
    }
}

fn contains_folded(haystack: &str, needle: Option<&str>) -> bool {
    needle.is_none_or(|needle| haystack.to_lowercase().contains(needle))
}

impl From<ExampleDoctorSeed> for NewDoctorDraft {
    fn from(seed: ExampleDoctorSeed) -> Self {
        let gender = match seed.gender {
            GenderSeed::Male => Gender::Male,
            GenderSeed::Female => Gender::Female,
        };
        Self {
            name: seed.name,
            specialty: seed.specialty,
            gender: gender.as_str().to_owned(),
            city: seed.city,
            experience: seed.experience,
            rating: seed.rating,
            image: seed.image,
            hospital: seed.hospital,
            fee: seed.fee,
            review_count: seed.review_count,
        }
    }
}

fn sample_to_doctor(sample: SampleDoctor) -> Result<Doctor, InvalidSampleDoctor> {
    let SampleDoctor { id, doctor } = sample;
    let invalid = |reason: String| InvalidSampleDoctor {
        id: id.to_owned(),
        reason,
    };
    let profile =
        NewDoctor::new(NewDoctorDraft::from(doctor)).map_err(|err| invalid(err.to_string()))?;
    let id = DoctorId::new(id).map_err(|err| invalid(err.to_string()))?;
    Ok(profile.into_doctor(id))
}
