//! Seed registry types and JSON parsing.
//!
//! The registry names the seeds the generator accepts and lists the
//! vocabulary (specialties, cities, hospitals) generated doctors draw from.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

const BUNDLED_REGISTRY: &str = include_str!("../data/seeds.json");

/// A seed registry containing named seeds and generation vocabulary.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "specialties": ["Cardiology"],
///     "cities": ["Pune"],
///     "hospitals": [],
///     "seeds": [{"name": "test", "seed": 42, "doctorCount": 5}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    specialties: Vec<String>,
    cities: Vec<String>,
    hospitals: Vec<String>,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the JSON is malformed, the version is
    /// unsupported, a required vocabulary list is empty or holds a blank
    /// entry, or the seeds are missing or share a name.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// The registry compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] only if the bundled file has been edited
    /// into an invalid state.
    pub fn bundled() -> Result<Self, RegistryError> {
        Self::from_json(BUNDLED_REGISTRY)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let specialties = vocabulary("specialties", raw.specialties, true)?;
        let cities = vocabulary("cities", raw.cities, true)?;
        // Hospital is optional on a doctor, so an empty list is fine.
        let hospitals = vocabulary("hospitals", raw.hospitals, false)?;

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let mut names = HashSet::new();
        let mut seeds = Vec::with_capacity(raw.seeds.len());
        for s in raw.seeds {
            if !names.insert(s.name.clone()) {
                return Err(RegistryError::DuplicateSeedName { name: s.name });
            }
            seeds.push(SeedDefinition::new(s.name, s.seed, s.doctor_count));
        }

        Ok(Self {
            version: raw.version,
            specialties,
            cities,
            hospitals,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Specialties generated doctors are assigned from.
    #[must_use]
    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    /// Cities generated doctors practise in.
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Hospitals generated doctors may be affiliated with.
    #[must_use]
    pub fn hospitals(&self) -> &[String] {
        &self.hospitals
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

fn vocabulary(
    field: &'static str,
    values: Vec<String>,
    required: bool,
) -> Result<Vec<String>, RegistryError> {
    if required && values.is_empty() {
        return Err(RegistryError::EmptyVocabulary { field });
    }
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(RegistryError::BlankEntry { field, index })
            } else {
                Ok(trimmed.to_owned())
            }
        })
        .collect()
}

/// A named seed definition for deterministic doctor generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    doctor_count: usize,
}

impl SeedDefinition {
    /// Creates a seed definition.
    #[must_use]
    pub const fn new(name: String, seed: u64, doctor_count: usize) -> Self {
        Self {
            name,
            seed,
            doctor_count,
        }
    }

    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of doctors this seed produces.
    #[must_use]
    pub const fn doctor_count(&self) -> usize {
        self.doctor_count
    }

    /// The same seed with a different doctor count.
    #[must_use]
    pub fn with_doctor_count(mut self, doctor_count: usize) -> Self {
        self.doctor_count = doctor_count;
        self
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    specialties: Vec<String>,
    cities: Vec<String>,
    #[serde(default)]
    hospitals: Vec<String>,
    seeds: Vec<RawSeedDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    doctor_count: usize,
}
