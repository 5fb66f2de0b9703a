//! Bundled sample doctors and deterministic example doctor generation.
//!
//! This crate is independent of backend domain types to avoid circular
//! dependencies. It supports:
//!
//! - The five fixed sample doctors served when the primary store is
//!   unavailable ([`sample_doctors`])
//! - Loading seed registries from JSON
//! - Deterministic doctor generation using named seeds
//! - Entity bound checks matching the backend
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_doctors};
//!
//! let json = r#"{
//!     "version": 1,
//!     "specialties": ["Dermatology"],
//!     "cities": ["Kolkata"],
//!     "hospitals": ["City Clinic"],
//!     "seeds": [{"name": "test-seed", "seed": 42, "doctorCount": 3}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let doctors = generate_example_doctors(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(doctors.len(), 3);
//! assert!(doctors.iter().all(|d| d.city == "Kolkata"));
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_example_doctors;
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{ExampleDoctorSeed, GenderSeed, SampleDoctor, sample_doctors};
pub use validation::{RATING_MAX, RATING_MIN, is_valid_rating, validate_doctor};
