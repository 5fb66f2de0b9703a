//! Startup seeding orchestration.
//!
//! Generated doctors are only written into an empty store, so restarting
//! with seeding enabled never duplicates records.

use example_data::{GenerationError, RegistryError, SeedRegistry, generate_example_doctors};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::{DoctorRepository, DoctorRepositoryError};
use crate::domain::{DoctorCriteria, NewDoctor, NewDoctorDraft, ValidationError};
use crate::example_data::config::ExampleDataSettings;
use crate::outbound::persistence::{DbPool, DieselDoctorRepository};

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry loading or seed lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Doctor generation failed.
    #[error("example doctor generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated doctor was rejected by entity validation.
    #[error("generated doctor {index} is invalid: {source}")]
    InvalidDoctor {
        /// Position in the generated batch.
        index: usize,
        /// Rejected fields.
        #[source]
        source: ValidationError,
    },
    /// The doctor store failed.
    #[error("doctor store error: {0}")]
    Store(#[from] DoctorRepositoryError),
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// What a seeding pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Generated doctors were inserted.
    Applied {
        /// Seed the doctors came from.
        seed_name: String,
        /// Number of doctors inserted.
        doctor_count: usize,
    },
    /// The store already held doctors; nothing was written.
    AlreadyPopulated {
        /// Doctors found in the store.
        existing: u64,
    },
}

/// Apply example data on startup when enabled.
///
/// # Examples
///
/// ```rust,no_run
/// use backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: false,
///     seed_name: Some("tiny-wren".to_string()),
///     count: None,
///     registry_path: None,
/// };
/// let outcome = seed_example_data_on_startup(&settings, None).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup(
    settings: &ExampleDataSettings,
    db_pool: Option<&DbPool>,
) -> Result<Option<SeedOutcome>, StartupSeedingError> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    let Some(db_pool) = db_pool else {
        warn!(
            seed_name,
            "example data seeding enabled but no database is configured; skipping"
        );
        return Ok(None);
    };

    let registry = settings.load_registry()?;
    let repository = DieselDoctorRepository::new(db_pool.clone());
    seed_doctors(&repository, &registry, seed_name, settings.count)
        .await
        .map(Some)
}

/// Insert doctors generated from `seed_name` when the store is empty.
///
/// `count` overrides the seed's doctor count.
///
/// # Errors
/// Returns [`StartupSeedingError`] when the seed is unknown, generation
/// fails, or the store rejects a read or insert.
pub async fn seed_doctors(
    repository: &dyn DoctorRepository,
    registry: &SeedRegistry,
    seed_name: &str,
    count: Option<usize>,
) -> Result<SeedOutcome, StartupSeedingError> {
    let existing = repository.count(&DoctorCriteria::default()).await?;
    if existing > 0 {
        info!(seed_name, existing, "doctor store already populated; skipping");
        return Ok(SeedOutcome::AlreadyPopulated { existing });
    }

    let mut seed_def = registry.find_seed(seed_name)?.clone();
    if let Some(count) = count {
        seed_def = seed_def.with_doctor_count(count);
    }

    let generated = generate_example_doctors(registry, &seed_def)?;
    let doctors = generated
        .into_iter()
        .enumerate()
        .map(|(index, seed)| {
            NewDoctor::new(NewDoctorDraft::from(seed))
                .map_err(|source| StartupSeedingError::InvalidDoctor { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for doctor in &doctors {
        repository.insert(doctor).await?;
    }

    info!(seed_name, doctor_count = doctors.len(), "example data seeding applied");
    Ok(SeedOutcome::Applied {
        seed_name: seed_name.to_owned(),
        doctor_count: doctors.len(),
    })
}
