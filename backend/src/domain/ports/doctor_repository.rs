//! Driven port for doctor storage.
//!
//! The directory service depends on this trait only; the PostgreSQL adapter
//! lives in `outbound::persistence`. Implementations must apply every
//! criterion in [`DoctorCriteria`] with AND semantics and honour the full
//! [`SortOrder`].

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Doctor, DoctorCriteria, NewDoctor, SortOrder};

use super::define_port_error;

define_port_error! {
    /// Errors raised by doctor storage adapters.
    pub enum DoctorRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "doctor store connection failed: {message}",
        /// Query or insert failed during execution or row conversion.
        Query { message: String } => "doctor store query failed: {message}",
    }
}

/// Port for reading and inserting doctors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Store a validated profile and return it with its new identifier.
    async fn insert(&self, doctor: &NewDoctor) -> Result<Doctor, DoctorRepositoryError>;

    /// Count doctors matching `criteria`, ignoring pagination.
    async fn count(&self, criteria: &DoctorCriteria) -> Result<u64, DoctorRepositoryError>;

    /// Fetch one page of doctors matching `criteria` in `order`.
    async fn find_page(
        &self,
        criteria: &DoctorCriteria,
        order: &SortOrder,
        window: PageRequest,
    ) -> Result<Vec<Doctor>, DoctorRepositoryError>;
}

/// Repository used when no database URL is configured.
///
/// Every call fails with a connection error, so listings are served from
/// the bundled sample doctors and inserts report the store as unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredDoctorRepository;

const UNCONFIGURED: &str = "no database configured";

#[async_trait]
impl DoctorRepository for UnconfiguredDoctorRepository {
    async fn insert(&self, _doctor: &NewDoctor) -> Result<Doctor, DoctorRepositoryError> {
        Err(DoctorRepositoryError::connection(UNCONFIGURED))
    }

    async fn count(&self, _criteria: &DoctorCriteria) -> Result<u64, DoctorRepositoryError> {
        Err(DoctorRepositoryError::connection(UNCONFIGURED))
    }

    async fn find_page(
        &self,
        _criteria: &DoctorCriteria,
        _order: &SortOrder,
        _window: PageRequest,
    ) -> Result<Vec<Doctor>, DoctorRepositoryError> {
        Err(DoctorRepositoryError::connection(UNCONFIGURED))
    }
}
