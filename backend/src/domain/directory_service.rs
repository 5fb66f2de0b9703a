//! Doctor directory domain service.
//!
//! Implements the listing and registration driving ports on top of a
//! [`DoctorRepository`]. Listings degrade to the [`FallbackDirectory`] on any
//! store error; registrations surface store errors to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join;
use pagination::Page;
use tracing::{error, warn};

use crate::domain::ports::{
    DoctorListing, DoctorListingQuery, DoctorRegistrationCommand, DoctorRepository,
    DoctorRepositoryError, ListingSource,
};
use crate::domain::{Doctor, DoctorFilter, DoctorQuery, Error, FallbackDirectory, NewDoctor};

/// Directory service implementing the driving ports.
pub struct DoctorDirectoryService<R: ?Sized> {
    repository: Arc<R>,
    fallback: FallbackDirectory,
}

impl<R: ?Sized> DoctorDirectoryService<R> {
    /// Create a service over `repository`, answering from `fallback` when the
    /// repository fails.
    pub fn new(repository: Arc<R>, fallback: FallbackDirectory) -> Self {
        Self {
            repository,
            fallback,
        }
    }
}

impl<R> DoctorDirectoryService<R>
where
    R: DoctorRepository + ?Sized,
{
    async fn list_from_store(
        &self,
        query: &DoctorQuery,
    ) -> Result<Page<Doctor>, DoctorRepositoryError> {
        let (total, items) = try_join(
            self.repository.count(&query.criteria),
            self.repository
                .find_page(&query.criteria, &query.order, query.window),
        )
        .await?;
        Ok(Page::from_parts(items, total, query.window))
    }

    /// Store detail goes to the log only; callers get a fixed message.
    fn map_insert_error(err: DoctorRepositoryError) -> Error {
        error!(error = %err, "doctor insert failed");
        match err {
            DoctorRepositoryError::Connection { .. } => {
                Error::service_unavailable("Doctor store unavailable")
            }
            DoctorRepositoryError::Query { .. } => Error::internal("Internal server error"),
        }
    }
}

#[async_trait]
impl<R> DoctorListingQuery for DoctorDirectoryService<R>
where
    R: DoctorRepository + ?Sized,
{
    async fn list_doctors(&self, filter: &DoctorFilter) -> DoctorListing {
        let query = DoctorQuery::from(filter);
        match self.list_from_store(&query).await {
            Ok(page) => DoctorListing {
                source: ListingSource::Primary,
                page,
            },
            Err(err) => {
                warn!(error = %err, "doctor store unavailable; serving fallback directory");
                DoctorListing {
                    source: ListingSource::Fallback,
                    page: self.fallback.list(filter),
                }
            }
        }
    }
}

#[async_trait]
impl<R> DoctorRegistrationCommand for DoctorDirectoryService<R>
where
    R: DoctorRepository + ?Sized,
{
    async fn register_doctor(&self, doctor: NewDoctor) -> Result<Doctor, Error> {
        self.repository
            .insert(&doctor)
            .await
            .map_err(Self::map_insert_error)
    }
}
