//! Driving port for the filtered doctor listing.
//!
//! Listing never fails once the filter is valid: when the primary store is
//! unavailable the bundled sample doctors answer instead, and the result
//! says which source was used.

use async_trait::async_trait;
use pagination::Page;

use crate::domain::{Doctor, DoctorFilter};

/// Where a listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    /// The configured doctor store.
    Primary,
    /// The bundled sample doctors.
    Fallback,
}

impl ListingSource {
    /// Lowercase label used in headers and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Fallback => "fallback",
        }
    }
}

/// One page of doctors plus its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorListing {
    pub source: ListingSource,
    pub page: Page<Doctor>,
}

/// Domain use-case port for listing doctors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorListingQuery: Send + Sync {
    /// Return the page of doctors selected by `filter`.
    async fn list_doctors(&self, filter: &DoctorFilter) -> DoctorListing;
}
