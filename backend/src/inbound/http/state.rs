//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DoctorListingQuery, DoctorRegistrationCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub listing: Arc<dyn DoctorListingQuery>,
    pub registration: Arc<dyn DoctorRegistrationCommand>,
}

impl HttpState {
    /// Bundle the port implementations.
    pub fn new(
        listing: Arc<dyn DoctorListingQuery>,
        registration: Arc<dyn DoctorRegistrationCommand>,
    ) -> Self {
        Self {
            listing,
            registration,
        }
    }

    /// State backed by one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::UnconfiguredDoctorRepository;
    /// use backend::domain::{DoctorDirectoryService, FallbackDirectory};
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let service = DoctorDirectoryService::new(
    ///     Arc::new(UnconfiguredDoctorRepository),
    ///     FallbackDirectory::bundled().expect("bundled samples are valid"),
    /// );
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: DoctorListingQuery + DoctorRegistrationCommand + 'static,
    {
        Self {
            listing: service.clone(),
            registration: service,
        }
    }
}
