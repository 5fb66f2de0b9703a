//! Builders for HTTP state over the configured doctor store.

use std::sync::Arc;

use actix_web::web;

use backend::domain::ports::{DoctorRepository, UnconfiguredDoctorRepository};
use backend::domain::{DoctorDirectoryService, FallbackDirectory, InvalidSampleDoctor};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{DbPool, DieselDoctorRepository};

/// Pick the repository adapter for the configured pool.
fn build_repository(pool: Option<&DbPool>) -> Arc<dyn DoctorRepository> {
    match pool {
        Some(pool) => Arc::new(DieselDoctorRepository::new(pool.clone())),
        None => Arc::new(UnconfiguredDoctorRepository),
    }
}

/// Build the HTTP state around one directory service.
///
/// # Errors
/// Returns [`InvalidSampleDoctor`] if the bundled fallback doctors fail
/// validation.
pub(super) fn build_http_state(
    pool: Option<&DbPool>,
) -> Result<web::Data<HttpState>, InvalidSampleDoctor> {
    let fallback = FallbackDirectory::bundled()?;
    let service = DoctorDirectoryService::new(build_repository(pool), fallback);
    Ok(web::Data::new(HttpState::from_service(Arc::new(service))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::domain::DoctorFilter;
    use backend::domain::ports::ListingSource;

    #[tokio::test]
    async fn state_without_pool_serves_fallback() {
        let state = build_http_state(None).expect("bundled samples are valid");

        let listing = state.listing.list_doctors(&DoctorFilter::default()).await;

        assert_eq!(listing.source, ListingSource::Fallback);
        assert_eq!(listing.page.total(), 5);
    }
}
