//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod doctor_listing_query;
mod doctor_registration_command;
mod doctor_repository;

#[cfg(test)]
pub use doctor_listing_query::MockDoctorListingQuery;
pub use doctor_listing_query::{DoctorListing, DoctorListingQuery, ListingSource};
#[cfg(test)]
pub use doctor_registration_command::MockDoctorRegistrationCommand;
pub use doctor_registration_command::DoctorRegistrationCommand;
#[cfg(test)]
pub use doctor_repository::MockDoctorRepository;
pub use doctor_repository::{
    DoctorRepository, DoctorRepositoryError, UnconfiguredDoctorRepository,
};
