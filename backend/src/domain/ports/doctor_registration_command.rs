//! Driving port for adding doctors to the directory.

use async_trait::async_trait;

use crate::domain::{Doctor, Error, NewDoctor};

/// Domain use-case port for registering a doctor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorRegistrationCommand: Send + Sync {
    /// Store a validated profile.
    ///
    /// Fails with [`crate::domain::ErrorCode::ServiceUnavailable`] when the
    /// store cannot be reached and
    /// [`crate::domain::ErrorCode::InternalError`] for any other store
    /// failure.
    async fn register_doctor(&self, doctor: NewDoctor) -> Result<Doctor, Error>;
}
