//! Error mapping shared by the Diesel doctor adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::DoctorRepositoryError;

use super::pool::PoolError;

/// Map pool checkout failures to connection errors.
pub fn map_pool_error(error: PoolError) -> DoctorRepositoryError {
    let PoolError::Checkout { message } = error;
    DoctorRepositoryError::connection(message)
}

/// Map Diesel errors raised during `operation`.
///
/// Closed connections count as connection errors so callers can fall back;
/// everything else is a query error.
pub fn map_diesel_error(error: DieselError, operation: &str) -> DoctorRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            %operation,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DoctorRepositoryError::connection(format!("{operation}: database connection closed"))
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
            DoctorRepositoryError::query(format!("{operation}: {}", info.message()))
        }
        DieselError::QueryBuilderError(_) => {
            DoctorRepositoryError::query(format!("{operation}: database query error"))
        }
        _ => DoctorRepositoryError::query(format!("{operation}: database error")),
    }
}
