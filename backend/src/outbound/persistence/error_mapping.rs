//! Classification of pool and Diesel failures shared by the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Coarse outcome of a failed Diesel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DieselFailure {
    /// The connection dropped mid-operation.
    Connection(&'static str),
    /// A unique constraint rejected a write.
    UniqueViolation,
    /// Any other execution or conversion failure.
    Query(&'static str),
}

/// Message carried by a pool failure.
pub(super) fn pool_error_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

/// Log a Diesel error at debug level and classify it.
///
/// Driver messages are logged but not propagated, so callers never leak SQL
/// details into domain errors.
pub(super) fn classify_diesel_error(error: &DieselError) -> DieselFailure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => DieselFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DieselFailure::UniqueViolation
        }
        DieselError::DeserializationError(_) => DieselFailure::Query("row conversion error"),
        _ => DieselFailure::Query("database error"),
    }
}
