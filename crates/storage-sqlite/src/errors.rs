//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap Diesel-specific errors and convert
//! them to the database-agnostic error types defined in `fundlens_core`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use fundlens_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `fundlens_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Table {table} is missing columns: {}", .missing.join(", "))]
    SchemaMismatch { table: String, missing: Vec<String> },
}

impl StorageError {
    /// Returns `true` for a primary key / unique constraint failure.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::QueryFailed(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _
            ))
        )
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                info,
            )) => Error::Database(DatabaseError::UniqueViolation(info.message().to_string())),
            StorageError::QueryFailed(
                e @ (DieselError::RollbackTransaction | DieselError::RollbackErrorOnCommit { .. }),
            ) => Error::Database(DatabaseError::TransactionFailed(e.to_string())),
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            err @ StorageError::SchemaMismatch { .. } => {
                Error::Database(DatabaseError::SchemaMismatch(err.to_string()))
            }
        }
    }
}

/// Extension trait for easily converting Diesel Results to core Results.
///
/// This provides a `.into_core()` method on any `Result<T, diesel::result::Error>`
/// which handles the conversion through StorageError.
pub trait IntoCore<T> {
    fn into_core(self) -> fundlens_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> fundlens_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> fundlens_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, StorageError> {
    fn into_core(self) -> fundlens_core::Result<T> {
        self.map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_converts_to_database_error() {
        let err = StorageError::SchemaMismatch {
            table: "fundamental_data_tw".to_string(),
            missing: vec!["beta".to_string(), "lastUpdate".to_string()],
        };
        let core: Error = err.into();
        assert!(matches!(
            core,
            Error::Database(DatabaseError::SchemaMismatch(ref msg))
                if msg == "Table fundamental_data_tw is missing columns: beta, lastUpdate"
        ));
    }

    #[test]
    fn test_not_found_is_a_query_failure() {
        let core: Error = StorageError::from(DieselError::NotFound).into();
        assert!(matches!(core, Error::Database(DatabaseError::QueryFailed(_))));
    }
}
