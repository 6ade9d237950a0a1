//! Core error types for Fundlens.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use fundlens_market_data::MarketDataError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ingestion pipeline.
///
/// Every non-benign failure of `fetch_and_store` surfaces as one of these
/// variants. Database-specific errors are wrapped in string form to keep this
/// type database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    /// The symbol could not be resolved for its market.
    #[error("Symbol resolution failed: {0}")]
    Resolution(MarketDataError),

    /// The provider was unreachable or has no data for the symbol.
    #[error("Provider request failed: {0}")]
    Provider(MarketDataError),

    #[error("Normalization failed: {0}")]
    Normalization(#[from] NormalizationError),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Returns `true` when the provider has no data for the requested symbol.
    pub fn is_symbol_not_found(&self) -> bool {
        matches!(self, Error::Provider(e) if e.is_not_found())
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// An existing table does not have the expected columns.
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Errors raised while mapping provider fields onto a canonical record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    /// The provider returned no fields at all.
    #[error("Provider returned no fields for {0}")]
    EmptyResponse(String),

    /// The response has no name, so it cannot identify an instrument.
    #[error("Provider response for {0} carries no shortName or longName")]
    MissingIdentity(String),
}
