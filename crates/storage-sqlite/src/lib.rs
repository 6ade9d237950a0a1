//! SQLite storage implementation for Fundlens.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `fundlens-core` and contains:
//! - Database connection pooling and management
//! - Static per-market table schemas and their runtime creation
//! - The fundamentals repository
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//! The `core` crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod fundamentals;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use fundamentals::FundamentalRepository;

// Re-export from fundlens-core for convenience
pub use fundlens_core::errors::{DatabaseError, Error, Result};
