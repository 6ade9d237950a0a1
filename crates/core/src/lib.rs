//! Fundlens Core - Domain entities, services, and traits.
//!
//! This crate contains the ingestion pipeline for Fundlens: it turns a
//! ticker and a [`Market`] into a canonical [`FundamentalRecord`] and hands it
//! to a repository for idempotent storage. It is database-agnostic and
//! defines traits that are implemented by the `storage-sqlite` crate.

pub mod errors;
pub mod fundamentals;

pub use fundamentals::*;

// Market data types used across the public API
pub use fundlens_market_data::{Market, MarketDataError, ProviderFields};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
