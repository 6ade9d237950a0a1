//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `types` - Type aliases for common identifiers (Mic, Currency)
//! - `market` - The fixed set of markets (Market)
//! - `provider_fields` - Raw field mapping returned by providers (ProviderFields)

mod market;
mod provider_fields;
mod types;

pub use market::{Market, ParseMarketError};
pub use provider_fields::ProviderFields;
pub use types::{Currency, Mic};
