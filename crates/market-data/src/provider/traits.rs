//! Fundamentals provider trait definitions.
//!
//! This module defines the `FundamentalsProvider` trait that all
//! fundamentals sources must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::ProviderFields;

/// Trait for fundamentals providers.
///
/// Providers receive an already-resolved symbol (see
/// [`SymbolResolver`](crate::SymbolResolver)) and return the raw fields they
/// found. Mapping names and units onto the canonical record happens in the
/// core crate, not in the providers.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use fundlens_market_data::{FundamentalsProvider, MarketDataError, ProviderFields};
///
/// struct StaticProvider;
///
/// #[async_trait]
/// impl FundamentalsProvider for StaticProvider {
///     fn id(&self) -> &'static str {
///         "STATIC"
///     }
///
///     async fn get_fundamentals(&self, symbol: &str) -> Result<ProviderFields, MarketDataError> {
///         Ok(ProviderFields::new().with("shortName", symbol))
///     }
/// }
/// ```
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error messages.
    fn id(&self) -> &'static str;

    /// Fetch the fundamentals of one instrument.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The provider symbol (already resolved, e.g. "2330.TW")
    ///
    /// # Returns
    ///
    /// The provider's fields on success. An unknown ticker must be reported
    /// as `MarketDataError::SymbolNotFound`, never as an empty field set.
    async fn get_fundamentals(&self, symbol: &str) -> Result<ProviderFields, MarketDataError>;
}
