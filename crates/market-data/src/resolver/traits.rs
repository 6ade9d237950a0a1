//! Resolution traits for the market data crate.

use crate::errors::MarketDataError;
use crate::models::Market;

/// Main symbol resolver interface.
///
/// Implementations must be pure: the same `(symbol, market)` pair always
/// resolves to the same provider symbol, and resolution never touches the
/// network or storage.
pub trait SymbolResolver: Send + Sync {
    /// Resolve a provider-specific symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker as supplied by the user (e.g., "2330", "BTC")
    /// * `market` - The market the ticker belongs to
    ///
    /// # Returns
    /// * `Ok(symbol)` - The provider symbol (e.g., "2330.TW", "BTC-USD")
    /// * `Err(MarketDataError::ResolutionFailed)` - The input is malformed
    fn resolve(&self, symbol: &str, market: Market) -> Result<String, MarketDataError>;
}
