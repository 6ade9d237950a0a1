//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers both halves of the provider-facing pipeline:
//! symbol resolution and fundamentals fetching.

use thiserror::Error;

/// Failures raised while resolving a ticker or fetching its fundamentals.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider has no fundamentals for the symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// HTTP 429 from the provider.
    #[error("Rate limited: {provider}")]
    RateLimited {
        provider: String,
    },

    /// No response within the client timeout.
    #[error("Timeout: {provider}")]
    Timeout {
        provider: String,
    },

    /// Unexpected status, payload error or unreadable body.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        provider: String,
        message: String,
    },

    /// The symbol could not be turned into a provider symbol.
    /// Only malformed input (e.g. a blank ticker) ends up here.
    #[error("Resolution failed for '{symbol}': {reason}")]
    ResolutionFailed {
        /// The raw symbol as supplied by the caller
        symbol: String,
        /// Why the symbol was rejected
        reason: String,
    },

    /// A configured Market Identifier Code has no known provider suffix.
    #[error("Unknown market identifier code: {0}")]
    UnknownMic(String),

    /// Transport failure below HTTP.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns `true` when the provider answered but has no data for the symbol.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_))
    }
}
