//! Market resolver - deterministic per-market symbol rules.
//!
//! This resolver applies fixed rules to convert a user ticker into the
//! symbol format used by Yahoo-style providers. It never performs I/O.

use crate::errors::MarketDataError;
use crate::models::{Currency, Market, Mic};

use super::exchange_suffixes::yahoo_suffix_for_mic;
use super::traits::SymbolResolver;

/// Configuration for [`MarketSymbolResolver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    /// MIC of the domestic exchange (default `XTAI`).
    pub domestic_mic: Mic,
    /// MIC of the domestic OTC venue (default `ROCO`).
    pub otc_mic: Mic,
    /// Quote currency appended to bare crypto tickers (default `USD`).
    pub crypto_quote: Currency,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            domestic_mic: "XTAI".into(),
            otc_mic: "ROCO".into(),
            crypto_quote: "USD".into(),
        }
    }
}

/// Resolves provider symbols from deterministic per-market rules.
///
/// Exchange suffixes are looked up once at construction, so an unknown MIC
/// is reported by [`from_config`](Self::from_config) and `resolve` only
/// rejects malformed tickers.
#[derive(Clone, Debug)]
pub struct MarketSymbolResolver {
    domestic_suffix: &'static str,
    otc_suffix: &'static str,
    crypto_quote: String,
}

impl MarketSymbolResolver {
    /// Create a resolver with the default configuration (Taiwan, USD).
    pub fn new() -> Self {
        Self {
            domestic_suffix: ".TW",
            otc_suffix: ".TWO",
            crypto_quote: "USD".to_string(),
        }
    }

    /// Create a resolver from an explicit configuration.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, MarketDataError> {
        let domestic_suffix = yahoo_suffix_for_mic(&config.domestic_mic)
            .ok_or_else(|| MarketDataError::UnknownMic(config.domestic_mic.to_string()))?;
        let otc_suffix = yahoo_suffix_for_mic(&config.otc_mic)
            .ok_or_else(|| MarketDataError::UnknownMic(config.otc_mic.to_string()))?;

        let crypto_quote = config.crypto_quote.trim().to_ascii_uppercase();
        if crypto_quote.is_empty() || !crypto_quote.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MarketDataError::ResolutionFailed {
                symbol: config.crypto_quote.to_string(),
                reason: "crypto quote currency must be alphanumeric".to_string(),
            });
        }

        Ok(Self {
            domestic_suffix,
            otc_suffix,
            crypto_quote,
        })
    }

    /// Validate and canonicalize a raw ticker.
    fn clean(symbol: &str) -> Result<String, MarketDataError> {
        let cleaned = symbol.trim();
        if cleaned.is_empty() {
            return Err(MarketDataError::ResolutionFailed {
                symbol: symbol.to_string(),
                reason: "symbol is empty".to_string(),
            });
        }
        if cleaned.chars().any(char::is_whitespace) {
            return Err(MarketDataError::ResolutionFailed {
                symbol: symbol.to_string(),
                reason: "symbol contains whitespace".to_string(),
            });
        }
        Ok(cleaned.to_ascii_uppercase())
    }

    fn with_suffix(ticker: String, suffix: &str) -> String {
        if ticker.ends_with(suffix) {
            ticker
        } else {
            format!("{}{}", ticker, suffix)
        }
    }

    /// Numeric ETF codes (e.g. "0050", "00632R") are domestic listings.
    fn resolve_etf(&self, ticker: String) -> String {
        let domestic_code = ticker.starts_with(|c: char| c.is_ascii_digit());
        if domestic_code && !ticker.contains('.') {
            format!("{}{}", ticker, self.domestic_suffix)
        } else {
            ticker
        }
    }

    fn resolve_crypto(&self, ticker: String) -> String {
        if ticker.contains('-') {
            ticker
        } else {
            format!("{}-{}", ticker, self.crypto_quote)
        }
    }
}

impl Default for MarketSymbolResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolResolver for MarketSymbolResolver {
    fn resolve(&self, symbol: &str, market: Market) -> Result<String, MarketDataError> {
        let ticker = Self::clean(symbol)?;

        let resolved = match market {
            Market::DomesticEquity => Self::with_suffix(ticker, self.domestic_suffix),
            Market::Otc => Self::with_suffix(ticker, self.otc_suffix),
            Market::ForeignEquity => ticker,
            Market::Etf => self.resolve_etf(ticker),
            Market::Index => {
                if ticker.starts_with('^') {
                    ticker
                } else {
                    format!("^{}", ticker)
                }
            }
            Market::Crypto => self.resolve_crypto(ticker),
            Market::Forex => Self::with_suffix(ticker, "=X"),
            Market::Futures => Self::with_suffix(ticker, "=F"),
        };

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(symbol: &str, market: Market) -> String {
        MarketSymbolResolver::new().resolve(symbol, market).unwrap()
    }

    #[test]
    fn test_resolve_domestic_equity() {
        assert_eq!(resolve("2330", Market::DomesticEquity), "2330.TW");
        assert_eq!(resolve("2330.TW", Market::DomesticEquity), "2330.TW");
    }

    #[test]
    fn test_resolve_otc() {
        assert_eq!(resolve("6488", Market::Otc), "6488.TWO");
        assert_eq!(resolve("6488.two", Market::Otc), "6488.TWO");
    }

    #[test]
    fn test_resolve_foreign_equity_unchanged() {
        assert_eq!(resolve("AAPL", Market::ForeignEquity), "AAPL");
        assert_eq!(resolve(" msft ", Market::ForeignEquity), "MSFT");
    }

    #[test]
    fn test_resolve_etf() {
        assert_eq!(resolve("0050", Market::Etf), "0050.TW");
        assert_eq!(resolve("00632R", Market::Etf), "00632R.TW");
        assert_eq!(resolve("SPY", Market::Etf), "SPY");
        assert_eq!(resolve("0050.TW", Market::Etf), "0050.TW");
    }

    #[test]
    fn test_resolve_index() {
        assert_eq!(resolve("TWII", Market::Index), "^TWII");
        assert_eq!(resolve("^GSPC", Market::Index), "^GSPC");
    }

    #[test]
    fn test_resolve_crypto() {
        assert_eq!(resolve("BTC", Market::Crypto), "BTC-USD");
        assert_eq!(resolve("eth", Market::Crypto), "ETH-USD");
        assert_eq!(resolve("ETH-EUR", Market::Crypto), "ETH-EUR");
    }

    #[test]
    fn test_resolve_forex() {
        assert_eq!(resolve("EURUSD", Market::Forex), "EURUSD=X");
        assert_eq!(resolve("USDTWD=X", Market::Forex), "USDTWD=X");
    }

    #[test]
    fn test_resolve_futures() {
        assert_eq!(resolve("ES", Market::Futures), "ES=F");
        assert_eq!(resolve("GC=F", Market::Futures), "GC=F");
    }

    #[test]
    fn test_resolve_is_deterministic_and_idempotent() {
        let resolver = MarketSymbolResolver::new();
        for market in Market::ALL {
            let first = resolver.resolve("X", market).unwrap();
            let second = resolver.resolve("X", market).unwrap();
            assert_eq!(first, second);

            let again = resolver.resolve(&first, market).unwrap();
            assert_eq!(again, first, "resolving {} twice for {}", first, market);
        }
    }

    #[test]
    fn test_resolve_rejects_malformed_symbols() {
        let resolver = MarketSymbolResolver::new();
        let err = resolver.resolve("   ", Market::ForeignEquity).unwrap_err();
        assert!(matches!(err, MarketDataError::ResolutionFailed { .. }));

        let err = resolver.resolve("BRK B", Market::ForeignEquity).unwrap_err();
        assert!(matches!(err, MarketDataError::ResolutionFailed { .. }));
    }

    #[test]
    fn test_from_config_custom_markets() {
        let config = ResolverConfig {
            domestic_mic: "XKRX".into(),
            otc_mic: "XKOS".into(),
            crypto_quote: "krw".into(),
        };
        let resolver = MarketSymbolResolver::from_config(&config).unwrap();

        assert_eq!(
            resolver.resolve("005930", Market::DomesticEquity).unwrap(),
            "005930.KS"
        );
        assert_eq!(resolver.resolve("091990", Market::Otc).unwrap(), "091990.KQ");
        assert_eq!(resolver.resolve("BTC", Market::Crypto).unwrap(), "BTC-KRW");
    }

    #[test]
    fn test_from_config_rejects_unknown_mic() {
        let config = ResolverConfig {
            domestic_mic: "NOPE".into(),
            ..Default::default()
        };
        let err = MarketSymbolResolver::from_config(&config).unwrap_err();
        assert!(matches!(err, MarketDataError::UnknownMic(mic) if mic == "NOPE"));
    }

    #[test]
    fn test_default_config_matches_new() {
        let from_config = MarketSymbolResolver::from_config(&ResolverConfig::default()).unwrap();
        let plain = MarketSymbolResolver::new();
        for market in Market::ALL {
            assert_eq!(
                from_config.resolve("1234", market).unwrap(),
                plain.resolve("1234", market).unwrap()
            );
        }
    }
}
