//! Symbol resolution for fundamentals providers.
//!
//! This module converts a user-facing ticker plus a [`Market`](crate::Market)
//! into the exact symbol a provider expects (e.g., "2330" on the domestic
//! market becomes "2330.TW" for Yahoo).
//!
//! # Resolution Rules
//!
//! | Market          | Rule                                       | Example              |
//! |-----------------|--------------------------------------------|----------------------|
//! | domestic equity | append the domestic exchange suffix        | `2330` -> `2330.TW`  |
//! | OTC             | append the OTC venue suffix                | `6488` -> `6488.TWO` |
//! | foreign equity  | unchanged                                  | `AAPL` -> `AAPL`     |
//! | ETF             | numeric codes are domestic, others as-is   | `0050` -> `0050.TW`  |
//! | index           | `^` prefix                                 | `TWII` -> `^TWII`    |
//! | crypto          | `-<quote currency>` suffix                 | `BTC` -> `BTC-USD`   |
//! | forex           | `=X` suffix                                | `EURUSD` -> `EURUSD=X` |
//! | futures         | `=F` suffix                                | `ES` -> `ES=F`       |
//!
//! Symbols that already carry the market's decoration are left alone, so
//! resolution is idempotent.
//!
//! # Example
//!
//! ```
//! use fundlens_market_data::{Market, MarketSymbolResolver, SymbolResolver};
//!
//! let resolver = MarketSymbolResolver::new();
//! assert_eq!(resolver.resolve("2330", Market::DomesticEquity).unwrap(), "2330.TW");
//! assert_eq!(resolver.resolve("BTC", Market::Crypto).unwrap(), "BTC-USD");
//! ```

mod exchange_suffixes;
mod market_resolver;
mod traits;

pub use exchange_suffixes::{yahoo_suffix_for_mic, YAHOO_EXCHANGE_SUFFIXES};
pub use market_resolver::{MarketSymbolResolver, ResolverConfig};
pub use traits::SymbolResolver;
