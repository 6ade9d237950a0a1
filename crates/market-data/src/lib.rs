//! Fundlens Market Data Crate
//!
//! This crate provides the provider-facing half of the Fundlens ingestion
//! pipeline: market classification, symbol resolution and fundamentals
//! providers.
//!
//! # Overview
//!
//! The market data crate supports:
//! - A fixed set of markets: domestic and foreign equities, OTC, ETFs,
//!   indices, crypto, forex and futures
//! - Deterministic, market-aware symbol resolution
//! - Provider-agnostic fundamentals fetching (Yahoo Finance out of the box)
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! | (symbol, Market) | --> |    Resolver      |  (pure, per-market rules)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | Provider symbol  |  (e.g. "2330.TW", "BTC-USD")
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Provider      |  (Yahoo quoteSummary, ...)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ProviderFields  |  (raw named fields)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Market`] - Market category; owns a resolution rule and a storage table
//! - [`ProviderFields`] - Raw field mapping returned by a provider
//! - [`MarketSymbolResolver`] - Default [`SymbolResolver`] implementation
//! - [`FundamentalsProvider`] - Trait implemented by fundamentals sources
//!
//! # Type Aliases
//!
//! - [`Mic`] - Market Identifier Code (ISO 10383)
//! - [`Currency`] - Currency code (ISO 4217)

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

// Re-export all public types from models
pub use models::{Currency, Market, Mic, ParseMarketError, ProviderFields};

// Re-export resolver types
pub use resolver::{
    yahoo_suffix_for_mic, MarketSymbolResolver, ResolverConfig, SymbolResolver,
    YAHOO_EXCHANGE_SUFFIXES,
};

// Re-export provider types
pub use provider::yahoo::YahooProvider;
pub use provider::FundamentalsProvider;

pub use errors::MarketDataError;
