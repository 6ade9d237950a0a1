//! CLI argument definitions for Fundlens.
//!
//! # Examples
//!
//! ```bash
//! # Domestic equities
//! fundlens 2330 2317 --tw
//!
//! # Crypto, printing each stored record as JSON
//! fundlens BTC ETH --crypto --json
//!
//! # List the supported markets
//! fundlens --help-markets
//! ```

use clap::{ArgGroup, Parser};
use fundlens_core::Market;

/// Fetch per-symbol fundamentals and store each symbol once per market.
#[derive(Debug, Parser)]
#[command(
    name = "fundlens",
    version,
    about = "Fetch and store per-symbol fundamentals",
    group(ArgGroup::new("market").multiple(false))
)]
pub struct Cli {
    /// Tickers to ingest, e.g. 2330 AAPL BTC.
    pub symbols: Vec<String>,

    /// Domestic equities (2330 -> 2330.TW).
    #[arg(long, group = "market")]
    pub tw: bool,

    /// Foreign (US) equities, no suffix.
    #[arg(long, group = "market")]
    pub us: bool,

    /// OTC / emerging board (6488 -> 6488.TWO).
    #[arg(long, group = "market")]
    pub two: bool,

    /// Exchange-traded funds.
    #[arg(long, group = "market")]
    pub etf: bool,

    /// Indices (TWII -> ^TWII).
    #[arg(long, group = "market")]
    pub index: bool,

    /// Cryptocurrencies (BTC -> BTC-USD).
    #[arg(long, group = "market")]
    pub crypto: bool,

    /// Currency pairs (EURUSD -> EURUSD=X).
    #[arg(long, group = "market")]
    pub forex: bool,

    /// Futures (ES -> ES=F).
    #[arg(long, group = "market")]
    pub futures: bool,

    /// List the supported markets and exit.
    #[arg(long)]
    pub help_markets: bool,

    /// Print each record as pretty JSON instead of a one-line summary.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The market selected by the flags, if any.
    pub fn market(&self) -> Option<Market> {
        [
            (self.tw, Market::DomesticEquity),
            (self.us, Market::ForeignEquity),
            (self.two, Market::Otc),
            (self.etf, Market::Etf),
            (self.index, Market::Index),
            (self.crypto, Market::Crypto),
            (self.forex, Market::Forex),
            (self.futures, Market::Futures),
        ]
        .into_iter()
        .find_map(|(selected, market)| selected.then_some(market))
    }
}
