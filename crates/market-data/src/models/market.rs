use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Market category of an instrument.
///
/// The set is closed: every market owns exactly one symbol convention and one
/// storage table, so adding a market means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    /// Listed equities on the domestic exchange (e.g. TWSE).
    #[serde(rename = "tw")]
    DomesticEquity,
    /// Foreign (US) equities, quoted without a suffix.
    #[serde(rename = "us")]
    ForeignEquity,
    /// Domestic over-the-counter / emerging board listings.
    #[serde(rename = "two")]
    Otc,
    Etf,
    Index,
    Crypto,
    Forex,
    Futures,
}

impl Market {
    /// All markets, in display order.
    pub const ALL: [Market; 8] = [
        Market::DomesticEquity,
        Market::ForeignEquity,
        Market::Otc,
        Market::Etf,
        Market::Index,
        Market::Crypto,
        Market::Forex,
        Market::Futures,
    ];

    /// Stable short tag used on the command line and in table names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::DomesticEquity => "tw",
            Market::ForeignEquity => "us",
            Market::Otc => "two",
            Market::Etf => "etf",
            Market::Index => "index",
            Market::Crypto => "crypto",
            Market::Forex => "forex",
            Market::Futures => "futures",
        }
    }

    /// Name of the storage table that holds this market's records.
    pub fn table_name(&self) -> &'static str {
        match self {
            Market::DomesticEquity => "fundamental_data_tw",
            Market::ForeignEquity => "fundamental_data_us",
            Market::Otc => "fundamental_data_two",
            Market::Etf => "fundamental_data_etf",
            Market::Index => "fundamental_data_index",
            Market::Crypto => "fundamental_data_crypto",
            Market::Forex => "fundamental_data_forex",
            Market::Futures => "fundamental_data_futures",
        }
    }

    /// Human-readable description with an example ticker.
    pub fn description(&self) -> &'static str {
        match self {
            Market::DomesticEquity => "Domestic equities (e.g. 2330)",
            Market::ForeignEquity => "Foreign equities (e.g. AAPL)",
            Market::Otc => "OTC / emerging board (e.g. 6488)",
            Market::Etf => "Exchange-traded funds (e.g. 0050, SPY)",
            Market::Index => "Indices (e.g. TWII, GSPC)",
            Market::Crypto => "Cryptocurrencies (e.g. BTC)",
            Market::Forex => "Foreign exchange pairs (e.g. EURUSD)",
            Market::Futures => "Futures (e.g. ES)",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a market tag is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown market '{0}'")]
pub struct ParseMarketError(pub String);

impl FromStr for Market {
    type Err = ParseMarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Market::ALL
            .into_iter()
            .find(|m| m.as_str() == tag)
            .ok_or_else(|| ParseMarketError(s.to_string()))
    }
}
