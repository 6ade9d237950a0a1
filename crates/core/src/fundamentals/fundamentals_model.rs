//! Fundamentals domain models.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Canonical fundamentals of one symbol in one market.
///
/// Serialized names match the storage column names. Every field except
/// `symbol` is optional: a value the provider did not report stays `None` and
/// is stored as NULL. `last_update` is assigned by the database on insert and
/// is only populated on records read back from storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalRecord {
    pub symbol: String,

    // Identity
    pub short_name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub exchange: Option<String>,

    // Valuation
    pub market_cap: Option<i64>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<f64>,
    pub price_to_book: Option<f64>,
    pub price_to_sales: Option<f64>,
    pub enterprise_to_revenue: Option<f64>,
    pub enterprise_to_ebitda: Option<f64>,
    pub peg_ratio: Option<f64>,

    // Financial health
    pub debt_to_equity: Option<f64>,
    pub current_ratio: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub total_cash: Option<i64>,
    pub total_debt: Option<i64>,

    // Profitability and growth
    pub return_on_equity: Option<f64>,
    pub return_on_assets: Option<f64>,
    pub profit_margins: Option<f64>,
    pub operating_margins: Option<f64>,
    pub gross_margins: Option<f64>,
    pub revenue_growth: Option<f64>,
    pub earnings_growth: Option<f64>,
    pub total_revenue: Option<i64>,
    pub net_income_to_common: Option<i64>,

    // Share data
    pub book_value: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub shares_outstanding: Option<i64>,
    pub average_volume: Option<i64>,

    // Dividend
    pub dividend_yield: Option<f64>,
    pub payout_ratio: Option<f64>,
    pub dividend_rate: Option<f64>,
    pub ex_dividend_date: Option<String>,

    pub beta: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<NaiveDateTime>,
}

impl FundamentalRecord {
    /// Creates an empty record keyed by `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Compares the fundamentals, ignoring the storage timestamp.
    pub fn same_fundamentals(&self, other: &FundamentalRecord) -> bool {
        Self {
            last_update: None,
            ..self.clone()
        } == Self {
            last_update: None,
            ..other.clone()
        }
    }
}

/// Result of an idempotent save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsertOutcome {
    /// A new row was written.
    Inserted,
    /// A row with the same symbol already existed; nothing was written.
    AlreadyPresent,
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

impl fmt::Display for InsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertOutcome::Inserted => f.write_str("stored"),
            InsertOutcome::AlreadyPresent => f.write_str("already stored"),
        }
    }
}

/// A fetched record together with what the repository did with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionResult {
    pub record: FundamentalRecord,
    pub outcome: InsertOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_serializes_canonical_names() {
        let mut record = FundamentalRecord::new("2330");
        record.trailing_pe = Some(24.5);
        record.fifty_two_week_high = Some(1100.0);
        record.net_income_to_common = Some(1_000);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["symbol"], json!("2330"));
        assert_eq!(value["trailingPE"], json!(24.5));
        assert_eq!(value["fiftyTwoWeekHigh"], json!(1100.0));
        assert_eq!(value["netIncomeToCommon"], json!(1_000));
        assert_eq!(value["forwardPE"], json!(null));
        assert!(value.get("lastUpdate").is_none());
    }

    #[test]
    fn test_same_fundamentals_ignores_last_update() {
        let mut stored = FundamentalRecord::new("AAPL");
        stored.market_cap = Some(3_000_000_000_000);
        let fetched = stored.clone();
        stored.last_update = NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0));

        assert!(stored.same_fundamentals(&fetched));
        assert_ne!(stored, fetched);
    }

    #[test]
    fn test_insert_outcome_display() {
        assert_eq!(InsertOutcome::Inserted.to_string(), "stored");
        assert_eq!(InsertOutcome::AlreadyPresent.to_string(), "already stored");
        assert!(InsertOutcome::Inserted.is_inserted());
        assert!(!InsertOutcome::AlreadyPresent.is_inserted());
    }
}
