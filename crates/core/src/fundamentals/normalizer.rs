//! Maps provider fields onto the canonical [`FundamentalRecord`].
//!
//! Each canonical field lists the provider keys it may come from, in
//! precedence order. The first key holding a usable value wins; a value of
//! the wrong shape (non-finite number, blank string, non-numeric text) is
//! treated as absent rather than defaulted.

use chrono::DateTime;
use fundlens_market_data::ProviderFields;
use log::debug;
use serde_json::Value;

use super::fundamentals_model::FundamentalRecord;
use crate::errors::NormalizationError;

const SHORT_NAME: &[&str] = &["shortName", "longName"];
const EXCHANGE: &[&str] = &["exchange", "exchangeName"];
const CURRENCY: &[&str] = &["currency", "financialCurrency"];
const PRICE_TO_SALES: &[&str] = &["priceToSalesTrailing12Months", "priceToSales"];
const PEG_RATIO: &[&str] = &["pegRatio", "trailingPegRatio"];
const AVERAGE_VOLUME: &[&str] = &["averageVolume", "averageDailyVolume3Month"];
const DIVIDEND_RATE: &[&str] = &["dividendRate", "trailingAnnualDividendRate"];
const DIVIDEND_YIELD: &[&str] = &["dividendYield", "trailingAnnualDividendYield"];

/// Builds the canonical record for `symbol` from raw provider fields.
///
/// `symbol` is the persistence key (the user's ticker, not the provider
/// symbol). Fails when the response is empty or carries no name.
pub fn normalize(
    symbol: &str,
    fields: &ProviderFields,
) -> Result<FundamentalRecord, NormalizationError> {
    if fields.is_empty() {
        return Err(NormalizationError::EmptyResponse(symbol.to_string()));
    }

    let reader = FieldReader { fields };

    let short_name = reader
        .text(SHORT_NAME)
        .ok_or_else(|| NormalizationError::MissingIdentity(symbol.to_string()))?;

    let record = FundamentalRecord {
        symbol: symbol.to_string(),
        short_name: Some(short_name),
        sector: reader.text(&["sector"]),
        industry: reader.text(&["industry"]),
        country: reader.text(&["country"]),
        currency: reader.text(CURRENCY),
        exchange: reader.text(EXCHANGE),

        market_cap: reader.int(&["marketCap"]),
        trailing_pe: reader.float(&["trailingPE"]),
        forward_pe: reader.float(&["forwardPE"]),
        price_to_book: reader.float(&["priceToBook"]),
        price_to_sales: reader.float(PRICE_TO_SALES),
        enterprise_to_revenue: reader.float(&["enterpriseToRevenue"]),
        enterprise_to_ebitda: reader.float(&["enterpriseToEbitda"]),
        peg_ratio: reader.float(PEG_RATIO),

        debt_to_equity: reader.float(&["debtToEquity"]),
        current_ratio: reader.float(&["currentRatio"]),
        quick_ratio: reader.float(&["quickRatio"]),
        total_cash: reader.int(&["totalCash"]),
        total_debt: reader.int(&["totalDebt"]),

        return_on_equity: reader.float(&["returnOnEquity"]),
        return_on_assets: reader.float(&["returnOnAssets"]),
        profit_margins: reader.float(&["profitMargins"]),
        operating_margins: reader.float(&["operatingMargins"]),
        gross_margins: reader.float(&["grossMargins"]),
        revenue_growth: reader.float(&["revenueGrowth"]),
        earnings_growth: reader.float(&["earningsGrowth"]),
        total_revenue: reader.int(&["totalRevenue"]),
        net_income_to_common: reader.int(&["netIncomeToCommon"]),

        book_value: reader.float(&["bookValue"]),
        fifty_two_week_high: reader.float(&["fiftyTwoWeekHigh"]),
        fifty_two_week_low: reader.float(&["fiftyTwoWeekLow"]),
        shares_outstanding: reader.int(&["sharesOutstanding"]),
        average_volume: reader.int(AVERAGE_VOLUME),

        dividend_yield: reader.float(DIVIDEND_YIELD),
        payout_ratio: reader.float(&["payoutRatio"]),
        dividend_rate: reader.float(DIVIDEND_RATE),
        ex_dividend_date: reader.date(&["exDividendDate"]),

        beta: reader.float(&["beta"]),

        last_update: None,
    };

    debug!("Normalized {} provider fields for {}", fields.len(), symbol);
    Ok(record)
}

struct FieldReader<'a> {
    fields: &'a ProviderFields,
}

impl FieldReader<'_> {
    fn first<T>(&self, keys: &[&str], convert: impl Fn(&Value) -> Option<T>) -> Option<T> {
        keys.iter()
            .filter_map(|key| self.fields.get(key))
            .find_map(convert)
    }

    fn text(&self, keys: &[&str]) -> Option<String> {
        self.first(keys, as_text)
    }

    fn float(&self, keys: &[&str]) -> Option<f64> {
        self.first(keys, as_float)
    }

    fn int(&self, keys: &[&str]) -> Option<i64> {
        self.first(keys, as_int)
    }

    fn date(&self, keys: &[&str]) -> Option<String> {
        self.first(keys, as_date)
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn as_int(value: &Value) -> Option<i64> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Some(i);
        }
    }
    if let Value::String(s) = value {
        if let Ok(i) = s.trim().parse::<i64>() {
            return Some(i);
        }
    }

    // i64::MAX is not representable as f64; the bound is exclusive
    let rounded = as_float(value)?.round();
    (rounded >= i64::MIN as f64 && rounded < i64::MAX as f64).then(|| rounded as i64)
}

fn as_date(value: &Value) -> Option<String> {
    match value {
        Value::Number(_) => {
            let seconds = as_int(value)?;
            DateTime::from_timestamp(seconds, 0).map(|dt| dt.format("%Y-%m-%d").to_string())
        }
        _ => as_text(value),
    }
}
