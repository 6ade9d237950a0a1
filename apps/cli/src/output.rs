//! Terminal rendering for ingestion results.

use fundlens_core::{Error, FundamentalRecord, IngestionResult, Market};

pub fn render_markets() -> String {
    let mut out = String::from("Supported markets:\n");
    for market in Market::ALL {
        out.push_str(&format!("  --{:<8} {}\n", market.as_str(), market.description()));
    }
    out
}

pub fn render_success(result: &IngestionResult, json: bool) -> String {
    let body = if json {
        serde_json::to_string_pretty(&result.record)
            .unwrap_or_else(|e| format!("<unserializable record: {}>", e))
    } else {
        summary(&result.record)
    };
    format!("✓ {} {}\n{}", result.record.symbol, result.outcome, body)
}

pub fn render_failure(symbol: &str, error: &Error) -> String {
    format!("✗ {} {}", symbol.trim(), error)
}

pub fn render_totals(market: Market, stored: usize, failed: usize) -> String {
    format!(
        "{} succeeded, {} failed ({})",
        stored,
        failed,
        market.table_name()
    )
}

/// One-line view of the fields people usually look at first.
fn summary(record: &FundamentalRecord) -> String {
    let mut parts = Vec::new();
    if let Some(name) = &record.short_name {
        parts.push(name.clone());
    }
    if let Some(sector) = &record.sector {
        parts.push(sector.clone());
    }
    if let Some(cap) = record.market_cap {
        let currency = record.currency.as_deref().unwrap_or("");
        parts.push(format!("cap {} {}", cap, currency).trim_end().to_string());
    }
    if let Some(pe) = record.trailing_pe {
        parts.push(format!("P/E {:.2}", pe));
    }
    if let Some(dy) = record.dividend_yield {
        parts.push(format!("yield {:.2}%", dy * 100.0));
    }
    format!("  {}", parts.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundlens_core::{InsertOutcome, MarketDataError};

    fn result(outcome: InsertOutcome) -> IngestionResult {
        let mut record = FundamentalRecord::new("2330");
        record.short_name = Some("TSMC".to_string());
        record.currency = Some("TWD".to_string());
        record.market_cap = Some(1000);
        record.trailing_pe = Some(24.5);
        IngestionResult { record, outcome }
    }

    #[test]
    fn test_markets_list_every_flag() {
        let out = render_markets();
        for market in Market::ALL {
            assert!(out.contains(&format!("--{}", market.as_str())));
        }
    }

    #[test]
    fn test_success_summary() {
        let out = render_success(&result(InsertOutcome::Inserted), false);
        assert_eq!(out, "✓ 2330 stored\n  TSMC | cap 1000 TWD | P/E 24.50");

        let out = render_success(&result(InsertOutcome::AlreadyPresent), false);
        assert!(out.starts_with("✓ 2330 already stored"));
    }

    #[test]
    fn test_success_json_uses_column_names() {
        let out = render_success(&result(InsertOutcome::Inserted), true);
        assert!(out.contains("\"trailingPE\": 24.5"));
        assert!(out.contains("\"marketCap\": 1000"));
        assert!(!out.contains("lastUpdate"));
    }

    #[test]
    fn test_failure_line() {
        let err = Error::Provider(MarketDataError::SymbolNotFound("ZZZZ".to_string()));
        assert!(render_failure(" ZZZZ ", &err).starts_with("✗ ZZZZ "));
    }
}
