//! Yahoo Finance API response models.
//!
//! The quoteSummary endpoint returns one object per requested module. Module
//! payloads are kept as raw JSON here; flattening them into provider fields
//! is done by the provider.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container.
///
/// Yahoo sets `result` to `null` and fills `error` for unknown symbols.
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    #[serde(default)]
    pub result: Option<Vec<YahooQuoteSummaryResult>>,
    #[serde(default)]
    pub error: Option<YahooQuoteSummaryError>,
}

/// Individual result from quoteSummary API, keyed by module name
/// (`price`, `summaryDetail`, ...).
#[derive(Debug, Default, Deserialize)]
pub struct YahooQuoteSummaryResult {
    #[serde(flatten)]
    pub modules: HashMap<String, Value>,
}

/// Error payload from quoteSummary API
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummaryError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl YahooQuoteSummaryError {
    /// Whether Yahoo reports the symbol as unknown.
    pub fn is_not_found(&self) -> bool {
        self.code
            .as_deref()
            .map(|code| code.eq_ignore_ascii_case("Not Found"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_result() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {"shortName": "TSMC", "marketCap": {"raw": 1000, "fmt": "1k"}},
                    "summaryDetail": {}
                }],
                "error": null
            }
        }"#;

        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let results = response.quote_summary.result.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].modules.contains_key("price"));
        assert!(results[0].modules.contains_key("summaryDetail"));
        assert!(response.quote_summary.error.is_none());
    }

    #[test]
    fn test_parse_error_payload() {
        let json = r#"{
            "quoteSummary": {
                "result": null,
                "error": {"code": "Not Found", "description": "Quote not found for symbol: ZZZZ"}
            }
        }"#;

        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        assert!(response.quote_summary.result.is_none());
        let error = response.quote_summary.error.unwrap();
        assert!(error.is_not_found());
        assert_eq!(
            error.description.as_deref(),
            Some("Quote not found for symbol: ZZZZ")
        );
    }

    #[test]
    fn test_other_error_codes_are_not_not_found() {
        let error = YahooQuoteSummaryError {
            code: Some("Unauthorized".to_string()),
            description: Some("Invalid Crumb".to_string()),
        };
        assert!(!error.is_not_found());
    }
}
