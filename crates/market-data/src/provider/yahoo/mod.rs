//! Yahoo Finance fundamentals provider.
//!
//! This provider uses the Yahoo Finance quoteSummary API to fetch
//! fundamentals for equities, ETFs, indices, cryptocurrencies, currency
//! pairs and futures (e.g. `2330.TW`, `AAPL`, `^TWII`, `BTC-USD`,
//! `EURUSD=X`, `ES=F`).

mod models;

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::{header, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::ProviderFields;
use crate::provider::FundamentalsProvider;

use models::{YahooQuoteSummaryResponse, YahooQuoteSummaryResult};

const PROVIDER_ID: &str = "YAHOO";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const QUOTE_SUMMARY_URL: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// quoteSummary modules requested, in precedence order.
///
/// When two modules carry the same key, the earlier module wins.
pub const QUOTE_SUMMARY_MODULES: &[&str] = &[
    "price",
    "summaryDetail",
    "defaultKeyStatistics",
    "financialData",
    "assetProfile",
];

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance fundamentals provider.
pub struct YahooProvider {
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to initialize HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        if let Ok(guard) = YAHOO_CRUMB.read() {
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        debug!("Fetching Yahoo authentication crumb");

        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| transport_error("Failed to get cookie", e))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| transport_error("Failed to get crumb", e))?
            .text()
            .await
            .map_err(|e| transport_error("Failed to read crumb", e))?;

        let crumb_data = CrumbData { cookie, crumb };

        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = Some(crumb_data.clone());
        }

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = None;
        }
    }

    // ========================================================================
    // Fundamentals Fetching
    // ========================================================================

    async fn fetch_quote_summary(&self, symbol: &str) -> Result<ProviderFields, MarketDataError> {
        let crumb = self.ensure_crumb().await?;
        let url = quote_summary_url(symbol, &crumb.crumb);

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| transport_error("quoteSummary request failed", e))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                self.clear_crumb();
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: "Yahoo authentication expired".to_string(),
                });
            }
            StatusCode::NOT_FOUND => {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            status if !status.is_success() => {
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("quoteSummary returned HTTP {}", status),
                });
            }
            _ => {}
        }

        let data: YahooQuoteSummaryResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Failed to parse quoteSummary response: {}", e),
                })?;

        extract_fields(symbol, data)
    }
}

#[async_trait]
impl FundamentalsProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_fundamentals(&self, symbol: &str) -> Result<ProviderFields, MarketDataError> {
        debug!("Fetching fundamentals for {} from Yahoo", symbol);

        let fields = self.fetch_quote_summary(symbol).await?;
        debug!("Yahoo returned {} fields for {}", fields.len(), symbol);
        Ok(fields)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn quote_summary_url(symbol: &str, crumb: &str) -> String {
    format!(
        "{}/{}?modules={}&crumb={}",
        QUOTE_SUMMARY_URL,
        encode(symbol),
        QUOTE_SUMMARY_MODULES.join(","),
        encode(crumb)
    )
}

fn transport_error(context: &str, error: reqwest::Error) -> MarketDataError {
    if error.is_timeout() {
        return MarketDataError::Timeout {
            provider: PROVIDER_ID.to_string(),
        };
    }
    MarketDataError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message: format!("{}: {}", context, error),
    }
}

/// Turn a parsed quoteSummary response into provider fields.
fn extract_fields(
    symbol: &str,
    data: YahooQuoteSummaryResponse,
) -> Result<ProviderFields, MarketDataError> {
    let summary = data.quote_summary;

    if let Some(error) = summary.error {
        if error.is_not_found() {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        warn!(
            "quoteSummary error for {}: {:?} {:?}",
            symbol, error.code, error.description
        );
        return Err(MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: error
                .description
                .or(error.code)
                .unwrap_or_else(|| "unknown quoteSummary error".to_string()),
        });
    }

    let result = summary
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

    let fields = flatten_quote_summary(&result);
    if fields.is_empty() {
        return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
    }

    Ok(fields)
}

/// Merge the module payloads of one quoteSummary result into a flat map.
fn flatten_quote_summary(result: &YahooQuoteSummaryResult) -> ProviderFields {
    let mut fields = ProviderFields::new();

    for module in QUOTE_SUMMARY_MODULES {
        let Some(Value::Object(payload)) = result.modules.get(*module) else {
            continue;
        };
        for (key, value) in payload {
            if key == "maxAge" {
                continue;
            }
            if let Some(value) = flatten_value(value) {
                fields.insert_if_absent(key.clone(), value);
            }
        }
    }

    fields
}

/// Unwrap Yahoo's `{raw, fmt}` objects; drop nulls, empty objects and
/// nested structures (e.g. `companyOfficers`).
fn flatten_value(value: &Value) -> Option<Value> {
    match value {
        Value::Null | Value::Array(_) => None,
        Value::Object(map) => match map.get("raw") {
            Some(Value::Null) | None => None,
            Some(raw) => Some(raw.clone()),
        },
        scalar => Some(scalar.clone()),
    }
}

// ============================================================================
// Tests
// ============================================================================
