use std::io::Write;
use std::sync::Arc;

use fundlens_core::{FundamentalService, FundamentalServiceTrait, Market};
use fundlens_market_data::{MarketSymbolResolver, YahooProvider};
use fundlens_storage_sqlite::{create_pool, db, FundamentalRepository};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::output;

pub fn init_tracing() {
    let log_format = std::env::var("FL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries the results.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_service(config: &Config) -> anyhow::Result<FundamentalService> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);
    let pool = create_pool(&db_path)?;

    let resolver = MarketSymbolResolver::from_config(&config.resolver)?;
    let provider = YahooProvider::new()?;

    Ok(FundamentalService::new(
        Arc::new(resolver),
        Arc::new(provider),
        Arc::new(FundamentalRepository::new(pool)),
    ))
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub stored: usize,
    pub failed: usize,
}

/// Ingests `symbols` one after another. A failed symbol is reported and the
/// batch moves on.
pub async fn run_batch<W: Write>(
    service: &dyn FundamentalServiceTrait,
    symbols: &[String],
    market: Market,
    json: bool,
    out: &mut W,
) -> std::io::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for symbol in symbols {
        match service.fetch_and_store_with_outcome(symbol, market).await {
            Ok(result) => {
                summary.stored += 1;
                writeln!(out, "{}", output::render_success(&result, json))?;
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!("Ingestion of {} ({}) failed: {}", symbol, market, e);
                writeln!(out, "{}", output::render_failure(symbol, &e))?;
            }
        }
    }

    writeln!(
        out,
        "{}",
        output::render_totals(market, summary.stored, summary.failed)
    )?;
    Ok(summary)
}
