use async_trait::async_trait;
use fundlens_market_data::{FundamentalsProvider, Market, SymbolResolver};
use log::{debug, info, warn};
use std::sync::Arc;

use super::fundamentals_model::{FundamentalRecord, IngestionResult};
use super::fundamentals_traits::{FundamentalRepositoryTrait, FundamentalServiceTrait};
use super::normalizer::normalize;
use crate::errors::{Error, Result};

/// Ingestion pipeline: resolve, fetch, normalize, then save once.
pub struct FundamentalService {
    resolver: Arc<dyn SymbolResolver>,
    provider: Arc<dyn FundamentalsProvider>,
    repository: Arc<dyn FundamentalRepositoryTrait>,
}

impl FundamentalService {
    pub fn new(
        resolver: Arc<dyn SymbolResolver>,
        provider: Arc<dyn FundamentalsProvider>,
        repository: Arc<dyn FundamentalRepositoryTrait>,
    ) -> Self {
        Self {
            resolver,
            provider,
            repository,
        }
    }
}

/// Persistence key for a user ticker. Tickers are case-insensitive, so
/// `aapl` and `AAPL` share one row.
fn storage_key(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

#[async_trait]
impl FundamentalServiceTrait for FundamentalService {
    async fn fetch_and_store(&self, symbol: &str, market: Market) -> Result<FundamentalRecord> {
        self.fetch_and_store_with_outcome(symbol, market)
            .await
            .map(|result| result.record)
    }

    async fn fetch_and_store_with_outcome(
        &self,
        symbol: &str,
        market: Market,
    ) -> Result<IngestionResult> {
        let provider_symbol = self
            .resolver
            .resolve(symbol, market)
            .map_err(Error::Resolution)?;
        debug!(
            "Resolved '{}' ({}) to provider symbol {}",
            symbol, market, provider_symbol
        );

        let fields = self
            .provider
            .get_fundamentals(&provider_symbol)
            .await
            .map_err(|e| {
                warn!(
                    "{} failed to return fundamentals for {}: {}",
                    self.provider.id(),
                    provider_symbol,
                    e
                );
                Error::Provider(e)
            })?;

        let record = normalize(&storage_key(symbol), &fields)?;

        let outcome = self.repository.save(market, &record).await?;
        info!(
            "{} {} in {}: {}",
            record.symbol,
            provider_symbol,
            market.table_name(),
            outcome
        );

        Ok(IngestionResult { record, outcome })
    }

    fn get_record(&self, market: Market, symbol: &str) -> Result<Option<FundamentalRecord>> {
        self.repository.get(market, &storage_key(symbol))
    }

    fn count_records(&self, market: Market) -> Result<i64> {
        self.repository.count(market)
    }
}
