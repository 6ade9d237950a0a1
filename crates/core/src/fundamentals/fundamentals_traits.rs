use crate::errors::Result;
use crate::fundamentals::fundamentals_model::{FundamentalRecord, IngestionResult, InsertOutcome};
use async_trait::async_trait;
use fundlens_market_data::Market;

/// Trait for fundamentals repository operations.
///
/// Each market owns one table. Implementations must make `ensure_table` and
/// `save` safe to call concurrently: a racing table creation counts as
/// success and a racing duplicate insert reports `AlreadyPresent`.
#[async_trait]
pub trait FundamentalRepositoryTrait: Send + Sync {
    /// Creates the market's table if it does not exist yet.
    fn ensure_table(&self, market: Market) -> Result<()>;

    /// Inserts `record` unless a row with the same symbol exists.
    /// Never updates an existing row.
    async fn save(&self, market: Market, record: &FundamentalRecord) -> Result<InsertOutcome>;

    /// Loads the stored record for `symbol`, if any.
    fn get(&self, market: Market, symbol: &str) -> Result<Option<FundamentalRecord>>;

    /// Number of stored symbols for the market. Does not create the table.
    fn count(&self, market: Market) -> Result<i64>;
}

/// Trait for fundamentals service operations
#[async_trait]
pub trait FundamentalServiceTrait: Send + Sync {
    async fn fetch_and_store(&self, symbol: &str, market: Market) -> Result<FundamentalRecord>;
    async fn fetch_and_store_with_outcome(
        &self,
        symbol: &str,
        market: Market,
    ) -> Result<IngestionResult>;
    fn get_record(&self, market: Market, symbol: &str) -> Result<Option<FundamentalRecord>>;
    fn count_records(&self, market: Market) -> Result<i64>;
}
