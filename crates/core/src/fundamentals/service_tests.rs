//! Tests for FundamentalService contracts and edge cases.
//!
//! # Contract Points
//!
//! 1. Resolution: the provider only ever sees the resolved symbol
//! 2. Idempotence: a second ingestion of the same key writes nothing
//! 3. Failures: provider and normalization errors never reach the repository
//! 4. Markets: the same ticker in two markets lands in two tables

#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result};
    use crate::fundamentals::{
        FundamentalRecord, FundamentalRepositoryTrait, FundamentalService,
        FundamentalServiceTrait, InsertOutcome,
    };
    use async_trait::async_trait;
    use fundlens_market_data::{
        FundamentalsProvider, Market, MarketDataError, MarketSymbolResolver, ProviderFields,
    };
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mock provider
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockProvider {
        responses: Arc<Mutex<HashMap<String, ProviderFields>>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self::default()
        }

        fn with_response(self, symbol: &str, fields: ProviderFields) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(symbol.to_string(), fields);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FundamentalsProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn get_fundamentals(
            &self,
            symbol: &str,
        ) -> std::result::Result<ProviderFields, MarketDataError> {
            self.calls.lock().unwrap().push(symbol.to_string());
            self.responses
                .lock()
                .unwrap()
                .get(symbol)
                .cloned()
                .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
        }
    }

    // =========================================================================
    // Mock repository
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockFundamentalRepository {
        rows: Arc<Mutex<HashMap<(Market, String), FundamentalRecord>>>,
        save_calls: Arc<Mutex<usize>>,
        fail_on_save: Arc<Mutex<bool>>,
    }

    impl MockFundamentalRepository {
        fn new() -> Self {
            Self::default()
        }

        fn set_fail_on_save(&self, fail: bool) {
            *self.fail_on_save.lock().unwrap() = fail;
        }

        fn save_calls(&self) -> usize {
            *self.save_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl FundamentalRepositoryTrait for MockFundamentalRepository {
        fn ensure_table(&self, _market: Market) -> Result<()> {
            Ok(())
        }

        async fn save(&self, market: Market, record: &FundamentalRecord) -> Result<InsertOutcome> {
            *self.save_calls.lock().unwrap() += 1;
            if *self.fail_on_save.lock().unwrap() {
                return Err(DatabaseError::ConnectionFailed("database is locked".into()).into());
            }
            let mut rows = self.rows.lock().unwrap();
            let key = (market, record.symbol.clone());
            if rows.contains_key(&key) {
                return Ok(InsertOutcome::AlreadyPresent);
            }
            rows.insert(key, record.clone());
            Ok(InsertOutcome::Inserted)
        }

        fn get(&self, market: Market, symbol: &str) -> Result<Option<FundamentalRecord>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .get(&(market, symbol.to_string()))
                .cloned())
        }

        fn count(&self, market: Market) -> Result<i64> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .keys()
                .filter(|(m, _)| *m == market)
                .count() as i64)
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn tsmc_fields() -> ProviderFields {
        ProviderFields::new()
            .with("shortName", "TAIWAN SEMICONDUCTOR MANUFACTUR")
            .with("currency", "TWD")
            .with("marketCap", 25_000_000_000_000_i64)
            .with("trailingPE", 24.5)
    }

    fn create_service(
        provider: MockProvider,
        repository: MockFundamentalRepository,
    ) -> FundamentalService {
        FundamentalService::new(
            Arc::new(MarketSymbolResolver::new()),
            Arc::new(provider),
            Arc::new(repository),
        )
    }

    // =========================================================================
    // Tests
    // =========================================================================

    #[tokio::test]
    async fn test_fetch_and_store_resolves_before_lookup() {
        let provider = MockProvider::new().with_response("2330.TW", tsmc_fields());
        let repository = MockFundamentalRepository::new();
        let service = create_service(provider.clone(), repository.clone());

        let result = service
            .fetch_and_store_with_outcome("2330", Market::DomesticEquity)
            .await
            .unwrap();

        assert_eq!(provider.calls(), vec!["2330.TW".to_string()]);
        assert_eq!(result.outcome, InsertOutcome::Inserted);
        assert_eq!(result.record.symbol, "2330");
        assert_eq!(result.record.market_cap, Some(25_000_000_000_000));
        assert_eq!(repository.count(Market::DomesticEquity).unwrap(), 1);
    }

    #[tokio::test]
    async fn test_fetch_and_store_is_idempotent() {
        let provider = MockProvider::new().with_response("2330.TW", tsmc_fields());
        let repository = MockFundamentalRepository::new();
        let service = create_service(provider, repository.clone());

        let first = service
            .fetch_and_store_with_outcome("2330", Market::DomesticEquity)
            .await
            .unwrap();
        let second = service
            .fetch_and_store_with_outcome("2330", Market::DomesticEquity)
            .await
            .unwrap();

        assert_eq!(first.outcome, InsertOutcome::Inserted);
        assert_eq!(second.outcome, InsertOutcome::AlreadyPresent);
        assert_eq!(first.record, second.record);
        assert_eq!(repository.save_calls(), 2);
        assert_eq!(repository.count(Market::DomesticEquity).unwrap(), 1);
    }

    #[tokio::test]
    async fn test_crypto_symbol_gets_quote_suffix() {
        let provider = MockProvider::new().with_response(
            "BTC-USD",
            ProviderFields::new().with("shortName", "Bitcoin USD"),
        );
        let service = create_service(provider.clone(), MockFundamentalRepository::new());

        let record = service.fetch_and_store("BTC", Market::Crypto).await.unwrap();

        assert_eq!(provider.calls(), vec!["BTC-USD".to_string()]);
        assert_eq!(record.symbol, "BTC");
        assert_eq!(record.market_cap, None);
    }

    #[tokio::test]
    async fn test_unknown_symbol_never_reaches_repository() {
        let repository = MockFundamentalRepository::new();
        let service = create_service(MockProvider::new(), repository.clone());

        let err = service
            .fetch_and_store("ZZZZ", Market::ForeignEquity)
            .await
            .unwrap_err();

        assert!(err.is_symbol_not_found());
        assert_eq!(repository.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_normalization_failure_never_reaches_repository() {
        let provider = MockProvider::new()
            .with_response("NONAME", ProviderFields::new().with("marketCap", 1000));
        let repository = MockFundamentalRepository::new();
        let service = create_service(provider, repository.clone());

        let err = service
            .fetch_and_store("NONAME", Market::ForeignEquity)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Normalization(_)));
        assert_eq!(repository.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_symbol_is_a_resolution_error() {
        let provider = MockProvider::new();
        let service = create_service(provider.clone(), MockFundamentalRepository::new());

        let err = service
            .fetch_and_store("   ", Market::DomesticEquity)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Resolution(_)));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let provider = MockProvider::new().with_response("2330.TW", tsmc_fields());
        let repository = MockFundamentalRepository::new();
        repository.set_fail_on_save(true);
        let service = create_service(provider, repository.clone());

        let err = service
            .fetch_and_store("2330", Market::DomesticEquity)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Database(DatabaseError::ConnectionFailed(_))));
        assert_eq!(repository.save_calls(), 1);
    }

    #[tokio::test]
    async fn test_same_ticker_in_two_markets_is_independent() {
        let provider = MockProvider::new()
            .with_response("X.TW", ProviderFields::new().with("shortName", "X Domestic"))
            .with_response("X-USD", ProviderFields::new().with("shortName", "X Coin"));
        let repository = MockFundamentalRepository::new();
        let service = create_service(provider, repository.clone());

        let domestic = service
            .fetch_and_store_with_outcome("X", Market::DomesticEquity)
            .await
            .unwrap();
        let crypto = service
            .fetch_and_store_with_outcome("X", Market::Crypto)
            .await
            .unwrap();

        assert_eq!(domestic.outcome, InsertOutcome::Inserted);
        assert_eq!(crypto.outcome, InsertOutcome::Inserted);
        assert_eq!(service.count_records(Market::DomesticEquity).unwrap(), 1);
        assert_eq!(service.count_records(Market::Crypto).unwrap(), 1);

        let stored = service.get_record(Market::Crypto, "x").unwrap().unwrap();
        assert_eq!(stored.short_name.as_deref(), Some("X Coin"));
    }

    #[tokio::test]
    async fn test_ticker_case_shares_one_row() {
        let provider = MockProvider::new()
            .with_response("AAPL", ProviderFields::new().with("shortName", "Apple Inc."));
        let repository = MockFundamentalRepository::new();
        let service = create_service(provider, repository.clone());

        let first = service
            .fetch_and_store_with_outcome("aapl", Market::ForeignEquity)
            .await
            .unwrap();
        let second = service
            .fetch_and_store_with_outcome(" AAPL ", Market::ForeignEquity)
            .await
            .unwrap();

        assert_eq!(first.record.symbol, "AAPL");
        assert_eq!(second.outcome, InsertOutcome::AlreadyPresent);
        assert_eq!(repository.count(Market::ForeignEquity).unwrap(), 1);
    }
}
