use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use fundlens_core::errors::{Error, Result};
use fundlens_core::fundamentals::{FundamentalRecord, FundamentalRepositoryTrait, InsertOutcome};
use fundlens_core::Market;

use super::model::FundamentalRowDB;
use super::table::{self, with_market_table};
use crate::db::{get_connection, DbPool};
use crate::errors::{IntoCore, StorageError};

/// SQLite repository for per-market fundamentals tables.
///
/// Every operation borrows a pooled connection for its own duration. Writes
/// run inside an immediate transaction so the existence check and the insert
/// cannot interleave with another writer.
pub struct FundamentalRepository {
    pool: Arc<DbPool>,
}

impl FundamentalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        FundamentalRepository { pool }
    }

    fn save_impl(pool: &DbPool, market: Market, record: &FundamentalRecord) -> Result<InsertOutcome> {
        let mut conn = get_connection(pool)?;
        table::ensure_table(&mut conn, market).into_core()?;

        let result = conn.immediate_transaction::<_, StorageError, _>(|conn| {
            if symbol_exists(conn, market, &record.symbol)? {
                return Ok(InsertOutcome::AlreadyPresent);
            }
            insert_row(conn, market, record)?;
            Ok(InsertOutcome::Inserted)
        });

        match result {
            Ok(outcome) => Ok(outcome),
            Err(e) if e.is_unique_violation() => {
                debug!(
                    "{} was inserted concurrently into {}",
                    record.symbol,
                    market.table_name()
                );
                Ok(InsertOutcome::AlreadyPresent)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn symbol_exists(
    conn: &mut SqliteConnection,
    market: Market,
    key: &str,
) -> std::result::Result<bool, StorageError> {
    let found = with_market_table!(market, |t| {
        diesel::select(exists(t::table.filter(t::symbol.eq(key)))).get_result::<bool>(conn)
    })?;
    Ok(found)
}

fn insert_row(
    conn: &mut SqliteConnection,
    market: Market,
    r: &FundamentalRecord,
) -> std::result::Result<usize, StorageError> {
    let inserted = with_market_table!(market, |t| {
        diesel::insert_into(t::table)
            .values((
                t::symbol.eq(&r.symbol),
                t::short_name.eq(&r.short_name),
                t::sector.eq(&r.sector),
                t::industry.eq(&r.industry),
                t::country.eq(&r.country),
                t::currency.eq(&r.currency),
                t::exchange.eq(&r.exchange),
                t::market_cap.eq(r.market_cap),
                t::trailing_pe.eq(r.trailing_pe),
                t::forward_pe.eq(r.forward_pe),
                t::price_to_book.eq(r.price_to_book),
                t::price_to_sales.eq(r.price_to_sales),
                t::enterprise_to_revenue.eq(r.enterprise_to_revenue),
                t::enterprise_to_ebitda.eq(r.enterprise_to_ebitda),
                t::peg_ratio.eq(r.peg_ratio),
                t::debt_to_equity.eq(r.debt_to_equity),
                t::current_ratio.eq(r.current_ratio),
                t::quick_ratio.eq(r.quick_ratio),
                t::total_cash.eq(r.total_cash),
                t::total_debt.eq(r.total_debt),
                t::return_on_equity.eq(r.return_on_equity),
                t::return_on_assets.eq(r.return_on_assets),
                t::profit_margins.eq(r.profit_margins),
                t::operating_margins.eq(r.operating_margins),
                t::gross_margins.eq(r.gross_margins),
                t::revenue_growth.eq(r.revenue_growth),
                t::earnings_growth.eq(r.earnings_growth),
                t::total_revenue.eq(r.total_revenue),
                t::net_income_to_common.eq(r.net_income_to_common),
                t::book_value.eq(r.book_value),
                t::fifty_two_week_high.eq(r.fifty_two_week_high),
                t::fifty_two_week_low.eq(r.fifty_two_week_low),
                t::shares_outstanding.eq(r.shares_outstanding),
                t::average_volume.eq(r.average_volume),
                t::dividend_yield.eq(r.dividend_yield),
                t::payout_ratio.eq(r.payout_ratio),
                t::dividend_rate.eq(r.dividend_rate),
                t::ex_dividend_date.eq(&r.ex_dividend_date),
                t::beta.eq(r.beta),
            ))
            .execute(conn)
    })?;
    Ok(inserted)
}

#[async_trait]
impl FundamentalRepositoryTrait for FundamentalRepository {
    fn ensure_table(&self, market: Market) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        table::ensure_table(&mut conn, market).into_core()
    }

    async fn save(&self, market: Market, record: &FundamentalRecord) -> Result<InsertOutcome> {
        let pool = Arc::clone(&self.pool);
        let record = record.clone();
        tokio::task::spawn_blocking(move || Self::save_impl(&pool, market, &record))
            .await
            .map_err(|e| Error::Unexpected(format!("Storage task failed: {}", e)))?
    }

    fn get(&self, market: Market, symbol: &str) -> Result<Option<FundamentalRecord>> {
        let mut conn = get_connection(&self.pool)?;
        if !table::table_exists(&mut conn, market).into_core()? {
            return Ok(None);
        }

        let row = with_market_table!(market, |t| {
            t::table
                .filter(t::symbol.eq(symbol))
                .first::<FundamentalRowDB>(&mut conn)
                .optional()
        })
        .into_core()?;

        Ok(row.map(FundamentalRecord::from))
    }

    fn count(&self, market: Market) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        if !table::table_exists(&mut conn, market).into_core()? {
            return Ok(0);
        }

        with_market_table!(market, |t| t::table.count().get_result::<i64>(&mut conn)).into_core()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, init};
    use fundlens_core::errors::DatabaseError;
    use tempfile::tempdir;

    fn create_test_repository() -> (FundamentalRepository, tempfile::TempDir) {
        let dir = tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("test.db");
        let db_path = init(db_path.to_str().unwrap()).expect("Failed to init database");
        let pool = create_pool(&db_path).expect("Failed to create pool");
        (FundamentalRepository::new(pool), dir)
    }

    fn tsmc() -> FundamentalRecord {
        let mut record = FundamentalRecord::new("2330");
        record.short_name = Some("TAIWAN SEMICONDUCTOR MANUFACTUR".to_string());
        record.currency = Some("TWD".to_string());
        record.market_cap = Some(25_000_000_000_000);
        record.trailing_pe = Some(24.5);
        record.ex_dividend_date = Some("2024-06-13".to_string());
        record
    }

    #[tokio::test]
    async fn test_save_inserts_then_skips() {
        let (repo, _dir) = create_test_repository();

        let first = repo.save(Market::DomesticEquity, &tsmc()).await.unwrap();
        assert_eq!(first, InsertOutcome::Inserted);

        let mut changed = tsmc();
        changed.market_cap = Some(1);
        let second = repo.save(Market::DomesticEquity, &changed).await.unwrap();
        assert_eq!(second, InsertOutcome::AlreadyPresent);

        assert_eq!(repo.count(Market::DomesticEquity).unwrap(), 1);
        let stored = repo.get(Market::DomesticEquity, "2330").unwrap().unwrap();
        assert_eq!(stored.market_cap, Some(25_000_000_000_000));
    }

    #[tokio::test]
    async fn test_get_round_trips_fields_and_sets_last_update() {
        let (repo, _dir) = create_test_repository();
        let record = tsmc();
        repo.save(Market::DomesticEquity, &record).await.unwrap();

        let stored = repo.get(Market::DomesticEquity, "2330").unwrap().unwrap();
        assert!(stored.last_update.is_some());
        assert!(stored.same_fundamentals(&record));
    }

    #[tokio::test]
    async fn test_missing_fields_are_stored_as_null() {
        let (repo, _dir) = create_test_repository();
        let mut record = FundamentalRecord::new("BTC");
        record.short_name = Some("Bitcoin USD".to_string());
        repo.save(Market::Crypto, &record).await.unwrap();

        #[derive(QueryableByName)]
        struct NullCount {
            #[diesel(sql_type = diesel::sql_types::BigInt)]
            nulls: i64,
        }

        let mut conn = get_connection(&repo.pool).unwrap();
        let counted = diesel::sql_query(
            "SELECT COUNT(*) AS nulls FROM fundamental_data_crypto \
             WHERE symbol = 'BTC' AND marketCap IS NULL AND trailingPE IS NULL \
             AND sector IS NULL AND exDividendDate IS NULL",
        )
        .get_result::<NullCount>(&mut conn)
        .unwrap();
        assert_eq!(counted.nulls, 1);
    }

    #[test]
    fn test_read_side_does_not_create_tables() {
        let (repo, _dir) = create_test_repository();

        assert_eq!(repo.count(Market::Futures).unwrap(), 0);
        assert!(repo.get(Market::Futures, "ES").unwrap().is_none());

        let mut conn = get_connection(&repo.pool).unwrap();
        assert!(!table::table_exists(&mut conn, Market::Futures).unwrap());
    }

    #[tokio::test]
    async fn test_ensure_table_keeps_rows() {
        let (repo, _dir) = create_test_repository();
        repo.save(Market::Etf, &FundamentalRecord::new("0050")).await.unwrap();

        for _ in 0..3 {
            repo.ensure_table(Market::Etf).unwrap();
        }
        assert_eq!(repo.count(Market::Etf).unwrap(), 1);
    }

    #[tokio::test]
    async fn test_markets_are_isolated() {
        let (repo, _dir) = create_test_repository();
        let record = FundamentalRecord::new("X");

        assert_eq!(
            repo.save(Market::DomesticEquity, &record).await.unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(
            repo.save(Market::Crypto, &record).await.unwrap(),
            InsertOutcome::Inserted
        );
        assert_eq!(repo.count(Market::DomesticEquity).unwrap(), 1);
        assert_eq!(repo.count(Market::Crypto).unwrap(), 1);
        assert_eq!(repo.count(Market::ForeignEquity).unwrap(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_saves_insert_once() {
        let (repo, _dir) = create_test_repository();
        let repo = Arc::new(repo);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.save(Market::Index, &FundamentalRecord::new("^TWII")).await })
            })
            .collect();

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap().is_inserted() {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
        assert_eq!(repo.count(Market::Index).unwrap(), 1);
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_reported() {
        let (repo, _dir) = create_test_repository();
        {
            let mut conn = get_connection(&repo.pool).unwrap();
            diesel::sql_query("CREATE TABLE fundamental_data_forex (symbol TEXT PRIMARY KEY)")
                .execute(&mut conn)
                .unwrap();
        }

        let err = repo
            .save(Market::Forex, &FundamentalRecord::new("EURUSD"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::SchemaMismatch(_))
        ));
    }
}
