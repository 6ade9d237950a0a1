//! Per-market table definitions.
//!
//! Table names come from [`Market::table_name`], never from user input. The
//! column list below mirrors the declarations in `crate::schema`.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use fundlens_core::Market;
use log::debug;

use crate::errors::StorageError;

/// `(column, SQL type)` pairs shared by every market table.
pub const FUNDAMENTAL_COLUMNS: &[(&str, &str)] = &[
    ("symbol", "TEXT NOT NULL PRIMARY KEY"),
    ("shortName", "TEXT"),
    ("sector", "TEXT"),
    ("industry", "TEXT"),
    ("country", "TEXT"),
    ("currency", "TEXT"),
    ("exchange", "TEXT"),
    ("marketCap", "BIGINT"),
    ("trailingPE", "DOUBLE"),
    ("forwardPE", "DOUBLE"),
    ("priceToBook", "DOUBLE"),
    ("priceToSales", "DOUBLE"),
    ("enterpriseToRevenue", "DOUBLE"),
    ("enterpriseToEbitda", "DOUBLE"),
    ("pegRatio", "DOUBLE"),
    ("debtToEquity", "DOUBLE"),
    ("currentRatio", "DOUBLE"),
    ("quickRatio", "DOUBLE"),
    ("totalCash", "BIGINT"),
    ("totalDebt", "BIGINT"),
    ("returnOnEquity", "DOUBLE"),
    ("returnOnAssets", "DOUBLE"),
    ("profitMargins", "DOUBLE"),
    ("operatingMargins", "DOUBLE"),
    ("grossMargins", "DOUBLE"),
    ("revenueGrowth", "DOUBLE"),
    ("earningsGrowth", "DOUBLE"),
    ("totalRevenue", "BIGINT"),
    ("netIncomeToCommon", "BIGINT"),
    ("bookValue", "DOUBLE"),
    ("fiftyTwoWeekHigh", "DOUBLE"),
    ("fiftyTwoWeekLow", "DOUBLE"),
    ("sharesOutstanding", "BIGINT"),
    ("averageVolume", "BIGINT"),
    ("dividendYield", "DOUBLE"),
    ("payoutRatio", "DOUBLE"),
    ("dividendRate", "DOUBLE"),
    ("exDividendDate", "TEXT"),
    ("beta", "DOUBLE"),
    ("lastUpdate", "TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP"),
];

/// Runs `$body` with `$t` bound to the schema module of `$market`'s table.
macro_rules! with_market_table {
    ($market:expr, |$t:ident| $body:expr) => {
        match $market {
            fundlens_core::Market::DomesticEquity => {
                use $crate::schema::fundamental_data_tw as $t;
                $body
            }
            fundlens_core::Market::ForeignEquity => {
                use $crate::schema::fundamental_data_us as $t;
                $body
            }
            fundlens_core::Market::Otc => {
                use $crate::schema::fundamental_data_two as $t;
                $body
            }
            fundlens_core::Market::Etf => {
                use $crate::schema::fundamental_data_etf as $t;
                $body
            }
            fundlens_core::Market::Index => {
                use $crate::schema::fundamental_data_index as $t;
                $body
            }
            fundlens_core::Market::Crypto => {
                use $crate::schema::fundamental_data_crypto as $t;
                $body
            }
            fundlens_core::Market::Forex => {
                use $crate::schema::fundamental_data_forex as $t;
                $body
            }
            fundlens_core::Market::Futures => {
                use $crate::schema::fundamental_data_futures as $t;
                $body
            }
        }
    };
}

pub(crate) use with_market_table;

/// `CREATE TABLE IF NOT EXISTS` statement for the market's table.
pub fn create_table_sql(market: Market) -> String {
    let columns = FUNDAMENTAL_COLUMNS
        .iter()
        .map(|(name, sql_type)| format!("    \"{}\" {}", name, sql_type))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "CREATE TABLE IF NOT EXISTS \"{}\" (\n{}\n)",
        market.table_name(),
        columns
    )
}

#[derive(QueryableByName)]
struct ColumnInfo {
    #[diesel(sql_type = Text)]
    name: String,
}

#[derive(QueryableByName)]
struct TableCount {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

pub fn table_exists(conn: &mut SqliteConnection, market: Market) -> Result<bool, StorageError> {
    let found = diesel::sql_query(
        "SELECT COUNT(*) AS count FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind::<Text, _>(market.table_name())
    .get_result::<TableCount>(conn)?;
    Ok(found.count > 0)
}

/// Creates the market's table if needed and checks its columns.
///
/// A concurrent creator winning the race is not an error.
pub fn ensure_table(conn: &mut SqliteConnection, market: Market) -> Result<(), StorageError> {
    match diesel::sql_query(create_table_sql(market)).execute(conn) {
        Ok(_) => {}
        Err(DieselError::DatabaseError(DatabaseErrorKind::Unknown, info))
            if info.message().contains("already exists") =>
        {
            debug!("{} was created concurrently", market.table_name());
        }
        Err(e) => return Err(e.into()),
    }

    verify_columns(conn, market)
}

fn verify_columns(conn: &mut SqliteConnection, market: Market) -> Result<(), StorageError> {
    let present: Vec<String> = diesel::sql_query("SELECT name FROM pragma_table_info(?)")
        .bind::<Text, _>(market.table_name())
        .load::<ColumnInfo>(conn)?
        .into_iter()
        .map(|c| c.name)
        .collect();

    let missing: Vec<String> = FUNDAMENTAL_COLUMNS
        .iter()
        .filter(|(name, _)| !present.iter().any(|p| p.eq_ignore_ascii_case(name)))
        .map(|(name, _)| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(StorageError::SchemaMismatch {
            table: market.table_name().to_string(),
            missing,
        })
    }
}
