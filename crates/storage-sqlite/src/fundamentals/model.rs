//! Database models for fundamentals.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use fundlens_core::fundamentals::FundamentalRecord;

/// One row of any `fundamental_data_*` table.
///
/// Fields are loaded positionally and must follow the column order of the
/// tables in `crate::schema`.
#[derive(Queryable, PartialEq, Debug, Clone)]
pub struct FundamentalRowDB {
    pub symbol: String,
    pub short_name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub exchange: Option<String>,
    pub market_cap: Option<i64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    pub price_to_book: Option<f64>,
    pub price_to_sales: Option<f64>,
    pub enterprise_to_revenue: Option<f64>,
    pub enterprise_to_ebitda: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub current_ratio: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub total_cash: Option<i64>,
    pub total_debt: Option<i64>,
    pub return_on_equity: Option<f64>,
    pub return_on_assets: Option<f64>,
    pub profit_margins: Option<f64>,
    pub operating_margins: Option<f64>,
    pub gross_margins: Option<f64>,
    pub revenue_growth: Option<f64>,
    pub earnings_growth: Option<f64>,
    pub total_revenue: Option<i64>,
    pub net_income_to_common: Option<i64>,
    pub book_value: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub shares_outstanding: Option<i64>,
    pub average_volume: Option<i64>,
    pub dividend_yield: Option<f64>,
    pub payout_ratio: Option<f64>,
    pub dividend_rate: Option<f64>,
    pub ex_dividend_date: Option<String>,
    pub beta: Option<f64>,
    pub last_update: NaiveDateTime,
}

impl From<FundamentalRowDB> for FundamentalRecord {
    fn from(db: FundamentalRowDB) -> Self {
        Self {
            symbol: db.symbol,
            short_name: db.short_name,
            sector: db.sector,
            industry: db.industry,
            country: db.country,
            currency: db.currency,
            exchange: db.exchange,
            market_cap: db.market_cap,
            trailing_pe: db.trailing_pe,
            forward_pe: db.forward_pe,
            price_to_book: db.price_to_book,
            price_to_sales: db.price_to_sales,
            enterprise_to_revenue: db.enterprise_to_revenue,
            enterprise_to_ebitda: db.enterprise_to_ebitda,
            peg_ratio: db.peg_ratio,
            debt_to_equity: db.debt_to_equity,
            current_ratio: db.current_ratio,
            quick_ratio: db.quick_ratio,
            total_cash: db.total_cash,
            total_debt: db.total_debt,
            return_on_equity: db.return_on_equity,
            return_on_assets: db.return_on_assets,
            profit_margins: db.profit_margins,
            operating_margins: db.operating_margins,
            gross_margins: db.gross_margins,
            revenue_growth: db.revenue_growth,
            earnings_growth: db.earnings_growth,
            total_revenue: db.total_revenue,
            net_income_to_common: db.net_income_to_common,
            book_value: db.book_value,
            fifty_two_week_high: db.fifty_two_week_high,
            fifty_two_week_low: db.fifty_two_week_low,
            shares_outstanding: db.shares_outstanding,
            average_volume: db.average_volume,
            dividend_yield: db.dividend_yield,
            payout_ratio: db.payout_ratio,
            dividend_rate: db.dividend_rate,
            ex_dividend_date: db.ex_dividend_date,
            beta: db.beta,
            last_update: Some(db.last_update),
        }
    }
}
