//! Diesel schemas for the per-market fundamentals tables.
//!
//! All eight tables share one column layout. They are created at runtime by
//! `fundamentals::table::create_table_sql`, which must stay in sync with the
//! declarations below.

diesel::table! {
    fundamental_data_tw (symbol) {
        symbol -> Text,
        #[sql_name = "shortName"]
        short_name -> Nullable<Text>,
        sector -> Nullable<Text>,
        industry -> Nullable<Text>,
        country -> Nullable<Text>,
        currency -> Nullable<Text>,
        exchange -> Nullable<Text>,
        #[sql_name = "marketCap"]
        market_cap -> Nullable<BigInt>,
        #[sql_name = "trailingPE"]
        trailing_pe -> Nullable<Double>,
        #[sql_name = "forwardPE"]
        forward_pe -> Nullable<Double>,
        #[sql_name = "priceToBook"]
        price_to_book -> Nullable<Double>,
        #[sql_name = "priceToSales"]
        price_to_sales -> Nullable<Double>,
        #[sql_name = "enterpriseToRevenue"]
        enterprise_to_revenue -> Nullable<Double>,
        #[sql_name = "enterpriseToEbitda"]
        enterprise_to_ebitda -> Nullable<Double>,
        #[sql_name = "pegRatio"]
        peg_ratio -> Nullable<Double>,
        #[sql_name = "debtToEquity"]
        debt_to_equity -> Nullable<Double>,
        #[sql_name = "currentRatio"]
        current_ratio -> Nullable<Double>,
        #[sql_name = "quickRatio"]
        quick_ratio -> Nullable<Double>,
        #[sql_name = "totalCash"]
        total_cash -> Nullable<BigInt>,
        #[sql_name = "totalDebt"]
        total_debt -> Nullable<BigInt>,
        #[sql_name = "returnOnEquity"]
        return_on_equity -> Nullable<Double>,
        #[sql_name = "returnOnAssets"]
        return_on_assets -> Nullable<Double>,
        #[sql_name = "profitMargins"]
        profit_margins -> Nullable<Double>,
        #[sql_name = "operatingMargins"]
        operating_margins -> Nullable<Double>,
        #[sql_name = "grossMargins"]
        gross_margins -> Nullable<Double>,
        #[sql_name = "revenueGrowth"]
        revenue_growth -> Nullable<Double>,
        #[sql_name = "earningsGrowth"]
        earnings_growth -> Nullable<Double>,
        #[sql_name = "totalRevenue"]
        total_revenue -> Nullable<BigInt>,
        #[sql_name = "netIncomeToCommon"]
        net_income_to_common -> Nullable<BigInt>,
        #[sql_name = "bookValue"]
        book_value -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekHigh"]
        fifty_two_week_high -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekLow"]
        fifty_two_week_low -> Nullable<Double>,
        #[sql_name = "sharesOutstanding"]
        shares_outstanding -> Nullable<BigInt>,
        #[sql_name = "averageVolume"]
        average_volume -> Nullable<BigInt>,
        #[sql_name = "dividendYield"]
        dividend_yield -> Nullable<Double>,
        #[sql_name = "payoutRatio"]
        payout_ratio -> Nullable<Double>,
        #[sql_name = "dividendRate"]
        dividend_rate -> Nullable<Double>,
        #[sql_name = "exDividendDate"]
        ex_dividend_date -> Nullable<Text>,
        beta -> Nullable<Double>,
        #[sql_name = "lastUpdate"]
        last_update -> Timestamp,
    }
}

diesel::table! {
    fundamental_data_us (symbol) {
        symbol -> Text,
        #[sql_name = "shortName"]
        short_name -> Nullable<Text>,
        sector -> Nullable<Text>,
        industry -> Nullable<Text>,
        country -> Nullable<Text>,
        currency -> Nullable<Text>,
        exchange -> Nullable<Text>,
        #[sql_name = "marketCap"]
        market_cap -> Nullable<BigInt>,
        #[sql_name = "trailingPE"]
        trailing_pe -> Nullable<Double>,
        #[sql_name = "forwardPE"]
        forward_pe -> Nullable<Double>,
        #[sql_name = "priceToBook"]
        price_to_book -> Nullable<Double>,
        #[sql_name = "priceToSales"]
        price_to_sales -> Nullable<Double>,
        #[sql_name = "enterpriseToRevenue"]
        enterprise_to_revenue -> Nullable<Double>,
        #[sql_name = "enterpriseToEbitda"]
        enterprise_to_ebitda -> Nullable<Double>,
        #[sql_name = "pegRatio"]
        peg_ratio -> Nullable<Double>,
        #[sql_name = "debtToEquity"]
        debt_to_equity -> Nullable<Double>,
        #[sql_name = "currentRatio"]
        current_ratio -> Nullable<Double>,
        #[sql_name = "quickRatio"]
        quick_ratio -> Nullable<Double>,
        #[sql_name = "totalCash"]
        total_cash -> Nullable<BigInt>,
        #[sql_name = "totalDebt"]
        total_debt -> Nullable<BigInt>,
        #[sql_name = "returnOnEquity"]
        return_on_equity -> Nullable<Double>,
        #[sql_name = "returnOnAssets"]
        return_on_assets -> Nullable<Double>,
        #[sql_name = "profitMargins"]
        profit_margins -> Nullable<Double>,
        #[sql_name = "operatingMargins"]
        operating_margins -> Nullable<Double>,
        #[sql_name = "grossMargins"]
        gross_margins -> Nullable<Double>,
        #[sql_name = "revenueGrowth"]
        revenue_growth -> Nullable<Double>,
        #[sql_name = "earningsGrowth"]
        earnings_growth -> Nullable<Double>,
        #[sql_name = "totalRevenue"]
        total_revenue -> Nullable<BigInt>,
        #[sql_name = "netIncomeToCommon"]
        net_income_to_common -> Nullable<BigInt>,
        #[sql_name = "bookValue"]
        book_value -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekHigh"]
        fifty_two_week_high -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekLow"]
        fifty_two_week_low -> Nullable<Double>,
        #[sql_name = "sharesOutstanding"]
        shares_outstanding -> Nullable<BigInt>,
        #[sql_name = "averageVolume"]
        average_volume -> Nullable<BigInt>,
        #[sql_name = "dividendYield"]
        dividend_yield -> Nullable<Double>,
        #[sql_name = "payoutRatio"]
        payout_ratio -> Nullable<Double>,
        #[sql_name = "dividendRate"]
        dividend_rate -> Nullable<Double>,
        #[sql_name = "exDividendDate"]
        ex_dividend_date -> Nullable<Text>,
        beta -> Nullable<Double>,
        #[sql_name = "lastUpdate"]
        last_update -> Timestamp,
    }
}

diesel::table! {
    fundamental_data_two (symbol) {
        symbol -> Text,
        #[sql_name = "shortName"]
        short_name -> Nullable<Text>,
        sector -> Nullable<Text>,
        industry -> Nullable<Text>,
        country -> Nullable<Text>,
        currency -> Nullable<Text>,
        exchange -> Nullable<Text>,
        #[sql_name = "marketCap"]
        market_cap -> Nullable<BigInt>,
        #[sql_name = "trailingPE"]
        trailing_pe -> Nullable<Double>,
        #[sql_name = "forwardPE"]
        forward_pe -> Nullable<Double>,
        #[sql_name = "priceToBook"]
        price_to_book -> Nullable<Double>,
        #[sql_name = "priceToSales"]
        price_to_sales -> Nullable<Double>,
        #[sql_name = "enterpriseToRevenue"]
        enterprise_to_revenue -> Nullable<Double>,
        #[sql_name = "enterpriseToEbitda"]
        enterprise_to_ebitda -> Nullable<Double>,
        #[sql_name = "pegRatio"]
        peg_ratio -> Nullable<Double>,
        #[sql_name = "debtToEquity"]
        debt_to_equity -> Nullable<Double>,
        #[sql_name = "currentRatio"]
        current_ratio -> Nullable<Double>,
        #[sql_name = "quickRatio"]
        quick_ratio -> Nullable<Double>,
        #[sql_name = "totalCash"]
        total_cash -> Nullable<BigInt>,
        #[sql_name = "totalDebt"]
        total_debt -> Nullable<BigInt>,
        #[sql_name = "returnOnEquity"]
        return_on_equity -> Nullable<Double>,
        #[sql_name = "returnOnAssets"]
        return_on_assets -> Nullable<Double>,
        #[sql_name = "profitMargins"]
        profit_margins -> Nullable<Double>,
        #[sql_name = "operatingMargins"]
        operating_margins -> Nullable<Double>,
        #[sql_name = "grossMargins"]
        gross_margins -> Nullable<Double>,
        #[sql_name = "revenueGrowth"]
        revenue_growth -> Nullable<Double>,
        #[sql_name = "earningsGrowth"]
        earnings_growth -> Nullable<Double>,
        #[sql_name = "totalRevenue"]
        total_revenue -> Nullable<BigInt>,
        #[sql_name = "netIncomeToCommon"]
        net_income_to_common -> Nullable<BigInt>,
        #[sql_name = "bookValue"]
        book_value -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekHigh"]
        fifty_two_week_high -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekLow"]
        fifty_two_week_low -> Nullable<Double>,
        #[sql_name = "sharesOutstanding"]
        shares_outstanding -> Nullable<BigInt>,
        #[sql_name = "averageVolume"]
        average_volume -> Nullable<BigInt>,
        #[sql_name = "dividendYield"]
        dividend_yield -> Nullable<Double>,
        #[sql_name = "payoutRatio"]
        payout_ratio -> Nullable<Double>,
        #[sql_name = "dividendRate"]
        dividend_rate -> Nullable<Double>,
        #[sql_name = "exDividendDate"]
        ex_dividend_date -> Nullable<Text>,
        beta -> Nullable<Double>,
        #[sql_name = "lastUpdate"]
        last_update -> Timestamp,
    }
}

diesel::table! {
    fundamental_data_etf (symbol) {
        symbol -> Text,
        #[sql_name = "shortName"]
        short_name -> Nullable<Text>,
        sector -> Nullable<Text>,
        industry -> Nullable<Text>,
        country -> Nullable<Text>,
        currency -> Nullable<Text>,
        exchange -> Nullable<Text>,
        #[sql_name = "marketCap"]
        market_cap -> Nullable<BigInt>,
        #[sql_name = "trailingPE"]
        trailing_pe -> Nullable<Double>,
        #[sql_name = "forwardPE"]
        forward_pe -> Nullable<Double>,
        #[sql_name = "priceToBook"]
        price_to_book -> Nullable<Double>,
        #[sql_name = "priceToSales"]
        price_to_sales -> Nullable<Double>,
        #[sql_name = "enterpriseToRevenue"]
        enterprise_to_revenue -> Nullable<Double>,
        #[sql_name = "enterpriseToEbitda"]
        enterprise_to_ebitda -> Nullable<Double>,
        #[sql_name = "pegRatio"]
        peg_ratio -> Nullable<Double>,
        #[sql_name = "debtToEquity"]
        debt_to_equity -> Nullable<Double>,
        #[sql_name = "currentRatio"]
        current_ratio -> Nullable<Double>,
        #[sql_name = "quickRatio"]
        quick_ratio -> Nullable<Double>,
        #[sql_name = "totalCash"]
        total_cash -> Nullable<BigInt>,
        #[sql_name = "totalDebt"]
        total_debt -> Nullable<BigInt>,
        #[sql_name = "returnOnEquity"]
        return_on_equity -> Nullable<Double>,
        #[sql_name = "returnOnAssets"]
        return_on_assets -> Nullable<Double>,
        #[sql_name = "profitMargins"]
        profit_margins -> Nullable<Double>,
        #[sql_name = "operatingMargins"]
        operating_margins -> Nullable<Double>,
        #[sql_name = "grossMargins"]
        gross_margins -> Nullable<Double>,
        #[sql_name = "revenueGrowth"]
        revenue_growth -> Nullable<Double>,
        #[sql_name = "earningsGrowth"]
        earnings_growth -> Nullable<Double>,
        #[sql_name = "totalRevenue"]
        total_revenue -> Nullable<BigInt>,
        #[sql_name = "netIncomeToCommon"]
        net_income_to_common -> Nullable<BigInt>,
        #[sql_name = "bookValue"]
        book_value -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekHigh"]
        fifty_two_week_high -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekLow"]
        fifty_two_week_low -> Nullable<Double>,
        #[sql_name = "sharesOutstanding"]
        shares_outstanding -> Nullable<BigInt>,
        #[sql_name = "averageVolume"]
        average_volume -> Nullable<BigInt>,
        #[sql_name = "dividendYield"]
        dividend_yield -> Nullable<Double>,
        #[sql_name = "payoutRatio"]
        payout_ratio -> Nullable<Double>,
        #[sql_name = "dividendRate"]
        dividend_rate -> Nullable<Double>,
        #[sql_name = "exDividendDate"]
        ex_dividend_date -> Nullable<Text>,
        beta -> Nullable<Double>,
        #[sql_name = "lastUpdate"]
        last_update -> Timestamp,
    }
}

diesel::table! {
    fundamental_data_index (symbol) {
        symbol -> Text,
        #[sql_name = "shortName"]
        short_name -> Nullable<Text>,
        sector -> Nullable<Text>,
        industry -> Nullable<Text>,
        country -> Nullable<Text>,
        currency -> Nullable<Text>,
        exchange -> Nullable<Text>,
        #[sql_name = "marketCap"]
        market_cap -> Nullable<BigInt>,
        #[sql_name = "trailingPE"]
        trailing_pe -> Nullable<Double>,
        #[sql_name = "forwardPE"]
        forward_pe -> Nullable<Double>,
        #[sql_name = "priceToBook"]
        price_to_book -> Nullable<Double>,
        #[sql_name = "priceToSales"]
        price_to_sales -> Nullable<Double>,
        #[sql_name = "enterpriseToRevenue"]
        enterprise_to_revenue -> Nullable<Double>,
        #[sql_name = "enterpriseToEbitda"]
        enterprise_to_ebitda -> Nullable<Double>,
        #[sql_name = "pegRatio"]
        peg_ratio -> Nullable<Double>,
        #[sql_name = "debtToEquity"]
        debt_to_equity -> Nullable<Double>,
        #[sql_name = "currentRatio"]
        current_ratio -> Nullable<Double>,
        #[sql_name = "quickRatio"]
        quick_ratio -> Nullable<Double>,
        #[sql_name = "totalCash"]
        total_cash -> Nullable<BigInt>,
        #[sql_name = "totalDebt"]
        total_debt -> Nullable<BigInt>,
        #[sql_name = "returnOnEquity"]
        return_on_equity -> Nullable<Double>,
        #[sql_name = "returnOnAssets"]
        return_on_assets -> Nullable<Double>,
        #[sql_name = "profitMargins"]
        profit_margins -> Nullable<Double>,
        #[sql_name = "operatingMargins"]
        operating_margins -> Nullable<Double>,
        #[sql_name = "grossMargins"]
        gross_margins -> Nullable<Double>,
        #[sql_name = "revenueGrowth"]
        revenue_growth -> Nullable<Double>,
        #[sql_name = "earningsGrowth"]
        earnings_growth -> Nullable<Double>,
        #[sql_name = "totalRevenue"]
        total_revenue -> Nullable<BigInt>,
        #[sql_name = "netIncomeToCommon"]
        net_income_to_common -> Nullable<BigInt>,
        #[sql_name = "bookValue"]
        book_value -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekHigh"]
        fifty_two_week_high -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekLow"]
        fifty_two_week_low -> Nullable<Double>,
        #[sql_name = "sharesOutstanding"]
        shares_outstanding -> Nullable<BigInt>,
        #[sql_name = "averageVolume"]
        average_volume -> Nullable<BigInt>,
        #[sql_name = "dividendYield"]
        dividend_yield -> Nullable<Double>,
        #[sql_name = "payoutRatio"]
        payout_ratio -> Nullable<Double>,
        #[sql_name = "dividendRate"]
        dividend_rate -> Nullable<Double>,
        #[sql_name = "exDividendDate"]
        ex_dividend_date -> Nullable<Text>,
        beta -> Nullable<Double>,
        #[sql_name = "lastUpdate"]
        last_update -> Timestamp,
    }
}

diesel::table! {
    fundamental_data_crypto (symbol) {
        symbol -> Text,
        #[sql_name = "shortName"]
        short_name -> Nullable<Text>,
        sector -> Nullable<Text>,
        industry -> Nullable<Text>,
        country -> Nullable<Text>,
        currency -> Nullable<Text>,
        exchange -> Nullable<Text>,
        #[sql_name = "marketCap"]
        market_cap -> Nullable<BigInt>,
        #[sql_name = "trailingPE"]
        trailing_pe -> Nullable<Double>,
        #[sql_name = "forwardPE"]
        forward_pe -> Nullable<Double>,
        #[sql_name = "priceToBook"]
        price_to_book -> Nullable<Double>,
        #[sql_name = "priceToSales"]
        price_to_sales -> Nullable<Double>,
        #[sql_name = "enterpriseToRevenue"]
        enterprise_to_revenue -> Nullable<Double>,
        #[sql_name = "enterpriseToEbitda"]
        enterprise_to_ebitda -> Nullable<Double>,
        #[sql_name = "pegRatio"]
        peg_ratio -> Nullable<Double>,
        #[sql_name = "debtToEquity"]
        debt_to_equity -> Nullable<Double>,
        #[sql_name = "currentRatio"]
        current_ratio -> Nullable<Double>,
        #[sql_name = "quickRatio"]
        quick_ratio -> Nullable<Double>,
        #[sql_name = "totalCash"]
        total_cash -> Nullable<BigInt>,
        #[sql_name = "totalDebt"]
        total_debt -> Nullable<BigInt>,
        #[sql_name = "returnOnEquity"]
        return_on_equity -> Nullable<Double>,
        #[sql_name = "returnOnAssets"]
        return_on_assets -> Nullable<Double>,
        #[sql_name = "profitMargins"]
        profit_margins -> Nullable<Double>,
        #[sql_name = "operatingMargins"]
        operating_margins -> Nullable<Double>,
        #[sql_name = "grossMargins"]
        gross_margins -> Nullable<Double>,
        #[sql_name = "revenueGrowth"]
        revenue_growth -> Nullable<Double>,
        #[sql_name = "earningsGrowth"]
        earnings_growth -> Nullable<Double>,
        #[sql_name = "totalRevenue"]
        total_revenue -> Nullable<BigInt>,
        #[sql_name = "netIncomeToCommon"]
        net_income_to_common -> Nullable<BigInt>,
        #[sql_name = "bookValue"]
        book_value -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekHigh"]
        fifty_two_week_high -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekLow"]
        fifty_two_week_low -> Nullable<Double>,
        #[sql_name = "sharesOutstanding"]
        shares_outstanding -> Nullable<BigInt>,
        #[sql_name = "averageVolume"]
        average_volume -> Nullable<BigInt>,
        #[sql_name = "dividendYield"]
        dividend_yield -> Nullable<Double>,
        #[sql_name = "payoutRatio"]
        payout_ratio -> Nullable<Double>,
        #[sql_name = "dividendRate"]
        dividend_rate -> Nullable<Double>,
        #[sql_name = "exDividendDate"]
        ex_dividend_date -> Nullable<Text>,
        beta -> Nullable<Double>,
        #[sql_name = "lastUpdate"]
        last_update -> Timestamp,
    }
}

diesel::table! {
    fundamental_data_forex (symbol) {
        symbol -> Text,
        #[sql_name = "shortName"]
        short_name -> Nullable<Text>,
        sector -> Nullable<Text>,
        industry -> Nullable<Text>,
        country -> Nullable<Text>,
        currency -> Nullable<Text>,
        exchange -> Nullable<Text>,
        #[sql_name = "marketCap"]
        market_cap -> Nullable<BigInt>,
        #[sql_name = "trailingPE"]
        trailing_pe -> Nullable<Double>,
        #[sql_name = "forwardPE"]
        forward_pe -> Nullable<Double>,
        #[sql_name = "priceToBook"]
        price_to_book -> Nullable<Double>,
        #[sql_name = "priceToSales"]
        price_to_sales -> Nullable<Double>,
        #[sql_name = "enterpriseToRevenue"]
        enterprise_to_revenue -> Nullable<Double>,
        #[sql_name = "enterpriseToEbitda"]
        enterprise_to_ebitda -> Nullable<Double>,
        #[sql_name = "pegRatio"]
        peg_ratio -> Nullable<Double>,
        #[sql_name = "debtToEquity"]
        debt_to_equity -> Nullable<Double>,
        #[sql_name = "currentRatio"]
        current_ratio -> Nullable<Double>,
        #[sql_name = "quickRatio"]
        quick_ratio -> Nullable<Double>,
        #[sql_name = "totalCash"]
        total_cash -> Nullable<BigInt>,
        #[sql_name = "totalDebt"]
        total_debt -> Nullable<BigInt>,
        #[sql_name = "returnOnEquity"]
        return_on_equity -> Nullable<Double>,
        #[sql_name = "returnOnAssets"]
        return_on_assets -> Nullable<Double>,
        #[sql_name = "profitMargins"]
        profit_margins -> Nullable<Double>,
        #[sql_name = "operatingMargins"]
        operating_margins -> Nullable<Double>,
        #[sql_name = "grossMargins"]
        gross_margins -> Nullable<Double>,
        #[sql_name = "revenueGrowth"]
        revenue_growth -> Nullable<Double>,
        #[sql_name = "earningsGrowth"]
        earnings_growth -> Nullable<Double>,
        #[sql_name = "totalRevenue"]
        total_revenue -> Nullable<BigInt>,
        #[sql_name = "netIncomeToCommon"]
        net_income_to_common -> Nullable<BigInt>,
        #[sql_name = "bookValue"]
        book_value -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekHigh"]
        fifty_two_week_high -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekLow"]
        fifty_two_week_low -> Nullable<Double>,
        #[sql_name = "sharesOutstanding"]
        shares_outstanding -> Nullable<BigInt>,
        #[sql_name = "averageVolume"]
        average_volume -> Nullable<BigInt>,
        #[sql_name = "dividendYield"]
        dividend_yield -> Nullable<Double>,
        #[sql_name = "payoutRatio"]
        payout_ratio -> Nullable<Double>,
        #[sql_name = "dividendRate"]
        dividend_rate -> Nullable<Double>,
        #[sql_name = "exDividendDate"]
        ex_dividend_date -> Nullable<Text>,
        beta -> Nullable<Double>,
        #[sql_name = "lastUpdate"]
        last_update -> Timestamp,
    }
}

diesel::table! {
    fundamental_data_futures (symbol) {
        symbol -> Text,
        #[sql_name = "shortName"]
        short_name -> Nullable<Text>,
        sector -> Nullable<Text>,
        industry -> Nullable<Text>,
        country -> Nullable<Text>,
        currency -> Nullable<Text>,
        exchange -> Nullable<Text>,
        #[sql_name = "marketCap"]
        market_cap -> Nullable<BigInt>,
        #[sql_name = "trailingPE"]
        trailing_pe -> Nullable<Double>,
        #[sql_name = "forwardPE"]
        forward_pe -> Nullable<Double>,
        #[sql_name = "priceToBook"]
        price_to_book -> Nullable<Double>,
        #[sql_name = "priceToSales"]
        price_to_sales -> Nullable<Double>,
        #[sql_name = "enterpriseToRevenue"]
        enterprise_to_revenue -> Nullable<Double>,
        #[sql_name = "enterpriseToEbitda"]
        enterprise_to_ebitda -> Nullable<Double>,
        #[sql_name = "pegRatio"]
        peg_ratio -> Nullable<Double>,
        #[sql_name = "debtToEquity"]
        debt_to_equity -> Nullable<Double>,
        #[sql_name = "currentRatio"]
        current_ratio -> Nullable<Double>,
        #[sql_name = "quickRatio"]
        quick_ratio -> Nullable<Double>,
        #[sql_name = "totalCash"]
        total_cash -> Nullable<BigInt>,
        #[sql_name = "totalDebt"]
        total_debt -> Nullable<BigInt>,
        #[sql_name = "returnOnEquity"]
        return_on_equity -> Nullable<Double>,
        #[sql_name = "returnOnAssets"]
        return_on_assets -> Nullable<Double>,
        #[sql_name = "profitMargins"]
        profit_margins -> Nullable<Double>,
        #[sql_name = "operatingMargins"]
        operating_margins -> Nullable<Double>,
        #[sql_name = "grossMargins"]
        gross_margins -> Nullable<Double>,
        #[sql_name = "revenueGrowth"]
        revenue_growth -> Nullable<Double>,
        #[sql_name = "earningsGrowth"]
        earnings_growth -> Nullable<Double>,
        #[sql_name = "totalRevenue"]
        total_revenue -> Nullable<BigInt>,
        #[sql_name = "netIncomeToCommon"]
        net_income_to_common -> Nullable<BigInt>,
        #[sql_name = "bookValue"]
        book_value -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekHigh"]
        fifty_two_week_high -> Nullable<Double>,
        #[sql_name = "fiftyTwoWeekLow"]
        fifty_two_week_low -> Nullable<Double>,
        #[sql_name = "sharesOutstanding"]
        shares_outstanding -> Nullable<BigInt>,
        #[sql_name = "averageVolume"]
        average_volume -> Nullable<BigInt>,
        #[sql_name = "dividendYield"]
        dividend_yield -> Nullable<Double>,
        #[sql_name = "payoutRatio"]
        payout_ratio -> Nullable<Double>,
        #[sql_name = "dividendRate"]
        dividend_rate -> Nullable<Double>,
        #[sql_name = "exDividendDate"]
        ex_dividend_date -> Nullable<Text>,
        beta -> Nullable<Double>,
        #[sql_name = "lastUpdate"]
        last_update -> Timestamp,
    }
}
