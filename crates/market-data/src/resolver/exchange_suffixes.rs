//! Yahoo exchange suffixes.
//!
//! Maps ISO 10383 Market Identifier Codes to the suffix Yahoo appends to
//! tickers listed on that venue. Only venues a deployment is likely to use as
//! its "domestic" or "OTC" market are listed.

/// `(MIC, Yahoo suffix)` pairs.
pub const YAHOO_EXCHANGE_SUFFIXES: &[(&str, &str)] = &[
    ("XTAI", ".TW"),   // Taiwan Stock Exchange
    ("ROCO", ".TWO"),  // Taipei Exchange (OTC / emerging board)
    ("XKRX", ".KS"),   // Korea Exchange (KOSPI)
    ("XKOS", ".KQ"),   // KOSDAQ
    ("XTKS", ".T"),    // Tokyo
    ("XHKG", ".HK"),   // Hong Kong
    ("XSHG", ".SS"),   // Shanghai
    ("XSHE", ".SZ"),   // Shenzhen
    ("XTSE", ".TO"),   // Toronto
    ("XLON", ".L"),    // London
    ("XASX", ".AX"),   // Australia
    ("XETR", ".DE"),   // Xetra
];

/// Look up the Yahoo suffix for a MIC (case-insensitive).
pub fn yahoo_suffix_for_mic(mic: &str) -> Option<&'static str> {
    YAHOO_EXCHANGE_SUFFIXES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(mic.trim()))
        .map(|(_, suffix)| *suffix)
}
