use fundlens_market_data::ResolverConfig;

pub struct Config {
    pub db_path: String,
    pub resolver: ResolverConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_path = var("FL_DB_PATH").unwrap_or_else(|| "./db/fundamentals.db".into());

        let defaults = ResolverConfig::default();
        let resolver = ResolverConfig {
            domestic_mic: var("FL_DOMESTIC_MIC")
                .map(Into::into)
                .unwrap_or(defaults.domestic_mic),
            otc_mic: var("FL_OTC_MIC").map(Into::into).unwrap_or(defaults.otc_mic),
            crypto_quote: var("FL_CRYPTO_QUOTE")
                .map(Into::into)
                .unwrap_or(defaults.crypto_quote),
        };

        Self { db_path, resolver }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.db_path, "./db/fundamentals.db");
        assert_eq!(config.resolver, ResolverConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("FL_DB_PATH", "/tmp/f.db"),
            ("FL_DOMESTIC_MIC", "XKRX"),
            ("FL_OTC_MIC", "XKOS"),
            ("FL_CRYPTO_QUOTE", "KRW"),
        ]);
        assert_eq!(config.db_path, "/tmp/f.db");
        assert_eq!(config.resolver.domestic_mic, "XKRX");
        assert_eq!(config.resolver.otc_mic, "XKOS");
        assert_eq!(config.resolver.crypto_quote, "KRW");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config_from(&[("FL_DB_PATH", "  "), ("FL_CRYPTO_QUOTE", "")]);
        assert_eq!(config.db_path, "./db/fundamentals.db");
        assert_eq!(config.resolver.crypto_quote, "USD");
    }
}
