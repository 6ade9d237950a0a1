use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw fundamentals returned by a provider, keyed by the provider's own field names.
///
/// Values are kept as JSON so providers can hand over whatever they received;
/// interpreting names and units is the normalizer's job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderFields {
    fields: BTreeMap<String, Value>,
}

impl ProviderFields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Insert a field only if it is not present yet.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert_if_absent(&mut self, name: impl Into<String>, value: Value) -> bool {
        let name = name.into();
        if self.fields.contains_key(&name) {
            return false;
        }
        self.fields.insert(name, value);
        true
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl FromIterator<(String, Value)> for ProviderFields {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_if_absent_keeps_first_value() {
        let mut fields = ProviderFields::new();
        assert!(fields.insert_if_absent("currency", json!("TWD")));
        assert!(!fields.insert_if_absent("currency", json!("USD")));
        assert_eq!(fields.get("currency"), Some(&json!("TWD")));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let fields = ProviderFields::new()
            .with("marketCap", 1000)
            .with("shortName", "TSMC");
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"marketCap":1000,"shortName":"TSMC"}"#);
    }
}
