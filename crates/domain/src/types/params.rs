//! Ordered query parameters

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::REDACTED;

/// Ordered mapping of query parameter names to their rendered values
///
/// Values are stored already formatted: integers in decimal, booleans as
/// `true`/`false`, coordinate lists as `lat,lng|lat,lng`. Inserting a key that
/// already exists replaces its value in place, so the parameter order is the
/// order in which keys were first inserted.
///
/// Serializes as a sequence of `(key, value)` pairs, which is the shape
/// `serde_urlencoded` (and therefore `reqwest::RequestBuilder::query`) expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Insert a parameter only when a value is present.
    pub fn insert_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(existing, _)| existing == key).map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.0.iter().position(|(existing, _)| existing == key)?;
        Some(self.0.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of these parameters with the value of `key` masked.
    #[must_use]
    pub fn redacted(&self, key: &str) -> Self {
        let mut copy = self.clone();
        if let Some(slot) = copy.0.iter_mut().find(|(existing, _)| existing == key) {
            slot.1 = REDACTED.to_string();
        }
        copy
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut params = QueryParams::new().with("a", 1).with("b", true);
        params.insert("a", "updated");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "updated"), ("b", "true")]);
    }

    #[test]
    fn optional_values_are_skipped() {
        let params = QueryParams::new().with_opt("radius", None::<u32>).with_opt("limit", Some(5));

        assert!(!params.contains_key("radius"));
        assert_eq!(params.get("limit"), Some("5"));
    }

    #[test]
    fn redacted_masks_only_the_named_key() {
        let params = QueryParams::new().with("api_key", "secret").with("input", "kempe");
        let masked = params.redacted("api_key");

        assert_eq!(masked.get("api_key"), Some(REDACTED));
        assert_eq!(masked.get("input"), Some("kempe"));
        assert_eq!(params.get("api_key"), Some("secret"));
    }

    #[test]
    fn display_joins_pairs() {
        let params: QueryParams = [("origin", "1,2"), ("destination", "3,4")].into_iter().collect();
        assert_eq!(params.to_string(), "origin=1,2&destination=3,4");
    }

    #[test]
    fn serializes_as_pair_sequence() {
        let params = QueryParams::new().with("points", "1,2|3,4");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!([["points", "1,2|3,4"]]));
    }
}
