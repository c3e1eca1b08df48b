//! Persisted records: provider configuration and the named-location table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved alias consulted when `--from`/`--to` is not given.
pub const DEFAULT_LOCATION_ALIAS: &str = "default";

/// Provider configuration. Absence of a stored record means the
/// application has not been configured yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Google Maps API key
    pub api_key: String,
}

/// Named-location table: alias -> address or "lat,lon" string.
///
/// Keys are case-sensitive and matched exactly. Iteration order is
/// stable (sorted by alias).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locations(BTreeMap<String, String>);

impl Locations {
    /// Look up the value stored for an alias
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Insert or overwrite an alias
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Iterate over (alias, value) pairs in stable order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a user-supplied location string: an alias substitutes its
    /// stored value, anything else passes through as a literal address.
    pub fn resolve(&self, value: &str) -> String {
        match self.get(value) {
            Some(stored) => stored.to_string(),
            None => value.to_string(),
        }
    }
}
