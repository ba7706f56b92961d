//! Query parameter sets and their merge rules
//!
//! Options are merged key by key: the last writer wins, and an empty value
//! removes the key altogether. That lets callers drop one of the defaults
//! (say `publish`) by passing `publish=""`.

use std::collections::btree_map;
use std::collections::BTreeMap;

pub const HOST: &str = "host";
pub const PUBLISH: &str = "publish";
pub const START_NEW: &str = "startNew";
pub const FROM_CACHE: &str = "fromCache";
pub const MAX_AGE: &str = "maxAge";
pub const ALL: &str = "all";
pub const IGNORE_MISMATCH: &str = "ignoreMismatch";

/// A set of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options(BTreeMap<String, String>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or overwrite a key. An empty value is stored as-is; only
    /// [`Options::merge`] treats it as a deletion.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge `overrides` into `self` in place and return `self`.
    ///
    /// Non-empty values overwrite, empty values delete the key.
    pub fn merge(&mut self, overrides: &Options) -> &mut Self {
        for (key, value) in &overrides.0 {
            if value.is_empty() {
                self.0.remove(key);
            } else {
                self.0.insert(key.clone(), value.clone());
            }
        }
        self
    }
}

/// Merge `overrides` into `base`, consuming and returning `base`
pub fn merge_options(mut base: Options, overrides: &Options) -> Options {
    base.merge(overrides);
    base
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Options(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Options {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Options {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Defaults for `analyze` calls against `host`
pub(crate) fn analyze_defaults(host: &str) -> Options {
    Options::from([
        (HOST, host),
        (PUBLISH, "off"),
        (MAX_AGE, "24"),
        (FROM_CACHE, "off"),
        (IGNORE_MISMATCH, "on"),
    ])
}

/// Defaults for `getEndpointData` calls against `host`
pub(crate) fn endpoint_data_defaults(host: &str) -> Options {
    Options::from([(HOST, host), (FROM_CACHE, "on")])
}
