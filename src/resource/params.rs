//! Request parameters for resource calls.

use std::fmt::Display;

use indexmap::IndexMap;

/// Key under which single-item lookups carry the identifier.
pub const ID: &str = "id";

/// Ordered parameter map passed to [`Resource::get`](super::Resource::get).
///
/// The key matching the template placeholder is substituted into the path;
/// the rest are sent as query-string parameters in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(IndexMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters selecting a single item by `id`.
    pub fn id(id: impl Display) -> Self {
        Self::new().with(ID, id)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a parameter, keeping its original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
