//! The user record served by the `rest/user` resource.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user as returned by the server.
///
/// Only `id` is interpreted. Every other attribute is carried through
/// untouched, in the order the server sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl User {
    /// Create a user with no attributes beyond its id.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            attributes: Map::new(),
        }
    }

    /// Builder-style helper to attach an attribute.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up a raw attribute.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Human-readable label for the view: the `name` attribute when it is
    /// a string, otherwise `#<id>`.
    pub fn label(&self) -> String {
        match self.attribute("name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => format!("#{}", self.id),
        }
    }
}
