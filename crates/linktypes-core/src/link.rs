//! Link set as supplied by the project build.
//!
//! A links document is a JSON object keyed by link name:
//!
//! ```json
//! {
//!   "db":    { "properties": { "host": "x" } },
//!   "cache": { "properties": {}, "include": [
//!       { "type": "cloudflare.binding", "binding": "kvNamespaceBindings" } ] }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Link name -> link. Sorted by name, so every walk over a link set is
/// deterministic.
pub type Links = BTreeMap<String, Link>;

/// A named resource exposed to application code.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Link {
    /// Runtime properties whose type is inferred.
    #[serde(default)]
    pub properties: Value,
    /// Capability descriptors, in declaration order.
    #[serde(default)]
    pub include: Vec<Include>,
}

impl Link {
    pub fn new(properties: Value) -> Self {
        Self {
            properties,
            include: Vec::new(),
        }
    }

    pub fn with_include(mut self, include: Include) -> Self {
        self.include.push(include);
        self
    }
}

/// Capability descriptor attached to a link.
///
/// Only the `type` tag is fixed; every other key lands in `other`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Include {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Include {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            other: Map::new(),
        }
    }

    /// Set an open-ended attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.other.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.other.get(key)
    }
}

/// Parse a links document.
pub fn parse_links(json: &str) -> Result<Links, serde_json::Error> {
    serde_json::from_str(json)
}
