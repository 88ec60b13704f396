//! Query-string codec with bracket nesting (`a[b][0]=c`).
//!
//! Decoding collects repeated keys into lists and nests bracketed keys into
//! maps. Encoding writes lists with explicit indices and maps with bracketed
//! sub-keys, percent-encoding everything outside the RFC 3986 unreserved set.

mod decode;
mod encode;

use std::collections::BTreeMap;

use serde::Serialize;

pub use decode::decode;
pub use encode::encode;

/// Decoded query mapping, keyed by top-level parameter name.
pub type Query = BTreeMap<String, QueryValue>;

/// A decoded query value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    String(String),
    List(Vec<QueryValue>),
    Map(BTreeMap<String, QueryValue>),
}

impl QueryValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::String(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::String(s)
    }
}

impl<V: Into<QueryValue>> From<Vec<V>> for QueryValue {
    fn from(items: Vec<V>) -> Self {
        QueryValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// Limits applied while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Maximum number of bracket groups turned into nesting; the rest of the
    /// key is kept as one literal sub-key.
    pub depth: usize,
    /// Largest `[n]` index treated as a list position. Larger indices are map keys.
    pub array_limit: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            depth: 5,
            array_limit: 20,
        }
    }
}
