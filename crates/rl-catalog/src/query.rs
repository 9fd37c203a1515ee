//! Structured catalog queries.
//!
//! A [`Query`] is an opaque key-value mapping forwarded to the catalog;
//! the assembler never interprets its contents beyond deriving a
//! deterministic identifier from the sorted pairs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Control key switching a query into regex-match mode.
pub const REGEX_SEARCH: &str = "regex_search";

/// A single query value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Boolean flag (e.g. `regex_search`).
    Flag(bool),
    /// Integer value, compared against the entity's text form.
    Number(i64),
    /// Text value; a regex pattern when `regex_search` is set.
    Text(String),
}

impl QueryValue {
    /// Convenience constructor for text values.
    pub fn text(value: impl Into<String>) -> Self {
        QueryValue::Text(value.into())
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Flag(b) => write!(f, "{b}"),
            QueryValue::Number(n) => write!(f, "{n}"),
            QueryValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// An ordered key-value query mapping.
///
/// Keys are kept sorted (BTreeMap), which makes [`Query::identifier`]
/// independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(BTreeMap<String, QueryValue>);

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a criterion.
    pub fn insert(&mut self, key: impl Into<String>, value: QueryValue) {
        self.0.insert(key.into(), value);
    }

    /// Look up a criterion by key.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    /// True when the query carries no criteria at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate criteria in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &QueryValue)> {
        self.0.iter()
    }

    /// True when the `regex_search` flag is set.
    pub fn regex_search(&self) -> bool {
        matches!(self.0.get(REGEX_SEARCH), Some(QueryValue::Flag(true)))
    }

    /// Derive a deterministic identifier from the sorted key/value pairs,
    /// formatted `key-value` and joined by `_`.
    ///
    /// The identifier is stable across submission orders and is derived
    /// even when the query matches nothing, so downstream consumers can
    /// use it for caching and section anchors.
    pub fn identifier(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{k}-{v}"))
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl<K: Into<String>> FromIterator<(K, QueryValue)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, QueryValue)>>(iter: I) -> Self {
        Query(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
