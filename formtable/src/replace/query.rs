//! Query strings appended to route links

use std::collections::BTreeMap;

/// Query part of a route link
///
/// Pairs are serialized as `key=value` joined by `&`, in insertion order and
/// without percent-encoding. A raw string is appended as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryString {
    Pairs(Vec<(String, String)>),
    Raw(String),
}

impl Default for QueryString {
    fn default() -> Self {
        QueryString::Pairs(Vec::new())
    }
}

impl QueryString {
    /// An empty mapping or empty string adds nothing to the URI
    pub fn is_empty(&self) -> bool {
        match self {
            QueryString::Pairs(pairs) => pairs.is_empty(),
            QueryString::Raw(raw) => raw.is_empty(),
        }
    }

    /// Serialized query without the leading `?`, or `None` when empty
    pub fn serialize(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(match self {
            QueryString::Pairs(pairs) => pairs
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect::<Vec<_>>()
                .join("&"),
            QueryString::Raw(raw) => raw.clone(),
        })
    }
}

impl From<&str> for QueryString {
    fn from(raw: &str) -> Self {
        QueryString::Raw(raw.to_string())
    }
}

impl From<String> for QueryString {
    fn from(raw: String) -> Self {
        QueryString::Raw(raw)
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for QueryString {
    fn from(pairs: Vec<(K, V)>) -> Self {
        QueryString::Pairs(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for QueryString {
    fn from(pairs: [(K, V); N]) -> Self {
        QueryString::Pairs(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>> From<BTreeMap<K, V>> for QueryString {
    fn from(map: BTreeMap<K, V>) -> Self {
        QueryString::Pairs(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
