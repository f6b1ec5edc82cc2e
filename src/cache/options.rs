//! Request options and cache key derivation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Options that shape an upstream request.
///
/// Part of the cache key, so two requests to the same URL with different
/// options are cached separately. Headers live in a sorted map so equal
/// options always serialize to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOptions {
    /// HTTP method (default: GET)
    pub method: String,

    /// Extra request headers
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            headers: BTreeMap::new(),
        }
    }
}

impl FetchOptions {
    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Build the cache key for a request: the URL followed by the serialized options.
///
/// Keys always start with the URL, which is what prefix clearing relies on.
pub fn cache_key(url: &str, options: &FetchOptions) -> String {
    let serialized = serde_json::to_string(options).unwrap_or_default();
    format!("{}-{}", url, serialized)
}
