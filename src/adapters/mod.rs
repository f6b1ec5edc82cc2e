//! Adapter interfaces for the upstream content API.
//!
//! The cache only reaches the network through [`Fetcher`], so the HTTP
//! client can be swapped for an in-process implementation in tests.

pub mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::cache::{FetchError, FetchOptions};

// Re-export the HTTP adapter
pub use http::HttpFetcher;

/// Trait for fetching JSON documents
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Human-readable fetcher name
    fn name(&self) -> &str;

    /// Perform a request and decode the body as JSON.
    ///
    /// Transport failures map to `FetchError::Network`, non-2xx responses
    /// to `FetchError::HttpStatus` and undecodable bodies to `FetchError::Parse`.
    async fn fetch_json(&self, url: &str, options: &FetchOptions) -> Result<Value, FetchError>;
}
