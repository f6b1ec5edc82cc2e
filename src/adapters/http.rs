//! HTTP adapter for the CMS content API.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use super::Fetcher;
use crate::cache::{FetchError, FetchOptions};

/// Default request timeout (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed fetcher
pub struct HttpFetcher {
    /// HTTP client
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Create a fetcher around an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_json(&self, url: &str, options: &FetchOptions) -> Result<Value, FetchError> {
        let network = |message: String| FetchError::Network {
            url: url.to_string(),
            message,
        };

        let method = Method::from_bytes(options.method.as_bytes())
            .map_err(|e| network(format!("invalid method '{}': {}", options.method, e)))?;

        let mut request = self.client.request(method, url);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| network(e.to_string()))?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "Upstream response");
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Parse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_creation() {
        let fetcher = HttpFetcher::new(DEFAULT_REQUEST_TIMEOUT).unwrap();
        assert_eq!(fetcher.name(), "http");
    }

    #[tokio::test]
    async fn test_invalid_method_is_network_error() {
        let fetcher = HttpFetcher::with_client(reqwest::Client::new());
        let options = FetchOptions {
            method: "NOT A METHOD".to_string(),
            ..Default::default()
        };

        let result = fetcher
            .fetch_json("https://api.example.com/blogs", &options)
            .await;
        assert!(matches!(result, Err(FetchError::Network { .. })));
    }

    // Note: tests against a live CMS would go in tests/
}
