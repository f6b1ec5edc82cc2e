//! Errors produced when fetching from the upstream content API.

use thiserror::Error;

/// Failure modes of a single upstream request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be sent or the response could not be read
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The upstream answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// The body was not valid JSON (or not the JSON shape we expected)
    #[error("Failed to parse response from {url}: {message}")]
    Parse { url: String, message: String },
}

impl FetchError {
    /// URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            FetchError::Network { url, .. }
            | FetchError::HttpStatus { url, .. }
            | FetchError::Parse { url, .. } => url,
        }
    }

    /// HTTP status, if the failure was a status error
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
