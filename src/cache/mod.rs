//! Response caching for the content API.
//!
//! - `ApiCache`: TTL cache with stale-on-error fallback and per-key request coalescing
//! - `FetchOptions`: request options that form part of the cache key
//! - `FetchError`: network, status and parse failures

pub mod api_cache;
pub mod error;
pub mod options;

pub use api_cache::{ApiCache, CacheEntry, DEFAULT_TTL};
pub use error::FetchError;
pub use options::{cache_key, FetchOptions};
