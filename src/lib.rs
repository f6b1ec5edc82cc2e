//! blogfeed - Cached CMS blog feed with content normalization
//!
//! Reads blog posts from a remote CMS JSON API and prepares them for display.
//!
//! # Architecture
//!
//! - Responses are cached in memory per URL + request options
//! - Fresh entries are served without touching the network
//! - When a refetch fails, the last good response is served instead
//! - Posts are enriched with an excerpt, inferred category and read time
//!
//! # Modules
//!
//! - `adapters`: Network access (`Fetcher` trait, reqwest implementation)
//! - `cache`: `ApiCache` with TTL expiry and stale fallback
//! - `content`: Post records, normalizer, related posts, placeholders
//! - `config`: Config file and environment resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # List posts
//! blogfeed list
//!
//! # Show a post with related posts
//! blogfeed show <slug>
//! ```

pub mod adapters;
pub mod cache;
pub mod cli;
pub mod config;
pub mod content;

// Re-export main types at crate root for convenience
pub use adapters::{Fetcher, HttpFetcher};
pub use cache::{ApiCache, FetchError, FetchOptions, DEFAULT_TTL};
pub use content::{BlogClient, BlogPost, Category, EnrichedPost, PostPage};
