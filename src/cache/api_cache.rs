//! In-memory TTL cache in front of the content API.
//!
//! Entries are fresh while younger than the caller's TTL. Expired entries
//! are kept around and served only when a refetch fails.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use super::error::FetchError;
use super::options::{cache_key, FetchOptions};
use crate::adapters::Fetcher;

/// Default time-to-live for cached responses (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// A cached response body
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Cache key (URL + serialized options)
    pub key: String,

    /// Decoded JSON body
    pub value: Value,

    /// When the body was stored
    pub stored_at: Instant,
}

impl CacheEntry {
    /// Create an entry stamped with the current time
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
            stored_at: Instant::now(),
        }
    }

    /// Time since the entry was stored
    pub fn age(&self) -> Duration {
        self.stored_at.elapsed()
    }

    /// Whether the entry may be served without a refetch
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.age() < ttl
    }
}

/// Outcome of one upstream attempt, shared by every caller waiting on it
type Flight = Arc<OnceCell<Result<Value, FetchError>>>;

/// Response cache with stale-on-error fallback.
///
/// Owned by whoever builds the application and shared via `Arc`. Concurrent
/// misses for one key are coalesced: the first caller runs the upstream
/// request and every caller that joined meanwhile receives its outcome.
pub struct ApiCache {
    fetcher: Arc<dyn Fetcher>,
    entries: Mutex<HashMap<String, CacheEntry>>,
    in_flight: Mutex<HashMap<String, Flight>>,
}

/// Unregisters a flight when its caller finishes or is dropped
struct FlightGuard<'a> {
    cache: &'a ApiCache,
    key: &'a str,
    flight: Flight,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        let mut in_flight = self.cache.in_flight();
        let registered = in_flight
            .get(self.key)
            .is_some_and(|current| Arc::ptr_eq(current, &self.flight));
        // An unfinished flight stays registered while other callers still wait on it
        let finished = self.flight.initialized() || Arc::strong_count(&self.flight) <= 2;
        if registered && finished {
            in_flight.remove(self.key);
        }
    }
}

impl ApiCache {
    /// Create an empty cache backed by the given fetcher
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            entries: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch `url` with default options and [`DEFAULT_TTL`]
    pub async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        self.fetch_with_cache(url, &FetchOptions::default(), DEFAULT_TTL)
            .await
    }

    /// Fetch through the cache.
    ///
    /// Returns the cached body when it is younger than `ttl`. Otherwise the
    /// request goes upstream; a successful body replaces the entry. If the
    /// request fails and any earlier body exists for the key, that body is
    /// returned instead of the error. Callers that miss while a request for
    /// the same key is running share that request's outcome.
    pub async fn fetch_with_cache(
        &self,
        url: &str,
        options: &FetchOptions,
        ttl: Duration,
    ) -> Result<Value, FetchError> {
        let key = cache_key(url, options);

        if let Some(value) = self.get_fresh(&key, ttl) {
            debug!(url, "Cache hit");
            return Ok(value);
        }

        let guard = FlightGuard {
            cache: self,
            key: &key,
            flight: self.join_flight(&key),
        };

        let outcome = guard
            .flight
            .get_or_init(|| self.refresh(url, options, &key))
            .await
            .clone();

        drop(guard);
        outcome
    }

    /// One upstream attempt: store on success, fall back to stale data on failure
    async fn refresh(&self, url: &str, options: &FetchOptions, key: &str) -> Result<Value, FetchError> {
        debug!(url, fetcher = self.fetcher.name(), "Cache miss, fetching");

        match self.fetcher.fetch_json(url, options).await {
            Ok(value) => {
                self.store(key.to_string(), value.clone());
                Ok(value)
            }
            Err(err) => match self.get_any(key) {
                Some(stale) => {
                    warn!(url, error = %err, "Fetch failed, serving stale cached data");
                    Ok(stale)
                }
                None => Err(err),
            },
        }
    }

    /// Cached body for `key` if it is younger than `ttl`
    pub fn get_fresh(&self, key: &str, ttl: Duration) -> Option<Value> {
        self.entries()
            .get(key)
            .filter(|entry| entry.is_fresh(ttl))
            .map(|entry| entry.value.clone())
    }

    /// Cached body for `key` regardless of age
    pub fn get_any(&self, key: &str) -> Option<Value> {
        self.entries().get(key).map(|entry| entry.value.clone())
    }

    /// Store a body under `key`, replacing any previous entry
    pub fn store(&self, key: String, value: Value) {
        let entry = CacheEntry::new(key.clone(), value);
        self.entries().insert(key, entry);
    }

    /// Remove cached entries.
    ///
    /// With no URL the whole cache is emptied. With a URL, every entry whose
    /// key starts with it is removed, covering all option variants of that
    /// endpoint. Returns the number of entries removed.
    pub fn clear(&self, url: Option<&str>) -> usize {
        let mut entries = self.entries();
        let before = entries.len();

        match url {
            None => entries.clear(),
            Some(prefix) => entries.retain(|key, _| !key.starts_with(prefix)),
        }

        let removed = before - entries.len();
        info!(url = url.unwrap_or("*"), removed, "Cleared API cache");
        removed
    }

    /// Number of cached entries (fresh or stale)
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn in_flight(&self) -> MutexGuard<'_, HashMap<String, Flight>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn join_flight(&self, key: &str) -> Flight {
        self.in_flight()
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone()
    }
}
