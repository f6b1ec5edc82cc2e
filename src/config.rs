//! Configuration for blogfeed.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (BLOGFEED_API_URL, BLOGFEED_CACHE_TTL_SECS)
//! 2. Config file (.blogfeed/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .blogfeed/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::http::DEFAULT_REQUEST_TIMEOUT;
use crate::cache::DEFAULT_TTL;

/// Default CMS base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.example.com";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: Option<CacheConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// CMS base URL; posts are read from `<base_url>/blogs`
    pub base_url: Option<String>,
    /// Per-request timeout
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub ttl_seconds: Option<u64>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// CMS base URL
    pub api_base_url: String,
    /// HTTP request timeout
    pub request_timeout: Duration,
    /// How long cached responses stay fresh
    pub cache_ttl: Duration,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            cache_ttl: DEFAULT_TTL,
            config_file: None,
        }
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".blogfeed").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge file settings and environment overrides over the defaults
fn resolve_config(
    config_file: Option<PathBuf>,
    file: Option<ConfigFile>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig> {
    let defaults = ResolvedConfig::default();

    let api_base_url = env("BLOGFEED_API_URL")
        .or_else(|| file.as_ref().and_then(|f| f.api.base_url.clone()))
        .unwrap_or(defaults.api_base_url);

    let request_timeout = file
        .as_ref()
        .and_then(|f| f.api.timeout_seconds)
        .map(Duration::from_secs)
        .unwrap_or(defaults.request_timeout);

    let cache_ttl = match env("BLOGFEED_CACHE_TTL_SECS") {
        Some(raw) => {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid BLOGFEED_CACHE_TTL_SECS: {}", raw))?;
            Duration::from_secs(secs)
        }
        None => file
            .as_ref()
            .and_then(|f| f.cache.as_ref())
            .and_then(|c| c.ttl_seconds)
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache_ttl),
    };

    Ok(ResolvedConfig {
        api_base_url,
        request_timeout,
        cache_ttl,
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config_file = find_config_file(&cwd);

    let file = match config_file {
        Some(ref path) => Some(load_config_file(path)?),
        None => None,
    };

    resolve_config(config_file, file, |name| std::env::var(name).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
