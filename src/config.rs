//! Configuration Module
//!
//! Selects and sizes the cache backend from environment variables.

use std::env;
use std::time::Duration;

/// Backend configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether caching is enabled; a disabled cache is an always-empty backend
    pub cache_enabled: bool,
    /// Maximum number of entries the memory cache can hold
    pub max_entries: usize,
    /// Interval between active expiry sweeps
    pub cleanup_interval: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_ENABLED` - `true`/`false`, `1`/`0` (default: true)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `CACHE_CLEANUP_INTERVAL_MS` - Sweep interval in milliseconds (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_enabled: env::var("CACHE_ENABLED")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.cache_enabled),
            max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_entries),
            cleanup_interval: env::var("CACHE_CLEANUP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ms: &u64| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.cleanup_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            max_entries: 1000,
            cleanup_interval: Duration::from_secs(1),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
