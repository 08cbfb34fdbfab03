//! Cache Module
//!
//! Defines the [`Cache`] contract: a best-effort value cache with optional
//! per-entry time-to-live. Absence is reported as `None`, never as an error.
//!
//! Backends:
//! - [`MemoryCache`]: bounded in-memory cache with TTL expiration and LRU eviction
//! - [`EmptyCache`]: always-empty null object, used when caching is disabled

mod empty;
mod entry;
mod lru;
mod memory;
mod stats;


use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::tasks::spawn_cleanup_task_from_config;

// Re-export public types
pub use empty::EmptyCache;
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use memory::MemoryCache;
pub use stats::CacheStats;

/// TTL value that disables expiry.
pub const NO_EXPIRY: Duration = Duration::ZERO;

// == Cache Contract ==
/// A value cache keyed by `K`.
///
/// Every operation except [`reset`](Cache::reset) succeeds from the caller's
/// point of view. Backend failures are absorbed and show up as absence on a
/// later [`get`](Cache::get).
pub trait Cache<K, V>: Send + Sync {
    /// Returns the value for `key` if it is present and not expired.
    fn get(&self, key: &K) -> Option<V>;

    /// Stores or overwrites the value for `key`.
    ///
    /// A zero `ttl` disables expiry. A positive `ttl` makes the entry absent
    /// once that duration has elapsed from this call. Value and TTL are
    /// replaced together on overwrite.
    fn set(&self, key: K, value: V, ttl: Duration);

    /// Removes every key in `keys`. Absent keys are ignored.
    fn delete(&self, keys: &[K]);

    /// Removes every entry.
    ///
    /// Either all entries are gone afterwards or the call fails with
    /// [`ContractError::NotImplemented`](crate::ContractError::NotImplemented)
    /// and nothing was cleared.
    fn reset(&self) -> Result<()>;
}

impl<K, V, C> Cache<K, V> for Arc<C>
where
    C: Cache<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn set(&self, key: K, value: V, ttl: Duration) {
        (**self).set(key, value, ttl)
    }

    fn delete(&self, keys: &[K]) {
        (**self).delete(keys)
    }

    fn reset(&self) -> Result<()> {
        (**self).reset()
    }
}

// == Backend Selection ==
/// Builds the cache backend described by `config`.
///
/// A disabled cache is an [`EmptyCache`], so call sites stay the same whether
/// caching is on or off. Expired entries of the returned [`MemoryCache`] are
/// reclaimed lazily; see [`from_config_with_cleanup`] for active sweeping.
pub fn from_config<K, V>(config: &Config) -> Arc<dyn Cache<K, V>>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    if config.cache_enabled {
        info!(max_entries = config.max_entries, "Using in-memory cache");
        Arc::new(MemoryCache::from_config(config))
    } else {
        info!("Caching disabled, using empty cache");
        Arc::new(EmptyCache::new())
    }
}

/// Like [`from_config`], but also starts the expiry sweep for an in-memory
/// cache at `config.cleanup_interval`.
///
/// Returns the sweep's handle, or `None` when caching is disabled. Must be
/// called from within a tokio runtime.
pub fn from_config_with_cleanup<K, V>(
    config: &Config,
) -> (Arc<dyn Cache<K, V>>, Option<JoinHandle<()>>)
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    if !config.cache_enabled {
        return (from_config(config), None);
    }

    let cache = Arc::new(MemoryCache::from_config(config));
    let cleanup = spawn_cleanup_task_from_config(Arc::clone(&cache), config);
    info!(
        max_entries = config.max_entries,
        cleanup_interval_ms = config.cleanup_interval.as_millis() as u64,
        "Using in-memory cache with expiry sweep"
    );

    let cache: Arc<dyn Cache<K, V>> = cache;
    (cache, Some(cleanup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_enabled_caches_values() {
        let config = Config::default();
        let cache = from_config::<String, u32>(&config);

        cache.set("a".to_string(), 1, NO_EXPIRY);
        assert_eq!(cache.get(&"a".to_string()), Some(1));
        assert!(cache.reset().is_ok());
    }

    #[test]
    fn test_from_config_disabled_is_empty() {
        let config = Config {
            cache_enabled: false,
            ..Config::default()
        };
        let cache = from_config::<String, u32>(&config);

        cache.set("a".to_string(), 1, NO_EXPIRY);
        assert_eq!(cache.get(&"a".to_string()), None);
        assert!(cache.reset().unwrap_err().is_not_implemented());
    }

    #[test]
    fn test_arc_forwards_to_inner_cache() {
        let cache: Arc<MemoryCache<i32, &str>> = Arc::new(MemoryCache::new(10));

        Cache::set(&cache, 1, "one", NO_EXPIRY);
        assert_eq!(Cache::get(&cache, &1), Some("one"));

        Cache::delete(&cache, &[1]);
        assert_eq!(Cache::get(&cache, &1), None);
    }

    #[tokio::test]
    async fn test_from_config_with_cleanup_starts_sweep() {
        let config = Config {
            cleanup_interval: Duration::from_millis(20),
            ..Config::default()
        };
        let (cache, cleanup) = from_config_with_cleanup::<String, u32>(&config);
        let cleanup = cleanup.expect("in-memory cache should get a sweep");

        cache.set("a".to_string(), 1, Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(!cleanup.is_finished());
        assert_eq!(cache.get(&"a".to_string()), None);

        cleanup.abort();
    }

    #[tokio::test]
    async fn test_from_config_with_cleanup_disabled_has_no_sweep() {
        let config = Config {
            cache_enabled: false,
            ..Config::default()
        };
        let (cache, cleanup) = from_config_with_cleanup::<String, u32>(&config);

        assert!(cleanup.is_none());
        assert!(cache.reset().unwrap_err().is_not_implemented());
    }
}
