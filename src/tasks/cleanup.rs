//! TTL Cleanup Task
//!
//! Background task that periodically reclaims expired cache entries.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::MemoryCache;
use crate::config::Config;

/// Shortest interval between sweeps. Shorter requests are raised to this.
pub const MIN_CLEANUP_INTERVAL: Duration = Duration::from_millis(10);

/// Spawns a background task that periodically removes expired entries from
/// `cache`.
///
/// Expired entries are already invisible to readers; this only reclaims
/// their memory ahead of the next lookup. Must be called from within a tokio
/// runtime.
///
/// # Returns
/// A JoinHandle for the spawned task, to be aborted on shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(MemoryCache::<String, String>::new(1000));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<K, V>(cache: Arc<MemoryCache<K, V>>, interval: Duration) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let period = interval.max(MIN_CLEANUP_INTERVAL);

    tokio::spawn(async move {
        info!(interval_ms = period.as_millis() as u64, "Starting TTL cleanup task");

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick fires immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let removed = cache.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

/// Spawns the cleanup task at the interval configured by `CACHE_CLEANUP_INTERVAL_MS`.
pub fn spawn_cleanup_task_from_config<K, V>(
    cache: Arc<MemoryCache<K, V>>,
    config: &Config,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    spawn_cleanup_task(cache, config.cleanup_interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Cache;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache: Arc<MemoryCache<String, String>> = Arc::new(MemoryCache::new(100));

        cache.set("expire_soon".to_string(), "value".to_string(), Duration::from_millis(50));

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(100));

        tokio::time::sleep(Duration::from_millis(300)).await;

        // Reclaimed without any lookup
        assert!(cache.is_empty(), "Expired entry should have been cleaned up");
        assert_eq!(cache.stats().expirations, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache: Arc<MemoryCache<String, String>> = Arc::new(MemoryCache::new(100));

        cache.set("long_lived".to_string(), "value".to_string(), Duration::from_secs(3600));
        cache.set("forever".to_string(), "value".to_string(), Duration::ZERO);

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"long_lived".to_string()), Some("value".to_string()));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache: Arc<MemoryCache<String, String>> = Arc::new(MemoryCache::new(100));

        let handle = spawn_cleanup_task(cache, Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }

    #[tokio::test]
    async fn test_zero_interval_is_raised_to_minimum() {
        let cache: Arc<MemoryCache<String, String>> = Arc::new(MemoryCache::new(100));
        cache.set("expire_soon".to_string(), "value".to_string(), Duration::from_millis(5));

        let handle = spawn_cleanup_task(cache.clone(), Duration::ZERO);

        tokio::time::sleep(MIN_CLEANUP_INTERVAL * 5).await;

        // Still running and still sweeping
        assert!(!handle.is_finished());
        assert!(cache.is_empty());
        assert_eq!(cache.stats().expirations, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_configured_interval_drives_sweep() {
        let config = Config {
            cleanup_interval: Duration::from_millis(50),
            ..Config::default()
        };
        let cache: Arc<MemoryCache<String, String>> = Arc::new(MemoryCache::from_config(&config));
        cache.set("a".to_string(), "value".to_string(), Duration::from_millis(10));

        let handle = spawn_cleanup_task_from_config(cache.clone(), &config);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(cache.is_empty(), "Configured sweep should have reclaimed the entry");

        handle.abort();
    }

    #[tokio::test]
    async fn test_long_configured_interval_defers_sweep() {
        let config = Config {
            cleanup_interval: Duration::from_secs(60),
            ..Config::default()
        };
        let cache: Arc<MemoryCache<String, String>> = Arc::new(MemoryCache::from_config(&config));
        cache.set("a".to_string(), "value".to_string(), Duration::from_millis(10));

        let handle = spawn_cleanup_task_from_config(cache.clone(), &config);

        tokio::time::sleep(Duration::from_millis(100)).await;
        // Expired but not yet reclaimed
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a".to_string()), None);

        handle.abort();
    }
}
