//! Memory Cache Module
//!
//! In-memory cache backend combining HashMap storage with LRU tracking and
//! TTL expiration.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::cache::{Cache, CacheEntry, CacheStats, LruTracker};
use crate::config::Config;
use crate::error::Result;

#[derive(Debug)]
struct Inner<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker<K>,
    /// Performance statistics
    stats: CacheStats,
}

impl<K: Eq + Hash + Clone, V> Inner<K, V> {
    fn remove(&mut self, key: &K) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.lru.remove(key);
        }
        removed
    }

    fn sync_total(&mut self) {
        let total = self.entries.len();
        self.stats.set_total_entries(total);
    }
}

// == Memory Cache ==
/// Bounded in-memory cache with LRU eviction and per-entry TTL.
///
/// Expired entries are never returned. They are reclaimed on the next
/// lookup of their key, or in bulk by [`cleanup_expired`](Self::cleanup_expired).
/// All state sits behind a single mutex, so [`reset`](Cache::reset) is
/// atomic with respect to concurrent readers.
pub struct MemoryCache<K, V> {
    inner: Mutex<Inner<K, V>>,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl<K, V> MemoryCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new MemoryCache holding at most `max_entries` entries.
    ///
    /// With a capacity of zero every write is dropped.
    pub fn new(max_entries: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                lru: LruTracker::new(),
                stats: CacheStats::new(),
            }),
            max_entries,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_entries)
    }

    /// Acquires the cache state.
    ///
    /// A panic while the lock was held (e.g. in a user `Clone` impl) may have
    /// left `entries` and `lru` out of step. On recovery both are emptied and
    /// the poison flag cleared, so the cache restarts empty instead of
    /// carrying entries that can never be evicted.
    fn lock(&self) -> MutexGuard<'_, Inner<K, V>> {
        match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => {
                let mut inner = poisoned.into_inner();
                let discarded = inner.entries.len();

                inner.entries.clear();
                inner.lru.clear();
                inner.sync_total();
                self.inner.clear_poison();

                warn!(discarded, "Memory cache lock was poisoned, discarding entries");
                inner
            }
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        let mut inner = self.lock();
        let now = Instant::now();

        let expired_keys: Vec<K> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in &expired_keys {
            inner.remove(key);
        }

        inner.stats.record_expirations(count);
        inner.sync_total();
        count
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut inner = self.lock();
        inner.sync_total();
        inner.stats.clone()
    }

    /// Returns the remaining TTL of a live entry.
    ///
    /// `None` if the key is absent, expired, or never expires.
    pub fn ttl_remaining(&self, key: &K) -> Option<Duration> {
        let inner = self.lock();
        inner
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .and_then(CacheEntry::ttl_remaining)
    }

    /// Returns the number of stored entries, including expired ones not yet
    /// reclaimed.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

impl<K, V> Cache<K, V> for MemoryCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    // == Get ==
    fn get(&self, key: &K) -> Option<V> {
        let mut inner = self.lock();

        let expired = match inner.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                inner.stats.record_miss();
                return None;
            }
        };

        if expired {
            inner.remove(key);
            inner.stats.record_expirations(1);
            inner.stats.record_miss();
            inner.sync_total();
            return None;
        }

        let value = inner.entries.get(key).map(|entry| entry.value.clone());
        inner.stats.record_hit();
        inner.lru.touch(key);
        value
    }

    // == Set ==
    /// Stores a value, evicting the least recently used entry when the
    /// cache is at capacity. Overwrites reset the TTL.
    fn set(&self, key: K, value: V, ttl: Duration) {
        let mut inner = self.lock();

        let is_overwrite = inner.entries.contains_key(&key);

        if !is_overwrite && inner.entries.len() >= self.max_entries {
            match inner.lru.evict_oldest() {
                Some(evicted_key) => {
                    inner.entries.remove(&evicted_key);
                    inner.stats.record_eviction();
                    debug!("Evicted least recently used entry");
                }
                None => {
                    inner.stats.record_dropped_write();
                    warn!(
                        max_entries = self.max_entries,
                        "Cache is full and nothing can be evicted, dropping write"
                    );
                    return;
                }
            }
        }

        inner.lru.touch(&key);
        inner.entries.insert(key, CacheEntry::new(value, ttl));
        inner.sync_total();
    }

    // == Delete ==
    fn delete(&self, keys: &[K]) {
        if keys.is_empty() {
            return;
        }

        let mut inner = self.lock();
        let removed = keys.iter().filter(|key| inner.remove(key)).count();
        inner.sync_total();

        debug!(requested = keys.len(), removed, "Deleted cache entries");
    }

    // == Reset ==
    fn reset(&self) -> Result<()> {
        let mut inner = self.lock();
        let cleared = inner.entries.len();

        inner.entries.clear();
        inner.lru.clear();
        inner.sync_total();

        debug!(cleared, "Cache reset");
        Ok(())
    }
}

impl<K, V> fmt::Debug for MemoryCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry_count = self
            .inner
            .lock()
            .map(|inner| inner.entries.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().entries.len());

        f.debug_struct("MemoryCache")
            .field("entry_count", &entry_count)
            .field("max_entries", &self.max_entries)
            .finish()
    }
}
