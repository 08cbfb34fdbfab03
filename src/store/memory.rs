//! Memory Store Module
//!
//! Thread-safe in-memory key-value store.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, error};

use crate::error::{ContractError, Result};
use crate::store::Store;

// == Memory Store ==
/// In-memory [`Store`] backed by a `HashMap` behind a read-write lock.
///
/// `enumerate` visits records in unspecified (hash) order over a snapshot
/// taken when the scan starts. The callback may therefore read or mutate
/// the store; changes are not seen by the scan in progress.
///
/// A poisoned lock is reported as a backend failure.
pub struct MemoryStore<K, V> {
    records: RwLock<HashMap<K, V>>,
}

impl<K, V> MemoryStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<K, V>>> {
        self.records.read().map_err(|_| {
            error!("Memory store lock poisoned");
            ContractError::backend("memory store lock poisoned")
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<K, V>>> {
        self.records.write().map_err(|_| {
            error!("Memory store lock poisoned");
            ContractError::backend("memory store lock poisoned")
        })
    }

    /// Returns the number of records.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }
}

impl<K, V> Default for MemoryStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            records: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl<K, V> Store<K, V> for MemoryStore<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn load(&self, key: &K) -> Result<V> {
        self.read()?
            .get(key)
            .cloned()
            .ok_or(ContractError::KeyNotFound)
    }

    fn exists(&self, key: &K) -> Result<bool> {
        Ok(self.read()?.contains_key(key))
    }

    fn save(&self, key: K, value: V) -> Result<()> {
        self.write()?.insert(key, value);
        Ok(())
    }

    fn delete(&self, key: &K) -> Result<()> {
        match self.write()?.remove(key) {
            Some(_) => Ok(()),
            None => Err(ContractError::KeyNotFound),
        }
    }

    fn enumerate(&self, callback: &mut dyn FnMut(&K, &V) -> bool) -> Result<()> {
        let snapshot: Vec<(K, V)> = self
            .read()?
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let total = snapshot.len();
        let mut visited = 0;
        for (key, value) in &snapshot {
            visited += 1;
            if !callback(key, value) {
                break;
            }
        }

        debug!(visited, total, "Enumerated memory store");
        Ok(())
    }
}

impl<K, V> fmt::Debug for MemoryStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("MemoryStore");
        match self.records.read() {
            Ok(records) => debug.field("record_count", &records.len()),
            Err(_) => debug.field("record_count", &"<poisoned>"),
        };
        debug.finish()
    }
}
