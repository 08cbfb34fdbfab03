//! Store Module
//!
//! Defines the [`Store`] contract: a key-value system of record. Unlike the
//! cache, records never expire and targeted absence is reported as
//! [`ContractError::KeyNotFound`](crate::ContractError::KeyNotFound).
//!
//! Backends:
//! - [`MemoryStore`]: thread-safe in-memory store with snapshot enumeration
//! - [`ReadOnlyStore`]: wraps another store and rejects mutation
//! - [`EmptyStore`]: always-empty null object

mod empty;
mod memory;
mod read_only;


use std::sync::Arc;

use crate::error::Result;

pub use empty::EmptyStore;
pub use memory::MemoryStore;
pub use read_only::ReadOnlyStore;

// == Store Contract ==
/// A durable key-value store keyed by `K`.
pub trait Store<K, V>: Send + Sync {
    /// Returns the value for `key`, or `KeyNotFound` if there is none.
    fn load(&self, key: &K) -> Result<V>;

    /// Reports whether `key` is present.
    ///
    /// Absence is `Ok(false)`. An error means presence could not be
    /// determined.
    fn exists(&self, key: &K) -> Result<bool>;

    /// Creates or overwrites the record for `key`.
    ///
    /// Read-only backends return `NotImplemented`.
    fn save(&self, key: K, value: V) -> Result<()>;

    /// Removes the record for `key`, or returns `KeyNotFound` if there was
    /// nothing to remove.
    fn delete(&self, key: &K) -> Result<()>;

    /// Calls `callback` once for every present record.
    ///
    /// Order is backend-defined. Returning `false` from the callback stops the
    /// scan and the call still returns `Ok(())`. A backend failure mid-scan
    /// stops the scan and is returned. Mutating the store from inside the
    /// callback is only allowed where the backend documents it.
    fn enumerate(&self, callback: &mut dyn FnMut(&K, &V) -> bool) -> Result<()>;
}

impl<K, V, S> Store<K, V> for Arc<S>
where
    S: Store<K, V> + ?Sized,
{
    fn load(&self, key: &K) -> Result<V> {
        (**self).load(key)
    }

    fn exists(&self, key: &K) -> Result<bool> {
        (**self).exists(key)
    }

    fn save(&self, key: K, value: V) -> Result<()> {
        (**self).save(key, value)
    }

    fn delete(&self, key: &K) -> Result<()> {
        (**self).delete(key)
    }

    fn enumerate(&self, callback: &mut dyn FnMut(&K, &V) -> bool) -> Result<()> {
        (**self).enumerate(callback)
    }
}
