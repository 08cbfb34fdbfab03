//! Read-Only Store Module
//!
//! Adapter that exposes any store without its mutating operations.

use std::marker::PhantomData;

use tracing::debug;

use crate::error::{ContractError, Result};
use crate::store::Store;

// == Read-Only Store ==
/// Wraps a store so that `save` and `delete` return `NotImplemented`.
///
/// `delete` of an absent key still returns `KeyNotFound`, as for any other
/// store. Reads and enumeration go straight to the wrapped store.
#[derive(Debug)]
pub struct ReadOnlyStore<S, K, V> {
    inner: S,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<S, K, V> ReadOnlyStore<S, K, V>
where
    S: Store<K, V>,
{
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    /// Returns the wrapped store.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, K, V> Store<K, V> for ReadOnlyStore<S, K, V>
where
    S: Store<K, V>,
{
    fn load(&self, key: &K) -> Result<V> {
        self.inner.load(key)
    }

    fn exists(&self, key: &K) -> Result<bool> {
        self.inner.exists(key)
    }

    fn save(&self, _key: K, _value: V) -> Result<()> {
        debug!("Rejected save on read-only store");
        Err(ContractError::NotImplemented)
    }

    fn delete(&self, key: &K) -> Result<()> {
        if !self.inner.exists(key)? {
            return Err(ContractError::KeyNotFound);
        }

        debug!("Rejected delete on read-only store");
        Err(ContractError::NotImplemented)
    }

    fn enumerate(&self, callback: &mut dyn FnMut(&K, &V) -> bool) -> Result<()> {
        self.inner.enumerate(callback)
    }
}
