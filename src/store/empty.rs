//! Empty Store Module

use std::fmt;
use std::marker::PhantomData;

use crate::error::{ContractError, Result};
use crate::store::Store;

// == Empty Store ==
/// Always-empty, read-only store.
///
/// `load` and `delete` return `KeyNotFound`, `exists` returns `Ok(false)`,
/// `save` returns `NotImplemented` and `enumerate` never calls its callback.
pub struct EmptyStore<K, V> {
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> EmptyStore<K, V> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K, V> Default for EmptyStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for EmptyStore<K, V> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for EmptyStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmptyStore").finish()
    }
}

impl<K, V> Store<K, V> for EmptyStore<K, V> {
    fn load(&self, _key: &K) -> Result<V> {
        Err(ContractError::KeyNotFound)
    }

    fn exists(&self, _key: &K) -> Result<bool> {
        Ok(false)
    }

    fn save(&self, _key: K, _value: V) -> Result<()> {
        Err(ContractError::NotImplemented)
    }

    fn delete(&self, _key: &K) -> Result<()> {
        Err(ContractError::KeyNotFound)
    }

    fn enumerate(&self, _callback: &mut dyn FnMut(&K, &V) -> bool) -> Result<()> {
        Ok(())
    }
}
