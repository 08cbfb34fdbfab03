//! Empty Cache Module
//!
//! A cache that never holds anything.

use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use crate::cache::Cache;
use crate::error::{ContractError, Result};

// == Empty Cache ==
/// Always-empty cache.
///
/// `get` reports absence, `set` and `delete` do nothing, and `reset` returns
/// [`ContractError::NotImplemented`]. Stands in for a real backend when
/// caching is turned off.
pub struct EmptyCache<K, V> {
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> EmptyCache<K, V> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<K, V> Default for EmptyCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for EmptyCache<K, V> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for EmptyCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmptyCache").finish()
    }
}

impl<K, V> Cache<K, V> for EmptyCache<K, V> {
    fn get(&self, _key: &K) -> Option<V> {
        None
    }

    fn set(&self, _key: K, _value: V, _ttl: Duration) {}

    fn delete(&self, _keys: &[K]) {}

    fn reset(&self) -> Result<()> {
        Err(ContractError::NotImplemented)
    }
}
