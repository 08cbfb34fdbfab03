//! Concept - pluggable cache and key-value store contracts
//!
//! Application code holds a [`Cache`] or a [`Store`] and never a concrete
//! backend type, so backends can be swapped without touching call sites.
//! Ships an LRU/TTL in-memory cache, an in-memory store, a read-only store
//! adapter and always-empty null objects for both contracts.

pub mod cache;
pub mod config;
pub mod error;
pub mod store;
pub mod tasks;

pub use cache::{Cache, EmptyCache, MemoryCache, NO_EXPIRY};
pub use config::Config;
pub use error::{ContractError, ErrorKind, Result};
pub use store::{EmptyStore, MemoryStore, ReadOnlyStore, Store};
pub use tasks::{spawn_cleanup_task, spawn_cleanup_task_from_config};
