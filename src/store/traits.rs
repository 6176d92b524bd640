//! Storage traits for the forgetting map's primary data.
//!
//! The facade consumes exactly this boundary: `get`, `insert` (put),
//! `remove`, and `len`, all with concurrent-safe per-key semantics. Stores
//! never enforce a capacity; eviction is the facade's job.

use std::sync::Arc;

/// Snapshot of store-level metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreMetrics {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub updates: u64,
    pub removes: u64,
    pub evictions: u64,
}

/// Read-side store operations common to all backends.
pub trait StoreCore<K, V> {
    /// Fetch a value by key.
    fn get(&self, key: &K) -> Option<Arc<V>>;

    /// Check if a key exists.
    fn contains(&self, key: &K) -> bool;

    /// Current number of entries.
    fn len(&self) -> usize;

    /// Check if the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot the store's current metrics.
    fn metrics(&self) -> StoreMetrics {
        StoreMetrics::default()
    }

    /// Record that the facade evicted an entry.
    fn record_eviction(&self) {}
}

/// Write-side operations for concurrent backends (interior mutability).
pub trait ConcurrentStore<K, V>: StoreCore<K, V> + Send + Sync {
    /// Insert or update a value. Returns the previous value if present.
    fn insert(&self, key: K, value: Arc<V>) -> Option<Arc<V>>;

    /// Remove a value by key.
    fn remove(&self, key: &K) -> Option<Arc<V>>;

    /// Remove all entries.
    fn clear(&self);
}

/// Factory trait for creating store instances.
pub trait StoreFactory<K, V> {
    type Store: StoreCore<K, V>;

    /// Create a new, empty store.
    fn create() -> Self::Store;
}
