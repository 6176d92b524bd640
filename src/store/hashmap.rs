//! HashMap-backed concurrent store.
//!
//! ## Architecture
//! - Entries live in a `HashMap<K, Arc<V>>` behind a `parking_lot::RwLock`.
//! - Values are handed out as `Arc<V>` clones, so readers never hold the
//!   lock past the lookup itself.
//! - Hit/miss/insert/update/remove/eviction counters use relaxed atomics.
//!
//! ## Thread Safety
//! - Per-key `get`/`insert`/`remove` are atomic with respect to each other.
//! - Compound sequences (size check, then insert) are **not** atomic here;
//!   the [`map`](crate::map) facade serializes those.
//!
//! ## Example Usage
//! ```
//! use std::sync::Arc;
//!
//! use forgetmap::store::hashmap::ConcurrentMapStore;
//! use forgetmap::store::traits::{ConcurrentStore, StoreCore};
//!
//! let store: ConcurrentMapStore<u64, String> = ConcurrentMapStore::new();
//! store.insert(1, Arc::new("a".to_string()));
//! assert!(store.contains(&1));
//! ```

use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::store::traits::{ConcurrentStore, StoreCore, StoreFactory, StoreMetrics};

/// Store metrics counters shared across reader and writer threads.
#[derive(Debug, Default)]
struct StoreCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    updates: AtomicU64,
    removes: AtomicU64,
    evictions: AtomicU64,
}

impl StoreCounters {
    /// Snapshot current store metrics.
    fn snapshot(&self) -> StoreMetrics {
        StoreMetrics {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            removes: self.removes.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    fn inc_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_remove(&self) {
        self.removes.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }
}

/// Concurrent HashMap-backed store using interior mutability.
#[derive(Debug)]
pub struct ConcurrentMapStore<K, V, S = RandomState> {
    map: RwLock<HashMap<K, Arc<V>, S>>,
    metrics: StoreCounters,
}

impl<K, V> ConcurrentMapStore<K, V, RandomState>
where
    K: Eq + Hash,
{
    /// Create an empty store with the default hasher.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<K, V> Default for ConcurrentMapStore<K, V, RandomState>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ConcurrentMapStore<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Create an empty store with a custom hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            map: RwLock::new(HashMap::with_hasher(hasher)),
            metrics: StoreCounters::default(),
        }
    }
}

impl<K, V, S> StoreCore<K, V> for ConcurrentMapStore<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Send + Sync,
{
    /// Fetch a value by key.
    fn get(&self, key: &K) -> Option<Arc<V>> {
        match self.map.read().get(key).cloned() {
            Some(value) => {
                self.metrics.inc_hit();
                Some(value)
            },
            None => {
                self.metrics.inc_miss();
                None
            },
        }
    }

    /// Check whether a key exists.
    fn contains(&self, key: &K) -> bool {
        self.map.read().contains_key(key)
    }

    /// Return the number of entries.
    fn len(&self) -> usize {
        self.map.read().len()
    }

    /// Snapshot store metrics.
    fn metrics(&self) -> StoreMetrics {
        self.metrics.snapshot()
    }

    /// Record an eviction.
    fn record_eviction(&self) {
        self.metrics.inc_eviction();
    }
}

impl<K, V, S> ConcurrentStore<K, V> for ConcurrentMapStore<K, V, S>
where
    K: Eq + Hash + Send + Sync,
    V: Send + Sync,
    S: BuildHasher + Send + Sync,
{
    /// Insert or update an entry, returning the previous value.
    fn insert(&self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        let previous = self.map.write().insert(key, value);
        if previous.is_some() {
            self.metrics.inc_update();
        } else {
            self.metrics.inc_insert();
        }
        previous
    }

    /// Remove a value by key.
    fn remove(&self, key: &K) -> Option<Arc<V>> {
        let removed = self.map.write().remove(key);
        if removed.is_some() {
            self.metrics.inc_remove();
        }
        removed
    }

    /// Clear all entries.
    fn clear(&self) {
        self.map.write().clear()
    }
}

impl<K, V> StoreFactory<K, V> for ConcurrentMapStore<K, V, RandomState>
where
    K: Eq + Hash + Send + Sync,
    V: Send + Sync,
{
    type Store = ConcurrentMapStore<K, V, RandomState>;

    /// Create a new, empty store.
    fn create() -> Self::Store {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod basic_operations {
        use super::*;

        #[test]
        fn insert_then_get_round_trips() {
            let store: ConcurrentMapStore<u64, String> = ConcurrentMapStore::new();

            assert_eq!(store.insert(1, Arc::new("one".to_string())), None);
            assert_eq!(store.get(&1).as_deref(), Some(&"one".to_string()));
            assert_eq!(store.len(), 1);
        }

        #[test]
        fn insert_returns_previous_value_on_update() {
            let store: ConcurrentMapStore<u64, i32> = ConcurrentMapStore::new();

            store.insert(7, Arc::new(1));
            let previous = store.insert(7, Arc::new(2));
            assert_eq!(previous.as_deref(), Some(&1));
            assert_eq!(store.get(&7).as_deref(), Some(&2));
            assert_eq!(store.len(), 1);
        }

        #[test]
        fn remove_deletes_and_returns_value() {
            let store: ConcurrentMapStore<&str, i32> = ConcurrentMapStore::new();

            store.insert("k", Arc::new(9));
            assert_eq!(store.remove(&"k").as_deref(), Some(&9));
            assert_eq!(store.remove(&"k"), None);
            assert!(store.is_empty());
        }

        #[test]
        fn clear_empties_the_store() {
            let store: ConcurrentMapStore<u64, u64> = ConcurrentMapStore::new();
            for i in 0..10 {
                store.insert(i, Arc::new(i));
            }

            store.clear();
            assert!(store.is_empty());
            assert!(!store.contains(&3));
        }
    }

    mod metrics {
        use super::*;

        #[test]
        fn counters_reflect_operations() {
            let store: ConcurrentMapStore<u64, u64> = ConcurrentMapStore::new();

            store.insert(1, Arc::new(1)); // insert
            store.insert(1, Arc::new(2)); // update
            store.get(&1); // hit
            store.get(&2); // miss
            store.remove(&1); // remove
            store.record_eviction();

            let metrics = store.metrics();
            assert_eq!(metrics.inserts, 1);
            assert_eq!(metrics.updates, 1);
            assert_eq!(metrics.hits, 1);
            assert_eq!(metrics.misses, 1);
            assert_eq!(metrics.removes, 1);
            assert_eq!(metrics.evictions, 1);
        }
    }

    mod concurrency {
        use super::*;
        use std::thread;

        #[test]
        fn parallel_inserts_all_land() {
            let store: Arc<ConcurrentMapStore<u64, u64>> = Arc::new(ConcurrentMapStore::new());
            let threads = 8;
            let per_thread = 100;

            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let store = store.clone();
                    thread::spawn(move || {
                        for i in 0..per_thread {
                            let key = t * per_thread + i;
                            store.insert(key, Arc::new(key));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            assert_eq!(store.len(), (threads * per_thread) as usize);
            for key in 0..threads * per_thread {
                assert_eq!(store.get(&key).as_deref(), Some(&key));
            }
        }
    }
}
