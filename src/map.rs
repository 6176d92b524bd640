//! # Forgetting Map
//!
//! A bounded key→value map that, once full, forgets the association whose
//! `find` operation has been invoked the fewest times.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                     ForgettingMap<K, V, S>                       │
//!   │                                                                  │
//!   │   store: S (ConcurrentStore)      tracker: Mutex<UsageTracker>   │
//!   │   ┌─────────┬──────────┐          ┌─────────┬───────┐            │
//!   │   │   Key   │  Arc<V>  │          │   Key   │ Count │            │
//!   │   ├─────────┼──────────┤          ├─────────┼───────┤            │
//!   │   │   "x"   │   "1"    │          │   "x"   │   1   │            │
//!   │   │   "y"   │   "2"    │          │   "y"   │   2   │            │
//!   │   │   "z"   │   "3"    │          └─────────┴───────┘            │
//!   │   └─────────┴──────────┘            "z" never found: untracked   │
//!   │                                                                  │
//!   │   maximum_associations: usize (clamped to MAX_ASSOCIATIONS)      │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Eviction Flow
//!
//! ```text
//!   add(key, value)
//!        │
//!        ▼
//!   ┌────────────────────────────────────────────────────────────┐
//!   │ Key or value absent?  → fail, no side effects              │
//!   └────────────────────────────────────────────────────────────┘
//!        │
//!        ▼  (tracker mutex held from here to the insert)
//!   ┌────────────────────────────────────────────────────────────┐
//!   │ store.len() >= maximum_associations?                       │
//!   │                                                            │
//!   │   NO  → insert/overwrite                                   │
//!   │   YES → tracker.remove_least_used() picks the victim,      │
//!   │         victim leaves tracker and store, then insert       │
//!   └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tracked vs Untracked Keys
//!
//! The tracker's record set is neither a superset nor a subset of the
//! store's key set. A key added but never found has no record and is
//! never eligible for eviction — it is pinned until its first successful
//! `find`. If the store is full and *nothing* is tracked, `add` fails
//! with [`ForgetError::EmptySelection`] rather than evicting blindly.
//! That asymmetry is the documented contract, not an oversight.
//!
//! ## Concurrency
//!
//! - All tracker access goes through a single `parking_lot::Mutex`, so
//!   counter updates are race-free and one `add` evicts at most one key.
//!   The store never exceeds `maximum_associations` through `add` itself.
//! - The store lookup in `find` happens outside the tracker lock. A hit
//!   can therefore race an eviction and re-track a key that just left
//!   the store, leaving a stale record until that key is evicted again.
//!   Accepted trade-off; the alternative would hold the tracker lock
//!   across every read.

use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::ForgetError;
use crate::store::hashmap::ConcurrentMapStore;
use crate::store::traits::{ConcurrentStore, StoreFactory, StoreMetrics};
use crate::tracker::UsageTracker;

/// Largest permitted association ceiling.
///
/// Construction clamps larger requests down to this bound instead of
/// rejecting them, keeping the backing table within safe allocation
/// limits.
pub const MAX_ASSOCIATIONS: usize = 1 << 30;

/// Bounded associative store with least-find-count eviction.
///
/// Owns a concurrent primary store and a [`UsageTracker`]; the public
/// surface is `add`, `find`, and `maximum_associations`, plus read-only
/// inspection helpers.
///
/// # Example
///
/// ```
/// use forgetmap::map::ForgettingMap;
///
/// let map: ForgettingMap<&str, &str> = ForgettingMap::new(2);
/// map.add("x", "1").unwrap();
/// map.find(&"x").unwrap();
/// map.add("y", "2").unwrap();
/// map.find(&"y").unwrap();
/// map.find(&"y").unwrap();
///
/// // Full; "x" (1 find) loses to "y" (2 finds).
/// map.add("z", "3").unwrap();
/// assert_eq!(map.find(&"x").unwrap(), None);
/// assert_eq!(map.find(&"z").unwrap().as_deref(), Some(&"3"));
/// ```
#[derive(Debug)]
pub struct ForgettingMap<K, V, S = ConcurrentMapStore<K, V>> {
    store: S,
    tracker: Mutex<UsageTracker<K>>,
    maximum_associations: usize,
    _value: PhantomData<fn() -> V>,
}

impl<K, V> ForgettingMap<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Create a map holding at most `maximum_associations` entries.
    ///
    /// Values above [`MAX_ASSOCIATIONS`] are silently capped.
    pub fn new(maximum_associations: usize) -> Self {
        Self::with_store(maximum_associations, ConcurrentMapStore::create())
    }
}

impl<K, V, S> ForgettingMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: ConcurrentStore<K, V>,
{
    /// Create a map over a caller-provided primary store.
    ///
    /// The store is assumed empty; entries it already holds would be
    /// invisible to capacity accounting until evicted.
    pub fn with_store(maximum_associations: usize, store: S) -> Self {
        Self {
            store,
            tracker: Mutex::new(UsageTracker::new()),
            maximum_associations: maximum_associations.min(MAX_ASSOCIATIONS),
            _value: PhantomData,
        }
    }

    /// Associate `value` with `key`, evicting the least-found key first
    /// when the map is at capacity.
    ///
    /// Returns the value previously associated with `key`, if any. An
    /// absent key or value fails with [`ForgetError::NullKey`] /
    /// [`ForgetError::NullValue`] before any side effect. When full with
    /// zero tracked keys, fails with [`ForgetError::EmptySelection`] and
    /// inserts nothing.
    ///
    /// An at-capacity `add` evicts even when `key` already exists (the
    /// overwrite does not bypass eviction), and the victim may be `key`
    /// itself.
    pub fn add(
        &self,
        key: impl Into<Option<K>>,
        value: impl Into<Option<V>>,
    ) -> Result<Option<Arc<V>>, ForgetError> {
        let Some(key) = key.into() else {
            return Err(ForgetError::NullKey);
        };
        let Some(value) = value.into() else {
            return Err(ForgetError::NullValue);
        };

        // Held across the whole evict-then-insert compound, so concurrent
        // adds cannot both observe "at capacity" and over-evict.
        let mut tracker = self.tracker.lock();
        if self.store.len() >= self.maximum_associations {
            let victim = tracker.remove_least_used()?;
            self.store.remove(&victim);
            self.store.record_eviction();
        }
        Ok(self.store.insert(key, Arc::new(value)))
    }

    /// Look up `key`, recording the hit in the usage tracker.
    ///
    /// A missing key is a normal `Ok(None)` with no tracking side
    /// effect; only an absent-sentinel key fails, with
    /// [`ForgetError::NullKey`].
    pub fn find<'k>(&self, key: impl Into<Option<&'k K>>) -> Result<Option<Arc<V>>, ForgetError>
    where
        K: 'k,
    {
        let Some(key) = key.into() else {
            return Err(ForgetError::NullKey);
        };
        match self.store.get(key) {
            Some(value) => {
                self.tracker.lock().track(key.clone())?;
                Ok(Some(value))
            },
            None => Ok(None),
        }
    }

    /// The configured association ceiling, after clamping.
    pub fn maximum_associations(&self) -> usize {
        self.maximum_associations
    }

    /// Current number of associations.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the map holds no associations.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Check whether `key` is present, without tracking a lookup.
    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    /// Successful-find count for `key`, or `None` if never found.
    pub fn usage(&self, key: &K) -> Option<u64> {
        self.tracker.lock().usage(key)
    }

    /// Number of keys with a usage record.
    pub fn tracked_len(&self) -> usize {
        self.tracker.lock().len()
    }

    /// Snapshot the primary store's metrics.
    pub fn metrics(&self) -> StoreMetrics {
        self.store.metrics()
    }
}
