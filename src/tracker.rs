//! # Usage Tracker
//!
//! Records, per key, how many times that key has been successfully looked
//! up, and selects the least-looked-up key for eviction.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                     UsageTracker<K>                          │
//!   │                                                              │
//!   │   records: Vec<Record<K>>        (first-track order)         │
//!   │   ┌─────────┬───────┐                                        │
//!   │   │   Key   │ Count │                                        │
//!   │   ├─────────┼───────┤                                        │
//!   │   │ page_a  │   1   │  ← tied minimum, tracked first         │
//!   │   │ page_b  │   1   │  ← tied minimum, tracked last: VICTIM  │
//!   │   │ page_c  │   5   │                                        │
//!   │   └─────────┴───────┘                                        │
//!   │                                                              │
//!   │   index: FxHashMap<K, usize>     (key → slot in records)     │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection Semantics
//!
//! `remove_least_used` performs a two-pass snapshot scan:
//!
//! 1. Compute the minimum count over all records.
//! 2. Collect every key with that count, in first-track order.
//! 3. One candidate: evict it. Several: evict the **last** of the tied
//!    group, the key whose record was added *most recently*.
//!
//! The asymmetric tie-break is the point of this structure. It differs
//! from both pure LRU and insertion-order LFU tie-breaking and must not
//! be changed without changing the map's documented eviction contract.
//!
//! ## Record Lifecycle
//!
//! ```text
//!   track(key)           first call creates a record with count = 1,
//!        │               appended at the end of the order
//!        ▼
//!   count += 1           every later track; monotonic while tracked
//!        │
//!        ▼
//!   remove_least_used()  record destroyed exactly when its key is
//!                        chosen as eviction victim
//! ```
//!
//! ## Thread Safety
//!
//! `UsageTracker` is **not** thread-safe. The
//! [`ForgettingMap`](crate::map::ForgettingMap) facade guards all tracker
//! operations, structural and counting alike, with a single
//! `parking_lot::Mutex`.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::ForgetError;
use crate::traits::{Forgetting, UsageRecorder};

/// One tracked key and its successful-lookup count.
#[derive(Debug, Clone)]
struct Record<K> {
    key: K,
    count: u64,
}

/// Tracks successful lookups per key, in first-track order, and selects
/// the least-used key for eviction.
///
/// # Example
///
/// ```
/// use forgetmap::tracker::UsageTracker;
///
/// let mut tracker: UsageTracker<&str> = UsageTracker::new();
/// tracker.track("a").unwrap();
/// tracker.track("b").unwrap();
/// tracker.track("b").unwrap();
///
/// // "a" has the lowest count.
/// assert_eq!(tracker.remove_least_used().unwrap(), "a");
/// assert_eq!(tracker.usage(&"a"), None);
/// ```
#[derive(Debug, Default)]
pub struct UsageTracker<K> {
    /// Records in the order keys were first tracked.
    records: Vec<Record<K>>,
    /// Key → slot in `records`.
    index: FxHashMap<K, usize>,
}

impl<K> UsageTracker<K>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Record one successful lookup of `key`.
    ///
    /// A first call appends a record with count 1 at the end of the
    /// first-track order; later calls increment the existing count
    /// (saturating). An absent key fails with [`ForgetError::NullKey`]
    /// and mutates nothing.
    pub fn track(&mut self, key: impl Into<Option<K>>) -> Result<(), ForgetError> {
        let Some(key) = key.into() else {
            return Err(ForgetError::NullKey);
        };
        match self.index.get(&key) {
            Some(&slot) => {
                let count = &mut self.records[slot].count;
                *count = count.saturating_add(1);
            },
            None => {
                self.index.insert(key.clone(), self.records.len());
                self.records.push(Record { key, count: 1 });
            },
        }
        Ok(())
    }

    /// Remove and return the key with the lowest lookup count.
    ///
    /// Candidates tied for the minimum are considered in first-track
    /// order; with exactly one candidate that key is evicted, otherwise
    /// the **last** of the tied group is. Fails with
    /// [`ForgetError::EmptySelection`] when the tracker holds no records,
    /// and with [`ForgetError::MissingKey`] if the chosen key is absent
    /// from the index (inconsistent tracker state).
    pub fn remove_least_used(&mut self) -> Result<K, ForgetError> {
        // Pass 1: minimum over a stable snapshot of the counts.
        let Some(min) = self.records.iter().map(|record| record.count).min() else {
            return Err(ForgetError::EmptySelection);
        };

        // Pass 2: tied candidates in first-track order.
        let candidates: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.count == min)
            .map(|(slot, _)| slot)
            .collect();

        let slot = match candidates.as_slice() {
            [] => return Err(ForgetError::EmptySelection),
            [only] => *only,
            [.., last] => *last,
        };

        if !self.index.contains_key(&self.records[slot].key) {
            return Err(ForgetError::MissingKey);
        }

        let record = self.records.remove(slot);
        self.index.remove(&record.key);

        // Slots after the removal point shifted down by one.
        for (slot, record) in self.records.iter().enumerate().skip(slot) {
            if let Some(entry) = self.index.get_mut(&record.key) {
                *entry = slot;
            }
        }

        Ok(record.key)
    }

    /// Current lookup count for `key`, or `None` if untracked.
    pub fn usage(&self, key: &K) -> Option<u64> {
        self.index.get(key).map(|&slot| self.records[slot].count)
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no keys are tracked.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tracked keys in first-track order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.records.iter().map(|record| &record.key)
    }
}

impl<K> UsageRecorder<K> for UsageTracker<K>
where
    K: Eq + Hash + Clone,
{
    fn track(&mut self, key: impl Into<Option<K>>) -> Result<(), ForgetError> {
        UsageTracker::track(self, key)
    }

    fn usage(&self, key: &K) -> Option<u64> {
        UsageTracker::usage(self, key)
    }
}

impl<K> Forgetting<K> for UsageTracker<K>
where
    K: Eq + Hash + Clone,
{
    fn remove_least_used(&mut self) -> Result<K, ForgetError> {
        UsageTracker::remove_least_used(self)
    }
}
