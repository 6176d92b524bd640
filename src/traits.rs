//! # Usage-Tracking Trait Seams
//!
//! Two small collaborator interfaces split the tracker's responsibilities:
//!
//! | Trait              | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | `UsageRecorder`    | Record successful lookups per key            |
//! | `Forgetting`       | Select and remove the least-used key         |
//!
//! [`UsageTracker`](crate::tracker::UsageTracker) implements both. The
//! [`ForgettingMap`](crate::map::ForgettingMap) facade depends on the
//! concrete tracker; the traits are the seam for alternative selection
//! policies and for tests that only need one half of the contract.

use crate::error::ForgetError;

/// Records how often keys are successfully looked up.
pub trait UsageRecorder<K> {
    /// Record one successful lookup of `key`.
    ///
    /// A first call creates a record with count 1; subsequent calls
    /// increment it. An absent key fails with [`ForgetError::NullKey`]
    /// and records nothing.
    fn track(&mut self, key: impl Into<Option<K>>) -> Result<(), ForgetError>;

    /// Current lookup count for `key`, or `None` if the key is untracked.
    fn usage(&self, key: &K) -> Option<u64>;
}

/// Selects and removes the least-used key from a tracked set.
pub trait Forgetting<K> {
    /// Remove and return the key with the lowest lookup count.
    ///
    /// Among keys tied for the minimum, the one whose record was added
    /// most recently is selected. Fails with
    /// [`ForgetError::EmptySelection`] when no records exist.
    fn remove_least_used(&mut self) -> Result<K, ForgetError>;
}
