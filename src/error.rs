//! Error types for the forgetmap library.
//!
//! ## Key Components
//!
//! - [`ForgetError`]: Returned when a precondition of `add`, `find`, or the
//!   tracker's selection operations is violated.
//!
//! All variants are unrecoverable precondition violations local to the call:
//! they propagate synchronously to the caller and are never retried
//! internally. A failed operation applies no side effects.
//!
//! ## Example Usage
//!
//! ```
//! use forgetmap::error::ForgetError;
//! use forgetmap::map::ForgettingMap;
//!
//! let map: ForgettingMap<String, i32> = ForgettingMap::new(4);
//!
//! // An absent key is rejected without touching the map.
//! let err = map.add(None, Some(1)).unwrap_err();
//! assert_eq!(err, ForgetError::NullKey);
//! ```

use std::fmt;

/// Error returned by [`ForgettingMap`](crate::map::ForgettingMap) and
/// [`UsageTracker`](crate::tracker::UsageTracker) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForgetError {
    /// An absent key was supplied to `add`, `find`, or `track`.
    NullKey,
    /// An absent value was supplied to `add`.
    NullValue,
    /// `remove_least_used` was invoked while the tracker holds no records.
    ///
    /// This happens when the store is full but none of its keys has ever
    /// been looked up: untracked keys are not eligible for eviction, so
    /// there is nothing to select.
    EmptySelection,
    /// The selected eviction victim could not be located in the record set.
    ///
    /// Invariant check; unreachable as long as the tracker's index and
    /// record sequence stay consistent.
    MissingKey,
}

impl fmt::Display for ForgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForgetError::NullKey => f.write_str("key is absent"),
            ForgetError::NullValue => f.write_str("value is absent"),
            ForgetError::EmptySelection => {
                f.write_str("no tracked records to select an eviction victim from")
            },
            ForgetError::MissingKey => {
                f.write_str("selected eviction victim is missing from the record set")
            },
        }
    }
}

impl std::error::Error for ForgetError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
