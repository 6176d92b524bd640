//! forgetmap: a bounded associative store with least-find-count eviction.
//!
//! A [`map::ForgettingMap`] holds at most a fixed number of associations.
//! Once full, inserting a new entry evicts the key whose `find` operation
//! has been invoked the fewest times, with a deterministic tie-break.
//! See `DESIGN.md` for internal architecture and invariants.

pub mod error;
pub mod map;
pub mod prelude;
pub mod store;
pub mod tracker;
pub mod traits;
