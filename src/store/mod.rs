//! Primary storage backends for the forgetting map.
//!
//! Stores own key/value data and provide concurrent-safe get/put/remove/size.
//! Capacity policy lives in the [`map`](crate::map) facade, not here: a store
//! is an unbounded container, and the facade decides when to evict.

pub mod hashmap;
pub mod traits;
