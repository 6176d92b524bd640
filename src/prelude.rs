pub use crate::error::ForgetError;
pub use crate::map::{ForgettingMap, MAX_ASSOCIATIONS};
pub use crate::store::hashmap::ConcurrentMapStore;
pub use crate::store::traits::{ConcurrentStore, StoreCore, StoreFactory, StoreMetrics};
pub use crate::tracker::UsageTracker;
pub use crate::traits::{Forgetting, UsageRecorder};
