//! Cache Module
//!
//! Provides thread-safe in-memory caching with lazy TTL expiration.

mod cacher;
mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use cacher::Cacher;
pub use clock::{Clock, ManualClock, SystemClock};
pub use stats::CacheStats;
pub use store::Cache;
