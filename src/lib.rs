//! Mini TTL Cache - A lightweight in-process key-value cache
//!
//! Thread-safe string-keyed storage with optional per-entry time-to-live.
//! Expiration is lazy: an entry past its TTL stays in memory until the next
//! operation on its key notices, removes it and reports
//! [`CacheError::Expired`] exactly once.
//!
//! ```
//! use mini_ttl_cache::{Cache, CacheError};
//!
//! let cache = Cache::new();
//!
//! cache.set("a", 1, 0).unwrap();
//! assert_eq!(cache.get("a"), Ok(1));
//!
//! // A live key is never overwritten
//! assert!(matches!(cache.set("a", 2, 0), Err(CacheError::Exists(_))));
//! assert!(matches!(cache.has("e"), Err(CacheError::NotFound(_))));
//! ```
//!
//! Share a cache between threads with an [`std::sync::Arc`]; every
//! operation takes `&self`.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheStats, Cacher, Clock, ManualClock, SystemClock};
pub use config::CacheOption;
pub use error::{CacheError, Result};
