//! Cacher Trait
//!
//! The set/get/has capability shared by every cache backend.

use crate::cache::Cache;
use crate::error::Result;

/// A store that keeps at most one live value per key.
///
/// [`Cache`] is the in-process implementation. The trait is object safe, so
/// callers can hold a `Box<dyn Cacher<V>>` and swap in another backend.
pub trait Cacher<V> {
    /// Stores `value` under `key` for `ttl` seconds (0 = forever), failing
    /// with `Exists` if the key already holds a live value.
    fn set(&self, key: String, value: V, ttl: u64) -> Result<()>;

    /// Returns the live value under `key`.
    fn get(&self, key: &str) -> Result<V>;

    /// Returns `Ok(true)` if `key` holds a live value.
    fn has(&self, key: &str) -> Result<bool>;
}

impl<V: Clone> Cacher<V> for Cache<V> {
    fn set(&self, key: String, value: V, ttl: u64) -> Result<()> {
        Cache::set(self, key, value, ttl)
    }

    fn get(&self, key: &str) -> Result<V> {
        Cache::get(self, key)
    }

    fn has(&self, key: &str) -> Result<bool> {
        Cache::has(self, key)
    }
}
