//! Cache Store Module
//!
//! Main cache engine: a HashMap of TTL entries behind a single reader/writer
//! lock, with lazy expiration.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cache::entry::CacheEntry;
use crate::cache::stats::Counters;
use crate::cache::{CacheStats, Clock, SystemClock};
use crate::config::CacheOption;
use crate::error::{CacheError, Result};

// == Cache ==
/// Thread-safe key-value cache with optional per-entry TTL.
///
/// Expired entries are never swept in the background. They stay in the map
/// until an operation on the same key (or [`Cache::purge_expired`]) finds
/// them, removes them and reports [`CacheError::Expired`].
///
/// Every operation takes `&self`; wrap the cache in an [`Arc`] to share it
/// between threads.
pub struct Cache<V> {
    /// Key-value storage
    pub(crate) entries: RwLock<HashMap<String, CacheEntry<V>>>,
    /// Time source for stamping and checking expiration
    pub(crate) clock: Arc<dyn Clock>,
    /// Activity counters
    counters: Counters,
}

impl<V> Cache<V> {
    // == Constructor ==
    /// Creates an empty cache reading the system clock.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock: Arc::new(SystemClock),
            counters: Counters::default(),
        }
    }

    /// Creates a cache and applies each option to it in order.
    ///
    /// ```
    /// use mini_ttl_cache::{config, Cache, CacheOption, ManualClock};
    ///
    /// let warm_up: CacheOption<u32> = Box::new(|cache: &mut Cache<u32>| {
    ///     cache.set("warm", 1, 0).unwrap();
    /// });
    ///
    /// let clock = ManualClock::new(0);
    /// let cache = Cache::with_options([
    ///     config::with_capacity(64),
    ///     config::with_clock(clock.clone()),
    ///     warm_up,
    /// ]);
    ///
    /// assert_eq!(cache.get("warm"), Ok(1));
    /// ```
    pub fn with_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = CacheOption<V>>,
    {
        let mut cache = Self::new();
        for option in options {
            option(&mut cache);
        }
        cache
    }

    // == Set ==
    /// Stores `value` under `key` unless the key already holds a live value.
    ///
    /// `ttl` is in seconds; 0 means the entry never expires. An entry that
    /// is already past its expiration is replaced. The check and the write
    /// happen under one exclusive lock, so among concurrent sets on the same
    /// free key exactly one succeeds.
    ///
    /// # Errors
    /// [`CacheError::Exists`] if the key holds a live value. The stored
    /// value is left untouched.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: u64) -> Result<()> {
        let key = key.into();
        let now = self.clock.now();

        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(&key) {
            if !existing.is_expired_at(now) {
                self.counters.record_rejected_set();
                return Err(CacheError::Exists(key));
            }
            self.counters.record_expirations(1);
            debug!(key = %key, "set replaced expired entry");
        }

        entries.insert(key.clone(), CacheEntry::new(value, ttl, now));
        trace!(key = %key, ttl, "stored entry");
        Ok(())
    }

    // == Has ==
    /// Reports whether `key` holds a live value.
    ///
    /// Returns `Ok(true)` for a live entry. The `false` outcomes are carried
    /// by the error, which tells a key that never existed apart from one
    /// that just lapsed.
    ///
    /// # Errors
    /// - [`CacheError::NotFound`] if there is no entry for `key`
    /// - [`CacheError::Expired`] if the entry was past its expiration; it
    ///   has been removed, so the next call reports `NotFound`
    pub fn has(&self, key: &str) -> Result<bool> {
        self.observe(key, "has", |_, _| true)
    }

    /// Like [`Cache::has`], collapsing both error outcomes into `false`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.has(key).is_ok()
    }

    // == Time To Live ==
    /// Returns the whole seconds left before `key` expires, or `None` if it
    /// never expires.
    ///
    /// # Errors
    /// Same as [`Cache::has`].
    pub fn ttl_remaining(&self, key: &str) -> Result<Option<u64>> {
        self.observe(key, "ttl_remaining", |entry, now| entry.ttl_remaining_at(now))
    }

    // == Delete ==
    /// Removes `key` and returns its value.
    ///
    /// # Errors
    /// - [`CacheError::NotFound`] if there is no entry for `key`
    /// - [`CacheError::Expired`] if the entry was past its expiration; it is
    ///   removed all the same
    pub fn delete(&self, key: &str) -> Result<V> {
        let now = self.clock.now();

        let removed = self.entries.write().remove(key);
        match removed {
            None => Err(CacheError::NotFound(key.to_string())),
            Some(entry) if entry.is_expired_at(now) => {
                self.counters.record_expirations(1);
                debug!(key, "delete removed expired entry");
                Err(CacheError::Expired(key.to_string()))
            }
            Some(entry) => Ok(entry.value),
        }
    }

    // == Purge Expired ==
    /// Removes every entry that is past its expiration.
    ///
    /// Runs only when called. Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();

        let removed = {
            let mut entries = self.entries.write();
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_expired_at(now));
            before - entries.len()
        };

        if removed > 0 {
            self.counters.record_expirations(removed as u64);
            debug!("purge removed {} expired entries", removed);
        } else {
            trace!("purge found no expired entries");
        }
        removed
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    // == Length ==
    /// Returns the number of entries in the store, including expired ones
    /// that have not been observed yet.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.len())
    }

    /// Looks `key` up and applies `read` to it if live, removing it if expired.
    ///
    /// The check runs under the shared lock. Only an expired hit takes the
    /// exclusive lock, and it re-checks the entry there: another thread may
    /// have removed it or replaced it with a live one in between.
    fn observe<T>(
        &self,
        key: &str,
        op: &'static str,
        read: impl FnOnce(&CacheEntry<V>, i64) -> T,
    ) -> Result<T> {
        let now = self.clock.now();

        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return Err(CacheError::NotFound(key.to_string())),
                Some(entry) if !entry.is_expired_at(now) => return Ok(read(entry, now)),
                Some(_) => {}
            }
        }

        let mut entries = self.entries.write();
        match entries.get(key) {
            None => return Err(CacheError::NotFound(key.to_string())),
            Some(entry) if !entry.is_expired_at(now) => return Ok(read(entry, now)),
            Some(_) => {}
        }

        entries.remove(key);
        self.counters.record_expirations(1);
        debug!(key, op, "removed expired entry");
        Err(CacheError::Expired(key.to_string()))
    }
}

impl<V: Clone> Cache<V> {
    // == Get ==
    /// Returns a clone of the live value stored under `key`.
    ///
    /// # Errors
    /// Same as [`Cache::has`].
    pub fn get(&self, key: &str) -> Result<V> {
        let result = self.observe(key, "get", |entry, _| entry.value.clone());
        match result {
            Ok(_) => self.counters.record_hit(),
            Err(_) => self.counters.record_miss(),
        }
        result
    }
}

impl<V> Default for Cache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Cache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("len", &self.len())
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
