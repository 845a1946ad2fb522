//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// A stored value and its expiration metadata.
///
/// Timestamps are whole seconds since the Unix epoch as reported by the
/// cache's clock.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub(crate) value: V,
    /// Expiration timestamp, None = no expiration
    pub(crate) expires_at: Option<i64>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now`.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_seconds` - TTL in seconds, 0 = never expires
    /// * `now` - Current timestamp
    pub(crate) fn new(value: V, ttl_seconds: u64, now: i64) -> Self {
        let expires_at = match ttl_seconds {
            0 => None,
            ttl => Some(now.saturating_add(i64::try_from(ttl).unwrap_or(i64::MAX))),
        };

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// An entry is expired only once `now` is strictly past its expiration
    /// timestamp; at the expiration second itself it is still live.
    pub(crate) fn is_expired_at(&self, now: i64) -> bool {
        match self.expires_at {
            Some(expires) => expires < now,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL in seconds at `now`, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(0)` once the expiration second has been reached
    /// - `Some(remaining)` if the entry has TTL and hasn't expired
    /// - `None` if the entry has no TTL (never expires)
    pub(crate) fn ttl_remaining_at(&self, now: i64) -> Option<u64> {
        self.expires_at
            .map(|expires| u64::try_from(expires.saturating_sub(now)).unwrap_or(0))
    }
}
