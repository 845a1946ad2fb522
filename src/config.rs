//! Configuration Module
//!
//! Construction-time options for [`Cache`]. An option is any closure that
//! receives the freshly built cache; [`Cache::with_options`] runs them in
//! order before handing the cache out.

use std::sync::Arc;

use crate::cache::{Cache, Clock};

/// A configuration step applied to a new cache.
pub type CacheOption<V> = Box<dyn FnOnce(&mut Cache<V>)>;

/// Pre-sizes the backing map to hold at least `capacity` entries.
///
/// This is an allocation hint, not a bound: the cache still grows past it.
pub fn with_capacity<V: 'static>(capacity: usize) -> CacheOption<V> {
    Box::new(move |cache: &mut Cache<V>| {
        cache.entries.get_mut().reserve(capacity);
    })
}

/// Replaces the time source used to stamp and check expiration.
pub fn with_clock<V, C>(clock: C) -> CacheOption<V>
where
    V: 'static,
    C: Clock + 'static,
{
    Box::new(move |cache: &mut Cache<V>| {
        cache.clock = Arc::new(clock);
    })
}

/// Preloads `(key, value, ttl)` entries with the usual set rules.
///
/// Entries are stamped with the clock in place when this option runs, so
/// put it after [`with_clock`]. A key that repeats while still live keeps
/// its first value.
pub fn with_entries<V, I, K>(entries: I) -> CacheOption<V>
where
    V: 'static,
    I: IntoIterator<Item = (K, V, u64)> + 'static,
    K: Into<String> + 'static,
{
    Box::new(move |cache: &mut Cache<V>| {
        for (key, value, ttl) in entries {
            let _ = cache.set(key, value, ttl);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::error::CacheError;

    #[test]
    fn test_options_apply_in_order() {
        let clock = ManualClock::new(1_000);
        let cache = Cache::with_options([
            with_capacity(16),
            with_clock(clock.clone()),
            with_entries(vec![("a", 1, 0), ("b", 2, 5), ("a", 3, 0)]),
        ]);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), Ok(1));
        assert_eq!(cache.ttl_remaining("b"), Ok(Some(5)));

        clock.advance(6);
        assert!(matches!(cache.get("b"), Err(CacheError::Expired(_))));
    }

    #[test]
    fn test_with_capacity_reserves() {
        let cache: Cache<u8> = Cache::with_options([with_capacity(128)]);

        assert!(cache.entries.read().capacity() >= 128);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_custom_option_closure() {
        let double_up: CacheOption<i32> = Box::new(|cache: &mut Cache<i32>| {
            cache.set("x", 1, 0).unwrap();
            cache.set("y", 2, 0).unwrap();
        });

        let cache = Cache::with_options([double_up]);

        assert_eq!(cache.get("x"), Ok(1));
        assert_eq!(cache.get("y"), Ok(2));
    }

    #[test]
    fn test_no_options_matches_new() {
        let cache: Cache<i32> = Cache::with_options(Vec::new());
        assert!(cache.is_empty());
    }
}
