//! Time-bounded in-memory cache.
//!
//! The cache is an ordinary owned value: callers construct it and pass it
//! around explicitly, wrapping it in a lock if it must be shared.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    // None when the TTL runs past the end of `Instant`'s range.
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| at > now)
    }
}

/// Map whose entries expire a fixed time after insertion.
#[derive(Debug, Clone)]
pub struct TtlCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    ttl: Duration,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    /// Creates an empty cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Default time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Inserts with the default TTL, returning the previous live value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_at(key, value, self.ttl, Instant::now())
    }

    /// Inserts with a custom TTL. A TTL too large to represent (such as
    /// `Duration::MAX`) never expires.
    pub fn insert_with_ttl(&mut self, key: K, value: V, ttl: Duration) -> Option<V> {
        self.insert_at(key, value, ttl, Instant::now())
    }

    /// Inserts as if the current time were `now`.
    pub fn insert_at(&mut self, key: K, value: V, ttl: Duration, now: Instant) -> Option<V> {
        let entry = Entry {
            value,
            expires_at: now.checked_add(ttl),
        };
        self.entries
            .insert(key, entry)
            .filter(|old| old.is_live(now))
            .map(|old| old.value)
    }

    /// Live value for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_at(key, Instant::now())
    }

    /// Live value for `key` as of `now`.
    #[must_use]
    pub fn get_at(&self, key: &K, now: Instant) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| &entry.value)
    }

    /// Returns true if `key` has a live value.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value if it was still live.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let now = Instant::now();
        self.entries
            .remove(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value)
    }

    /// Drops expired entries, returning how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    /// Drops entries expired as of `now`.
    pub fn purge_expired_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_live(now));
        before - self.entries.len()
    }

    /// Number of stored entries, including expired ones not yet purged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
