//! Cache Store Module
//!
//! Main cache engine: a HashMap behind one reader/writer lock with TTL expiration.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cache::stats::StatsCounters;
use crate::cache::{CacheEntry, CacheStats};
use crate::error::{CacheError, Result};

// == Cache ==
/// Thread-safe key/value cache with per-entry TTL.
///
/// Cloning a `Cache` creates a new handle to the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Lookup and sweep counters
    stats: StatsCounters,
}

/// Removes `key` if its entry had expired at `now`.
///
/// Shared by lazy deletion in `get` and by the janitor sweep. An absent key
/// or an entry that is still live (for example one overwritten since the
/// caller saw it expired) is left untouched.
fn remove_if_expired(entries: &mut HashMap<String, CacheEntry>, key: &str, now: Instant) -> bool {
    match entries.get(key) {
        Some(entry) if entry.is_expired_at(now) => {
            entries.remove(key);
            true
        }
        _ => false,
    }
}

impl Cache {
    // == Constructor ==
    /// Creates a new, empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores a copy of `value` under `key`, replacing any previous entry.
    ///
    /// A zero `ttl` stores the entry without expiration.
    pub fn put(&self, key: impl Into<String>, value: &[u8], ttl: Duration) {
        let key = key.into();
        let entry = CacheEntry::new(value, ttl);

        trace!(key = %key, ttl_ms = ttl.as_millis() as u64, "put");
        self.inner.entries.write().insert(key, entry);
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// An expired entry is removed on the spot and reported as
    /// `CacheError::Expired`; later lookups then see `CacheError::NotFound`.
    pub fn get(&self, key: &str) -> Result<Vec<u8>> {
        let now = Instant::now();
        {
            let entries = self.inner.entries.read();
            match entries.get(key) {
                None => {
                    self.inner.stats.record_miss();
                    return Err(CacheError::NotFound(key.to_string()));
                }
                Some(entry) if !entry.is_expired_at(now) => {
                    self.inner.stats.record_hit();
                    return Ok(entry.value.clone());
                }
                Some(_) => {}
            }
        }

        // The shared guard is gone; another reader or the janitor may have
        // removed the entry already, which is fine.
        let removed = remove_if_expired(&mut self.inner.entries.write(), key, now);
        debug!(key = %key, removed, "lazily deleted expired entry");

        self.inner.stats.record_expired();
        Err(CacheError::Expired(key.to_string()))
    }

    // == Delete ==
    /// Removes the entry for `key`. Deleting an absent key is a no-op.
    pub fn delete(&self, key: &str) {
        let removed = self.inner.entries.write().remove(key).is_some();
        trace!(key = %key, removed, "delete");
    }

    // == Cleanup Expired ==
    /// Removes every entry that had expired at the start of the scan.
    ///
    /// Holds the exclusive lock for the whole scan. Returns the number of
    /// entries removed.
    pub(crate) fn cleanup(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.inner.entries.write();

        let expired_keys: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        let mut removed = 0;
        for key in &expired_keys {
            if remove_if_expired(&mut entries, key, now) {
                removed += 1;
            }
        }
        drop(entries);

        self.inner.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        self.inner.stats.snapshot(self.len())
    }

    // == Length ==
    /// Returns the number of physically stored entries, including expired
    /// entries that have not been removed yet.
    pub fn len(&self) -> usize {
        self.inner.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.read().is_empty()
    }
}
