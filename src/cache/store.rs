//! Cache Store Module
//!
//! Keyed payload storage with lazy freshness checks.

use std::collections::HashMap;

use crate::cache::{current_timestamp_ms, CacheEntry, Payload, CACHE_TTL_SECS};

// == Cache Store ==
/// In-memory response cache.
///
/// There is no size bound and no eviction. A stale entry stays in memory
/// until a later `put` for the same key replaces it.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-payload storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns the payload for `key` if it was written less than
    /// [`CACHE_TTL_SECS`] ago.
    ///
    /// A stale entry is reported as absent but left in place.
    pub fn get(&self, key: &str) -> Option<Payload> {
        self.get_at(key, current_timestamp_ms())
    }

    /// [`CacheStore::get`] evaluated at an explicit time.
    pub fn get_at(&self, key: &str, now_ms: u64) -> Option<Payload> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh_at(now_ms, CACHE_TTL_SECS))
            .map(|entry| entry.payload.clone())
    }

    // == Put ==
    /// Stores `payload` under `key`, replacing any previous entry.
    pub fn put(&mut self, key: impl Into<String>, payload: Payload) {
        self.put_at(key, payload, current_timestamp_ms());
    }

    /// [`CacheStore::put`] stamped with an explicit creation time.
    pub fn put_at(&mut self, key: impl Into<String>, payload: Payload, created_at: u64) {
        self.entries
            .insert(key.into(), CacheEntry::created_at(payload, created_at));
    }

    // == Length ==
    /// Returns the number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
