//! Cache Entry Module
//!
//! Defines a single cached payload and its creation time.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::cache::Payload;

// == Cache Entry ==
/// A stored payload with its creation timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached response rows
    pub payload: Payload,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(payload: Payload) -> Self {
        Self::created_at(payload, current_timestamp_ms())
    }

    /// Creates an entry with an explicit creation time.
    pub fn created_at(payload: Payload, created_at: u64) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    // == Freshness ==
    /// Returns true while `now - created_at < ttl`.
    ///
    /// An entry stamped in the future (clock moved backwards) counts as age 0.
    pub fn is_fresh_at(&self, now_ms: u64, ttl_secs: u64) -> bool {
        self.age_ms(now_ms) < ttl_secs * 1000
    }

    /// Milliseconds elapsed since the entry was written.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn empty_payload() -> Payload {
        Arc::new(Vec::new())
    }

    #[test]
    fn test_entry_is_fresh_when_created() {
        let entry = CacheEntry::new(empty_payload());
        assert!(entry.is_fresh_at(current_timestamp_ms(), 300));
    }

    #[test]
    fn test_entry_fresh_just_before_ttl() {
        let entry = CacheEntry::created_at(empty_payload(), 1_000_000);
        assert!(entry.is_fresh_at(1_000_000 + 299_999, 300));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Exactly TTL elapsed is no longer fresh
        let entry = CacheEntry::created_at(empty_payload(), 1_000_000);
        assert!(!entry.is_fresh_at(1_000_000 + 300_000, 300));
    }

    #[test]
    fn test_entry_stale_after_ttl() {
        let entry = CacheEntry::created_at(empty_payload(), 1_000_000);
        assert!(!entry.is_fresh_at(1_000_000 + 301_000, 300));
    }

    #[test]
    fn test_future_entry_counts_as_new() {
        let entry = CacheEntry::created_at(empty_payload(), 5_000);
        assert_eq!(entry.age_ms(1_000), 0);
        assert!(entry.is_fresh_at(1_000, 300));
    }
}
