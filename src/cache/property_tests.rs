//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store's freshness and overwrite rules.

use proptest::prelude::*;
use std::sync::Arc;

use crate::cache::{CacheStore, Payload, CACHE_TTL_SECS};
use crate::records::{NormalizedRecord, NormalizedValue};

// == Strategies ==
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,16}_[0-9]{4}".prop_map(|s| s)
}

fn payload_strategy() -> impl Strategy<Value = Payload> {
    prop::collection::vec(
        ("[a-z_]{1,8}", -1000i64..1000).prop_map(|(column, value)| {
            let mut record = NormalizedRecord::new();
            record.insert(column, NormalizedValue::Int(value));
            record
        }),
        0..8,
    )
    .prop_map(Arc::new)
}

const BASE_MS: u64 = 1_700_000_000_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Reading within the window returns exactly what was written.
    #[test]
    fn prop_roundtrip_within_ttl(
        key in key_strategy(),
        payload in payload_strategy(),
        elapsed_ms in 0u64..CACHE_TTL_SECS * 1000
    ) {
        let mut store = CacheStore::new();
        store.put_at(key.clone(), payload.clone(), BASE_MS);

        let retrieved = store.get_at(&key, BASE_MS + elapsed_ms);
        prop_assert_eq!(retrieved, Some(payload));
    }

    // Once the window has elapsed the entry is never returned, yet it is kept.
    #[test]
    fn prop_stale_entries_hidden_not_deleted(
        key in key_strategy(),
        payload in payload_strategy(),
        extra_ms in 0u64..86_400_000
    ) {
        let mut store = CacheStore::new();
        store.put_at(key.clone(), payload, BASE_MS);

        let now = BASE_MS + CACHE_TTL_SECS * 1000 + extra_ms;
        prop_assert!(store.get_at(&key, now).is_none());
        prop_assert_eq!(store.len(), 1);
    }

    // The last write for a key wins.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        first in payload_strategy(),
        second in payload_strategy()
    ) {
        let mut store = CacheStore::new();
        store.put_at(key.clone(), first, BASE_MS);
        store.put_at(key.clone(), second.clone(), BASE_MS + 1);

        prop_assert_eq!(store.get_at(&key, BASE_MS + 2), Some(second));
        prop_assert_eq!(store.len(), 1);
    }

    // Writes to one key never disturb another.
    #[test]
    fn prop_keys_do_not_interfere(
        entries in prop::collection::hash_map(key_strategy(), payload_strategy(), 1..20)
    ) {
        let mut store = CacheStore::new();
        for (key, payload) in &entries {
            store.put_at(key.clone(), payload.clone(), BASE_MS);
        }

        prop_assert_eq!(store.len(), entries.len());
        for (key, payload) in &entries {
            prop_assert_eq!(store.get_at(key, BASE_MS), Some(payload.clone()));
        }
    }
}
