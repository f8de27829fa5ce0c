//! Property-Based Tests for the Normalizer
//!
//! Uses proptest over arbitrary raw rows.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use proptest::prelude::*;

use crate::records::{
    normalize_record, NormalizedValue, NumberMode, RawRecord, RawValue, Timestamp,
};

// == Strategies ==
fn timestamp_strategy() -> impl Strategy<Value = NaiveDateTime> {
    // 1999-01-01 .. 2030-01-01, microsecond precision
    (915_148_800i64..1_893_456_000i64, 0u32..1_000_000u32).prop_filter_map(
        "valid timestamp",
        |(secs, micros)| DateTime::from_timestamp(secs, micros * 1_000).map(|dt| dt.naive_utc()),
    )
}

fn offset_strategy() -> impl Strategy<Value = Option<FixedOffset>> {
    // Whole quarter hours between -12:00 and +14:00
    prop::option::of((-48i32..=56).prop_filter_map("valid offset", |quarters| {
        FixedOffset::east_opt(quarters * 900)
    }))
}

fn raw_value_strategy() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        Just(RawValue::Missing),
        any::<bool>().prop_map(RawValue::Bool),
        any::<i64>().prop_map(RawValue::Int),
        (-1.0e6f64..1.0e6f64).prop_map(RawValue::float),
        "[a-zA-Z0-9 _-]{0,16}".prop_map(RawValue::Text),
        Just(RawValue::Timestamp(None)),
        (timestamp_strategy(), offset_strategy()).prop_map(|(local, offset)| {
            RawValue::Timestamp(Some(Timestamp { local, offset }))
        }),
    ]
}

fn raw_record_strategy() -> impl Strategy<Value = RawRecord> {
    prop::collection::btree_map("[a-z_]{1,12}", raw_value_strategy(), 0..12)
}

fn mode_strategy() -> impl Strategy<Value = NumberMode> {
    prop_oneof![Just(NumberMode::Preserve), Just(NumberMode::Float)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Normalizing the raw form of an already-normalized row yields the same row.
    #[test]
    fn prop_normalization_is_idempotent(record in raw_record_strategy(), mode in mode_strategy()) {
        let once = normalize_record(&record, mode);
        let raw_again: RawRecord = once
            .iter()
            .map(|(k, v)| (k.clone(), RawValue::from(v.clone())))
            .collect();
        let twice = normalize_record(&raw_again, mode);
        prop_assert_eq!(once, twice);
    }

    // Every column survives and the output is JSON-serializable.
    #[test]
    fn prop_normalized_rows_are_json_safe(record in raw_record_strategy(), mode in mode_strategy()) {
        let normalized = normalize_record(&record, mode);
        prop_assert_eq!(normalized.len(), record.len());
        prop_assert!(serde_json::to_string(&normalized).is_ok());
    }

    // Float mode never emits an integer.
    #[test]
    fn prop_float_mode_has_no_integers(record in raw_record_strategy()) {
        let normalized = normalize_record(&record, NumberMode::Float);
        prop_assert!(normalized.values().all(|v| !matches!(v, NormalizedValue::Int(_))));
    }
}
