//! Normalizer
//!
//! Converts raw rows into JSON-safe rows. Each field is handled on its own:
//! missing values become `null`, timestamps become ISO-8601 strings, and
//! numbers are optionally widened to floats.

use chrono::{NaiveDateTime, Timelike};

use crate::records::{NormalizedRecord, NormalizedValue, RawRecord, RawValue, Timestamp};

// == Number Mode ==
/// How numeric cells are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberMode {
    /// Integers stay integers (pass-through handlers)
    Preserve,
    /// Every number becomes a float (aggregation handlers)
    Float,
}

// == Normalize ==
/// Normalizes a single raw row.
pub fn normalize_record(record: &RawRecord, mode: NumberMode) -> NormalizedRecord {
    record
        .iter()
        .map(|(column, value)| (column.clone(), normalize_value(value, mode)))
        .collect()
}

/// Normalizes every row in order.
pub fn normalize_records(records: &[RawRecord], mode: NumberMode) -> Vec<NormalizedRecord> {
    records
        .iter()
        .map(|record| normalize_record(record, mode))
        .collect()
}

fn normalize_value(value: &RawValue, mode: NumberMode) -> NormalizedValue {
    match value {
        RawValue::Missing => NormalizedValue::Null,
        RawValue::Timestamp(Some(ts)) => NormalizedValue::Text(timestamp_iso(ts)),
        RawValue::Timestamp(None) => NormalizedValue::Null,
        RawValue::Int(v) => match mode {
            NumberMode::Preserve => NormalizedValue::Int(*v),
            NumberMode::Float => NormalizedValue::Float(*v as f64),
        },
        // NaN is unrepresentable in JSON
        RawValue::Float(v) if v.is_nan() => NormalizedValue::Null,
        RawValue::Float(v) => NormalizedValue::Float(*v),
        RawValue::Bool(v) => NormalizedValue::Bool(*v),
        RawValue::Text(v) => NormalizedValue::Text(v.clone()),
    }
}

// == ISO Format ==
/// Formats a naive date-time as ISO-8601, adding a microsecond fraction only
/// when it is non-zero.
pub fn iso_format(ts: &NaiveDateTime) -> String {
    let micros = ts.nanosecond() / 1_000;
    if micros == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        format!("{}.{:06}", ts.format("%Y-%m-%dT%H:%M:%S"), micros)
    }
}

/// ISO-8601 for a timestamp cell, with a `±HH:MM` suffix when the source
/// carried an offset.
fn timestamp_iso(ts: &Timestamp) -> String {
    match ts.offset {
        Some(offset) => format!("{}{}", iso_format(&ts.local), offset),
        None => iso_format(&ts.local),
    }
}
