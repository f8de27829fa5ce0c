//! Records Module
//!
//! Row types that flow through the request pipeline: raw rows as the upstream
//! source produces them, and the JSON-safe rows served to clients.

mod normalize;
mod normalized;
mod raw;

#[cfg(test)]
mod property_tests;

pub use normalize::{iso_format, normalize_record, normalize_records, NumberMode};
pub use normalized::{NormalizedRecord, NormalizedValue};
pub use raw::{RawRecord, RawValue, Timestamp};
