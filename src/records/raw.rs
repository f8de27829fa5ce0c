//! Raw Record Module
//!
//! Loosely-typed tabular rows as produced by a data source.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::records::NormalizedValue;

// == Raw Record ==
/// One upstream row, keyed by column name.
pub type RawRecord = BTreeMap<String, RawValue>;

// == Raw Value ==
/// A single dynamically-typed cell.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// The source had no value (null, NA, NaN)
    Missing,
    Bool(bool),
    Int(i64),
    /// Never NaN; use [`RawValue::float`] to build one from an arbitrary f64
    Float(f64),
    Text(String),
    /// A date-time cell; `None` is an unset timestamp
    Timestamp(Option<Timestamp>),
}

// == Timestamp ==
/// A wall-clock date-time, with the UTC offset it was written in when the
/// source gave one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub local: NaiveDateTime,
    pub offset: Option<FixedOffset>,
}

impl Timestamp {
    /// A date-time with no zone information.
    pub fn naive(local: NaiveDateTime) -> Self {
        Self {
            local,
            offset: None,
        }
    }

    /// The instant this timestamp denotes when read as UTC.
    ///
    /// Naive timestamps are taken as already being UTC.
    pub fn utc(&self) -> NaiveDateTime {
        match self.offset {
            Some(offset) => self.local - offset,
            None => self.local,
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(local: NaiveDateTime) -> Self {
        Self::naive(local)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self {
            local: value.naive_local(),
            offset: Some(*value.offset()),
        }
    }
}

impl RawValue {
    /// Builds a float cell, mapping NaN to [`RawValue::Missing`].
    pub fn float(value: f64) -> Self {
        if value.is_nan() {
            RawValue::Missing
        } else {
            RawValue::Float(value)
        }
    }

    /// Builds a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        RawValue::Text(value.into())
    }

    /// Returns true for values that count as absent (missing or unset timestamp).
    pub fn is_missing(&self) -> bool {
        matches!(self, RawValue::Missing | RawValue::Timestamp(None))
    }

    /// Returns the numeric value of an integer or float cell.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Int(v) => Some(*v as f64),
            RawValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<NormalizedValue> for RawValue {
    fn from(value: NormalizedValue) -> Self {
        match value {
            NormalizedValue::Null => RawValue::Missing,
            NormalizedValue::Bool(v) => RawValue::Bool(v),
            NormalizedValue::Int(v) => RawValue::Int(v),
            NormalizedValue::Float(v) => RawValue::float(v),
            NormalizedValue::Text(v) => RawValue::Text(v),
        }
    }
}
