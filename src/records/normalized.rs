//! Normalized Record Module
//!
//! JSON-safe rows served to clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One JSON-safe row, serialized with columns in sorted order.
pub type NormalizedRecord = BTreeMap<String, NormalizedValue>;

/// A JSON scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NormalizedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}
