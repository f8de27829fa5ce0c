//! Row filtering, grouping and reduction over raw upstream tables.
//!
//! Groups come out ordered by their key. Rows with a missing key value are
//! dropped, and missing metric values are skipped rather than treated as 0.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::error::{Result, ServiceError};
use crate::records::{RawRecord, RawValue};

/// How a metric column is reduced within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// Arithmetic mean; a group with no values yields a missing value
    Mean,
    /// Total; a group with no values yields 0
    Sum,
}

/// Fails with [`ServiceError::MissingColumn`] if any of `columns` appears in
/// no row. An empty table passes.
pub fn require_columns(records: &[RawRecord], columns: &[&str]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    for column in columns {
        if !records.iter().any(|record| record.contains_key(*column)) {
            return Err(ServiceError::MissingColumn((*column).to_string()));
        }
    }
    Ok(())
}

/// True if `column` holds the text `expected`.
pub fn text_equals(record: &RawRecord, column: &str, expected: &str) -> bool {
    matches!(record.get(column), Some(RawValue::Text(value)) if value == expected)
}

/// True if `column` holds a number equal to `expected`.
pub fn number_equals(record: &RawRecord, column: &str, expected: f64) -> bool {
    record.get(column).and_then(RawValue::as_f64) == Some(expected)
}

/// Groups `records` by the `keys` columns and reduces each `metrics` column.
///
/// Output rows hold only the key and metric columns. Metric values are
/// floats (or missing for an empty mean).
pub fn group_and_reduce(
    records: &[RawRecord],
    keys: &[&str],
    metrics: &[&str],
    reduction: Reduction,
) -> Result<Vec<RawRecord>> {
    require_columns(records, keys)?;
    require_columns(records, metrics)?;

    let mut groups: BTreeMap<Vec<KeyPart>, Group> = BTreeMap::new();
    for record in records {
        let Some(key) = group_key(record, keys) else {
            continue;
        };
        let group = groups
            .entry(key)
            .or_insert_with(|| Group::new(record, keys, metrics.len()));

        for (slot, metric) in metrics.iter().enumerate() {
            if let Some(value) = metric_value(record, metric)? {
                group.sums[slot] += value;
                group.counts[slot] += 1;
            }
        }
    }

    Ok(groups
        .into_values()
        .map(|group| group.into_record(keys, metrics, reduction))
        .collect())
}

// == Groups ==
struct Group {
    key_values: Vec<RawValue>,
    sums: Vec<f64>,
    counts: Vec<usize>,
}

impl Group {
    fn new(first: &RawRecord, keys: &[&str], metric_count: usize) -> Self {
        Self {
            key_values: keys
                .iter()
                .map(|k| first.get(*k).cloned().unwrap_or(RawValue::Missing))
                .collect(),
            sums: vec![0.0; metric_count],
            counts: vec![0; metric_count],
        }
    }

    fn into_record(self, keys: &[&str], metrics: &[&str], reduction: Reduction) -> RawRecord {
        let mut record: RawRecord = keys
            .iter()
            .map(|k| k.to_string())
            .zip(self.key_values)
            .collect();

        for (slot, metric) in metrics.iter().enumerate() {
            let value = match reduction {
                Reduction::Sum => RawValue::float(self.sums[slot]),
                Reduction::Mean if self.counts[slot] == 0 => RawValue::Missing,
                Reduction::Mean => RawValue::float(self.sums[slot] / self.counts[slot] as f64),
            };
            record.insert(metric.to_string(), value);
        }
        record
    }
}

fn metric_value(record: &RawRecord, column: &str) -> Result<Option<f64>> {
    match record.get(column) {
        None | Some(RawValue::Missing) | Some(RawValue::Timestamp(None)) => Ok(None),
        Some(RawValue::Int(v)) => Ok(Some(*v as f64)),
        Some(RawValue::Float(v)) => Ok(Some(*v)),
        Some(RawValue::Bool(v)) => Ok(Some(if *v { 1.0 } else { 0.0 })),
        Some(other) => Err(ServiceError::Aggregation(format!(
            "column '{}' has non-numeric value {:?}",
            column, other
        ))),
    }
}

// == Group Keys ==
/// One component of a group key. Integers and floats compare numerically;
/// timestamps compare as UTC instants.
#[derive(Debug, Clone)]
enum KeyPart {
    Bool(bool),
    Number(f64),
    Time(NaiveDateTime),
    Text(String),
}

impl KeyPart {
    fn from_value(value: &RawValue) -> Option<Self> {
        match value {
            RawValue::Missing | RawValue::Timestamp(None) => None,
            RawValue::Bool(v) => Some(KeyPart::Bool(*v)),
            RawValue::Int(v) => Some(KeyPart::Number(*v as f64)),
            RawValue::Float(v) => Some(KeyPart::Number(*v)),
            RawValue::Timestamp(Some(v)) => Some(KeyPart::Time(v.utc())),
            RawValue::Text(v) => Some(KeyPart::Text(v.clone())),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            KeyPart::Bool(_) => 0,
            KeyPart::Number(_) => 1,
            KeyPart::Time(_) => 2,
            KeyPart::Text(_) => 3,
        }
    }
}

impl Ord for KeyPart {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (KeyPart::Bool(a), KeyPart::Bool(b)) => a.cmp(b),
            (KeyPart::Number(a), KeyPart::Number(b)) => a.total_cmp(b),
            (KeyPart::Time(a), KeyPart::Time(b)) => a.cmp(b),
            (KeyPart::Text(a), KeyPart::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for KeyPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for KeyPart {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for KeyPart {}

fn group_key(record: &RawRecord, keys: &[&str]) -> Option<Vec<KeyPart>> {
    keys.iter()
        .map(|k| record.get(*k).and_then(KeyPart::from_value))
        .collect()
}
