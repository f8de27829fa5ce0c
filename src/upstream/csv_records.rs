//! CSV decoding for upstream tables.
//!
//! Cells are typed one at a time: the nflverse releases carry no schema, so a
//! column may mix integers, floats and NA markers across rows.

use std::io::Read;

use chrono::{DateTime, NaiveDateTime};

use crate::records::{RawRecord, RawValue, Timestamp};

/// Cell contents treated as a missing value.
const MISSING_MARKERS: &[&str] = &["", "NA", "NaN", "nan", "N/A", "NULL", "null"];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Reads every row of a headed CSV document.
pub fn parse_records<R: Read>(rdr: R) -> Result<Vec<RawRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(column, cell)| (column.to_string(), parse_cell(cell)))
            .collect();
        records.push(record);
    }
    Ok(records)
}

/// Infers the type of a single cell.
pub fn parse_cell(cell: &str) -> RawValue {
    if MISSING_MARKERS.contains(&cell) {
        return RawValue::Missing;
    }

    match cell {
        "true" | "True" | "TRUE" => return RawValue::Bool(true),
        "false" | "False" | "FALSE" => return RawValue::Bool(false),
        _ => {}
    }

    if let Ok(v) = cell.parse::<i64>() {
        return RawValue::Int(v);
    }
    // f64 also accepts words like "inf"; require a digit
    if cell.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(v) = cell.parse::<f64>() {
            return RawValue::float(v);
        }
    }

    if let Some(ts) = parse_datetime(cell) {
        return RawValue::Timestamp(Some(ts));
    }

    RawValue::Text(cell.to_string())
}

/// Zone-less date-times stay naive; RFC 3339 cells keep their offset.
fn parse_datetime(cell: &str) -> Option<Timestamp> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(cell, fmt).ok())
        .map(Timestamp::naive)
        .or_else(|| DateTime::parse_from_rfc3339(cell).ok().map(Timestamp::from))
}
