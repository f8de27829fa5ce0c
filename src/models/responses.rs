//! Response DTOs for the data service API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! plain record arrays.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::query::SeasonWeek;
use crate::records::iso_format;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "NFL Data Backend";

/// Response body for the health endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    pub service: String,
    pub version: String,
    /// Name of the upstream data source
    pub data_source: String,
}

impl HealthResponse {
    /// Creates a healthy response for the given data source
    pub fn healthy(data_source: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_source: data_source.into(),
        }
    }
}

/// Response body for GET /api/current-week
#[derive(Debug, Clone, Serialize)]
pub struct CurrentWeekResponse {
    pub current_year: i32,
    pub current_week: u32,
    /// Game type code, `REG` or `POST`
    pub season_type: String,
    /// Time the week was computed, ISO 8601 local time
    pub timestamp: String,
}

impl CurrentWeekResponse {
    /// Creates a response for a computed week
    pub fn new(week: SeasonWeek, computed_at: &NaiveDateTime) -> Self {
        Self {
            current_year: week.year,
            current_week: week.week,
            season_type: week.season_type.to_string(),
            timestamp: iso_format(computed_at),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::current_week;
    use chrono::NaiveDate;

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy("nflverse");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], SERVICE_NAME);
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["data_source"], "nflverse");
    }

    #[test]
    fn test_current_week_response_serialize() {
        let now = NaiveDate::from_ymd_opt(2025, 10, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let resp = CurrentWeekResponse::new(current_week(now), &now);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["current_year"], 2025);
        assert_eq!(json["current_week"], 6);
        assert_eq!(json["season_type"], "REG");
        assert_eq!(json["timestamp"], "2025-10-15T08:00:00");
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Something went wrong"}"#);
    }
}
