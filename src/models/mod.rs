//! Request and Response models for the data service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query strings and serializing response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{PlayerStatsQuery, WeekScheduleQuery, YearsQuery};
pub use responses::{CurrentWeekResponse, ErrorResponse, HealthResponse};
