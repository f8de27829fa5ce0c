//! NFL Data Service - schedules and statistics over HTTP
//!
//! Fetches nflverse tables, normalizes them into JSON-safe rows and serves
//! them with a five minute in-memory response cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod records;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use query::QueryService;
