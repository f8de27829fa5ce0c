//! Cache Module
//!
//! Provides the in-memory response cache with a fixed freshness window.
//! Stale entries are never swept; they are superseded by the next write for
//! the same key.

mod entry;
mod store;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

use crate::records::NormalizedRecord;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use store::CacheStore;

// == Public Constants ==
/// Seconds an entry stays fresh after it is written
pub const CACHE_TTL_SECS: u64 = 300;

/// Cached response body, shared between the store and in-flight responses
pub type Payload = Arc<Vec<NormalizedRecord>>;
