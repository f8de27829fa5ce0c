//! Query Module
//!
//! Request parameters, cache keys, aggregation policy and the service that
//! ties them to the cache and the upstream source.

pub mod aggregate;
pub mod keys;
pub mod params;
pub mod season;
mod service;

pub use keys::CacheKey;
pub use params::{parse_position, WeekSelection, YearList};
pub use season::{current_season, current_week, SeasonWeek};
pub use service::{QueryService, PLAYER_STATS_LIMIT};
