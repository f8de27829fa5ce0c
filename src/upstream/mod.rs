//! Upstream Module
//!
//! The data sources behind the query pipeline. Handlers only see the
//! [`DataSource`] trait; [`NflverseClient`] is the production implementation
//! and [`MemorySource`] serves preloaded rows.

mod csv_records;
mod error;
mod memory;
mod nflverse;

use std::fmt;

use async_trait::async_trait;

use crate::records::RawRecord;

pub use csv_records::{parse_cell, parse_records};
pub use error::UpstreamError;
pub use memory::MemorySource;
pub use nflverse::{NflverseClient, SourceUrls};

// == Category ==
/// The kind of table requested from a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// One row per game
    Schedules,
    /// One row per player per week
    PlayerWeekly,
    /// One row per team per week
    TeamWeekly,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Schedules => "schedules",
            Category::PlayerWeekly => "player weekly stats",
            Category::TeamWeekly => "team weekly stats",
        };
        f.write_str(name)
    }
}

// == Data Source ==
/// Supplies raw rows for a category and a set of seasons.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches every row of `category` belonging to one of `years`.
    async fn fetch_records(
        &self,
        category: Category,
        years: &[i32],
    ) -> Result<Vec<RawRecord>, UpstreamError>;

    /// Short name reported by the health endpoint.
    fn name(&self) -> &'static str;
}
