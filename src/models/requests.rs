//! Request DTOs for the data service API
//!
//! Query strings are captured as raw text and validated here, so that bad
//! values produce a JSON error body instead of the extractor's plain text.

use serde::Deserialize;

use crate::error::Result;
use crate::query::{parse_position, WeekSelection, YearList};

/// Query string for `GET /api/schedules` and `GET /api/team-stats`
///
/// # Fields
/// - `years`: comma-separated seasons, defaults to the current season
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YearsQuery {
    #[serde(default)]
    pub years: Option<String>,
}

impl YearsQuery {
    /// Validates the query and returns the selected seasons.
    pub fn years(&self, default_season: i32) -> Result<YearList> {
        YearList::parse(self.years.as_deref(), default_season)
    }
}

/// Query string for `GET /api/schedules/week`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekScheduleQuery {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub week: Option<String>,
    /// Game type code such as `REG` or `POST`
    #[serde(default)]
    pub season_type: Option<String>,
}

impl WeekScheduleQuery {
    /// Validates the query and returns the selected week.
    pub fn selection(&self, default_season: i32) -> Result<WeekSelection> {
        WeekSelection::parse(
            self.year.as_deref(),
            self.week.as_deref(),
            self.season_type.as_deref(),
            default_season,
        )
    }
}

/// Query string for `GET /api/player-stats`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerStatsQuery {
    #[serde(default)]
    pub years: Option<String>,
    /// Position filter such as `QB`; blank means all positions
    #[serde(default)]
    pub position: Option<String>,
}

impl PlayerStatsQuery {
    /// Validates the query and returns the seasons and position filter.
    pub fn params(&self, default_season: i32) -> Result<(YearList, Option<String>)> {
        let years = YearList::parse(self.years.as_deref(), default_season)?;
        Ok((years, parse_position(self.position.as_deref())))
    }
}
