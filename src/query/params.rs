//! Typed query parameters.

use crate::error::{Result, ServiceError};
use crate::query::season::REGULAR_SEASON;

// == Year List ==
/// A non-empty set of seasons, sorted ascending without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearList(Vec<i32>);

impl YearList {
    /// Parses a comma-separated list such as `"2023, 2024"`.
    ///
    /// `None` selects `default_season` alone.
    pub fn parse(raw: Option<&str>, default_season: i32) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::single(default_season));
        };

        let years = raw
            .split(',')
            .map(|part| parse_int::<i32>("year", part))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(years))
    }

    /// Sorts and de-duplicates `years`.
    pub fn new(mut years: Vec<i32>) -> Self {
        years.sort_unstable();
        years.dedup();
        Self(years)
    }

    /// A list holding just `year`.
    pub fn single(year: i32) -> Self {
        Self(vec![year])
    }

    /// Returns the years in ascending order.
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Years joined with `-`, as used in cache keys.
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }
}

// == Week Selection ==
/// One week of one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSelection {
    pub year: i32,
    /// Any integer; weeks with no games select nothing
    pub week: i32,
    /// Game type code, matched against the upstream `game_type` column
    pub season_type: String,
}

impl WeekSelection {
    /// Parses raw parameters, defaulting to week 1 of the regular season.
    pub fn parse(
        year: Option<&str>,
        week: Option<&str>,
        season_type: Option<&str>,
        default_season: i32,
    ) -> Result<Self> {
        let year = match year {
            Some(raw) => parse_int::<i32>("year", raw)?,
            None => default_season,
        };
        let week = match week {
            Some(raw) => parse_int::<i32>("week", raw)?,
            None => 1,
        };
        let season_type = season_type
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(REGULAR_SEASON)
            .to_string();

        Ok(Self {
            year,
            week,
            season_type,
        })
    }
}

// == Position Filter ==
/// Normalizes an optional position filter; blank means no filter.
pub fn parse_position(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_int<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| {
        ServiceError::InvalidRequest(format!("{} must be an integer, got '{}'", name, raw.trim()))
    })
}
