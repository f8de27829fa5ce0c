//! Cache key construction.
//!
//! Each key starts with the handler name so that handlers never share
//! entries, followed by every parameter that shapes the response.

use std::fmt;

use crate::query::params::{WeekSelection, YearList};

/// Sentinel used when no position filter is applied
pub const ALL_POSITIONS: &str = "all";

/// Deterministic identifier of a request shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for all games of `years`, e.g. `schedules_2023-2024`.
    pub fn schedules(years: &YearList) -> Self {
        Self(format!("schedules_{}", years.joined()))
    }

    /// Key for one week, e.g. `week_2024_3_REG`.
    pub fn week(selection: &WeekSelection) -> Self {
        Self(format!(
            "week_{}_{}_{}",
            selection.year, selection.week, selection.season_type
        ))
    }

    /// Key for team averages of `years`, e.g. `team_stats_2024`.
    pub fn team_stats(years: &YearList) -> Self {
        Self(format!("team_stats_{}", years.joined()))
    }

    /// Key for player totals, e.g. `player_stats_2024_all`.
    ///
    /// A given position is tagged `pos:` so it can never equal the
    /// [`ALL_POSITIONS`] sentinel.
    pub fn player_stats(years: &YearList, position: Option<&str>) -> Self {
        let position = match position {
            Some(p) => format!("pos:{}", p),
            None => ALL_POSITIONS.to_string(),
        };
        Self(format!("player_stats_{}_{}", years.joined(), position))
    }

    /// Returns the key as stored in the cache.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(list: &[i32]) -> YearList {
        YearList::new(list.to_vec())
    }

    #[test]
    fn test_schedule_key() {
        assert_eq!(
            CacheKey::schedules(&years(&[2023, 2024])).as_str(),
            "schedules_2023-2024"
        );
    }

    #[test]
    fn test_year_order_does_not_matter() {
        assert_eq!(
            CacheKey::team_stats(&years(&[2024, 2023])),
            CacheKey::team_stats(&years(&[2023, 2024]))
        );
    }

    #[test]
    fn test_week_key() {
        let selection = WeekSelection {
            year: 2024,
            week: 3,
            season_type: "REG".to_string(),
        };
        assert_eq!(CacheKey::week(&selection).as_str(), "week_2024_3_REG");
    }

    #[test]
    fn test_week_key_distinguishes_every_field() {
        let base = WeekSelection {
            year: 2024,
            week: 1,
            season_type: "REG".to_string(),
        };
        let other_year = WeekSelection { year: 2023, ..base.clone() };
        let other_week = WeekSelection { week: 11, ..base.clone() };
        let other_type = WeekSelection {
            season_type: "POST".to_string(),
            ..base.clone()
        };

        let key = CacheKey::week(&base);
        assert_ne!(key, CacheKey::week(&other_year));
        assert_ne!(key, CacheKey::week(&other_week));
        assert_ne!(key, CacheKey::week(&other_type));
    }

    #[test]
    fn test_player_key_position_sentinel() {
        let y = years(&[2024]);
        assert_eq!(
            CacheKey::player_stats(&y, None).as_str(),
            "player_stats_2024_all"
        );
        assert_eq!(
            CacheKey::player_stats(&y, Some("QB")).as_str(),
            "player_stats_2024_pos:QB"
        );
        // A literal "all" position is not the sentinel
        assert_ne!(
            CacheKey::player_stats(&y, Some("all")),
            CacheKey::player_stats(&y, None)
        );
    }

    #[test]
    fn test_handlers_never_share_keys() {
        let y = years(&[2024]);
        assert_ne!(CacheKey::schedules(&y), CacheKey::team_stats(&y));
        assert_ne!(
            CacheKey::team_stats(&y).as_str(),
            CacheKey::player_stats(&y, None).as_str()
        );
    }
}
