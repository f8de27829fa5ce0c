//! Season calendar helpers.
//!
//! Approximate: the season is assumed to start on September 1.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Regular season game type code
pub const REGULAR_SEASON: &str = "REG";

/// Postseason game type code
pub const POSTSEASON: &str = "POST";

/// Last regular season week
pub const MAX_REGULAR_WEEK: u32 = 18;

const SEASON_START_MONTH: u32 = 9;

/// Season that `today` belongs to: September onwards is the current year,
/// January through August the previous one.
pub fn current_season(today: NaiveDate) -> i32 {
    if today.month() >= SEASON_START_MONTH {
        today.year()
    } else {
        today.year() - 1
    }
}

/// Game type for a week number.
pub fn season_type_for_week(week: u32) -> &'static str {
    if week <= MAX_REGULAR_WEEK {
        REGULAR_SEASON
    } else {
        POSTSEASON
    }
}

/// The season and week in progress at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonWeek {
    pub year: i32,
    pub week: u32,
    pub season_type: &'static str,
}

/// Computes the week in progress at `now`.
///
/// Whole weeks elapsed since September 1 of the current season, at least 1
/// and at most [`MAX_REGULAR_WEEK`]. The cap means the reported game type is
/// always the regular season.
pub fn current_week(now: NaiveDateTime) -> SeasonWeek {
    let year = current_season(now.date());
    let elapsed_days = NaiveDate::from_ymd_opt(year, SEASON_START_MONTH, 1)
        .map(|start| (now.date() - start).num_days())
        .unwrap_or(0);

    let weeks_since_start = (elapsed_days.div_euclid(7)).max(1);
    let week = u32::try_from(weeks_since_start)
        .unwrap_or(MAX_REGULAR_WEEK)
        .min(MAX_REGULAR_WEEK);

    SeasonWeek {
        year,
        week,
        season_type: season_type_for_week(week),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_current_season_from_september() {
        assert_eq!(current_season(date(2025, 9, 1)), 2025);
        assert_eq!(current_season(date(2025, 12, 31)), 2025);
    }

    #[test]
    fn test_current_season_before_september() {
        assert_eq!(current_season(date(2026, 1, 10)), 2025);
        assert_eq!(current_season(date(2026, 8, 31)), 2025);
    }

    #[test]
    fn test_mid_october_is_week_six() {
        // 44 days after September 1
        let info = current_week(at(2025, 10, 15));
        assert_eq!(info.year, 2025);
        assert_eq!(info.week, 6);
        assert_eq!(info.season_type, "REG");
    }

    #[test]
    fn test_week_floor_is_one() {
        assert_eq!(current_week(at(2025, 9, 1)).week, 1);
        assert_eq!(current_week(at(2025, 9, 10)).week, 1);
    }

    #[test]
    fn test_week_cap_in_postseason_months() {
        let info = current_week(at(2026, 2, 8));
        assert_eq!(info.year, 2025);
        assert_eq!(info.week, MAX_REGULAR_WEEK);
        assert_eq!(info.season_type, REGULAR_SEASON);
    }

    #[test]
    fn test_season_type_for_week() {
        assert_eq!(season_type_for_week(1), REGULAR_SEASON);
        assert_eq!(season_type_for_week(18), REGULAR_SEASON);
        assert_eq!(season_type_for_week(19), POSTSEASON);
    }
}
