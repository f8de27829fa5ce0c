//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Default nflverse schedule table (all seasons in one file)
pub const DEFAULT_SCHEDULES_URL: &str =
    "https://github.com/nflverse/nfldata/raw/master/data/games.csv";

/// Default nflverse weekly player stats, one file per season
pub const DEFAULT_PLAYER_STATS_URL: &str =
    "https://github.com/nflverse/nflverse-data/releases/download/player_stats/player_stats_{year}.csv";

/// Default nflverse weekly team stats, one file per season
///
/// This release names the team column `team` and carries no
/// `points_scored`/`points_allowed`/`yards_gained`/`yards_allowed`/`turnovers`
/// columns, so team stats fail with a missing-column error until
/// `TEAM_STATS_URL` points at a table that has them.
pub const DEFAULT_TEAM_STATS_URL: &str =
    "https://github.com/nflverse/nflverse-data/releases/download/stats_team/stats_team_week_{year}.csv";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Schedule CSV location
    pub schedules_url: String,
    /// Weekly player stats URL template (`{year}` is substituted)
    pub player_stats_url: String,
    /// Weekly team stats URL template (`{year}` is substituted)
    pub team_stats_url: String,
    /// Fetch one season of schedules at startup to check connectivity
    pub probe_upstream: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5001)
    /// - `SCHEDULES_URL` - Schedule CSV (default: nflverse games.csv)
    /// - `PLAYER_STATS_URL` - Player stats template (default: nflverse player_stats_{year}.csv)
    /// - `TEAM_STATS_URL` - Team stats template (default: nflverse stats_team_week_{year}.csv)
    /// - `PROBE_UPSTREAM` - Startup connectivity check, `true`/`false` (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            schedules_url: env::var("SCHEDULES_URL").unwrap_or(defaults.schedules_url),
            player_stats_url: env::var("PLAYER_STATS_URL").unwrap_or(defaults.player_stats_url),
            team_stats_url: env::var("TEAM_STATS_URL").unwrap_or(defaults.team_stats_url),
            probe_upstream: env::var("PROBE_UPSTREAM")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.probe_upstream),
        }
    }
}

impl Config {
    /// Returns true while team stats still come from [`DEFAULT_TEAM_STATS_URL`].
    pub fn uses_default_team_stats_url(&self) -> bool {
        self.team_stats_url == DEFAULT_TEAM_STATS_URL
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5001,
            schedules_url: DEFAULT_SCHEDULES_URL.to_string(),
            player_stats_url: DEFAULT_PLAYER_STATS_URL.to_string(),
            team_stats_url: DEFAULT_TEAM_STATS_URL.to_string(),
            probe_upstream: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
