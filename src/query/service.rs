//! Query Service
//!
//! The cache-and-normalize pipeline shared by every data handler: derive a
//! key, serve a fresh cached payload if there is one, otherwise fetch,
//! reduce, normalize and store.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::cache::{CacheStore, Payload};
use crate::error::Result;
use crate::query::aggregate::{
    group_and_reduce, number_equals, require_columns, text_equals, Reduction,
};
use crate::query::keys::CacheKey;
use crate::query::params::{WeekSelection, YearList};
use crate::records::{normalize_records, NormalizedRecord, NumberMode};
use crate::upstream::{Category, DataSource};

/// Maximum rows returned by the player stats query
pub const PLAYER_STATS_LIMIT: usize = 500;

const TEAM_GROUP_COLUMNS: &[&str] = &["recent_team", "season"];

const TEAM_METRIC_COLUMNS: &[&str] = &[
    "points_scored",
    "points_allowed",
    "yards_gained",
    "yards_allowed",
    "turnovers",
];

const PLAYER_GROUP_COLUMNS: &[&str] =
    &["player_id", "player_display_name", "recent_team", "season"];

const PLAYER_METRIC_COLUMNS: &[&str] = &[
    "passing_yards",
    "passing_tds",
    "rushing_yards",
    "rushing_tds",
    "receiving_yards",
    "receiving_tds",
    "fantasy_points_ppr",
];

/// Requested `season_type` is matched against this upstream column
const GAME_TYPE_COLUMN: &str = "game_type";
const WEEK_COLUMN: &str = "week";
const POSITION_COLUMN: &str = "position";

/// Runs data queries against an upstream source through a shared cache.
#[derive(Clone)]
pub struct QueryService {
    cache: Arc<RwLock<CacheStore>>,
    source: Arc<dyn DataSource>,
}

impl QueryService {
    /// Creates a service owning `cache`.
    ///
    /// # Arguments
    /// * `cache` - Initial cache contents, usually empty
    /// * `source` - Upstream the service fetches from on a miss
    pub fn new(cache: CacheStore, source: Arc<dyn DataSource>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            source,
        }
    }

    /// Shared cache handle, cloned into every copy of the service.
    pub fn cache(&self) -> &Arc<RwLock<CacheStore>> {
        &self.cache
    }

    /// The upstream data source.
    pub fn source(&self) -> &Arc<dyn DataSource> {
        &self.source
    }

    /// Name of the upstream source.
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    // == Schedules ==
    /// Every game of the given seasons.
    pub async fn schedules(&self, years: &YearList) -> Result<Payload> {
        let key = CacheKey::schedules(years);
        let source = &self.source;
        self.cached(key, "schedules", || async move {
            let games = source
                .fetch_records(Category::Schedules, years.as_slice())
                .await?;
            Ok(normalize_records(&games, NumberMode::Preserve))
        })
        .await
    }

    // == Week Schedule ==
    /// Games of one week and game type.
    pub async fn week_schedule(&self, selection: &WeekSelection) -> Result<Payload> {
        let key = CacheKey::week(selection);
        let source = &self.source;
        self.cached(key, "week schedule", || async move {
            let games = source
                .fetch_records(Category::Schedules, &[selection.year])
                .await?;
            require_columns(&games, &[WEEK_COLUMN, GAME_TYPE_COLUMN])?;

            let week = f64::from(selection.week);
            let selected: Vec<_> = games
                .into_iter()
                .filter(|game| {
                    number_equals(game, WEEK_COLUMN, week)
                        && text_equals(game, GAME_TYPE_COLUMN, &selection.season_type)
                })
                .collect();
            Ok(normalize_records(&selected, NumberMode::Preserve))
        })
        .await
    }

    // == Team Stats ==
    /// Per team-season averages of weekly team stats.
    pub async fn team_stats(&self, years: &YearList) -> Result<Payload> {
        let key = CacheKey::team_stats(years);
        let source = &self.source;
        self.cached(key, "team stats", || async move {
            let weeks = source
                .fetch_records(Category::TeamWeekly, years.as_slice())
                .await?;
            let averages = group_and_reduce(
                &weeks,
                TEAM_GROUP_COLUMNS,
                TEAM_METRIC_COLUMNS,
                Reduction::Mean,
            )?;
            Ok(normalize_records(&averages, NumberMode::Float))
        })
        .await
    }

    // == Player Stats ==
    /// Per player-season totals, optionally for one position, capped at
    /// [`PLAYER_STATS_LIMIT`] rows.
    pub async fn player_stats(&self, years: &YearList, position: Option<&str>) -> Result<Payload> {
        let key = CacheKey::player_stats(years, position);
        let source = &self.source;
        self.cached(key, "player stats", || async move {
            let mut weeks = source
                .fetch_records(Category::PlayerWeekly, years.as_slice())
                .await?;

            if let Some(position) = position {
                require_columns(&weeks, &[POSITION_COLUMN])?;
                weeks.retain(|week| text_equals(week, POSITION_COLUMN, position));
            }

            let mut totals = group_and_reduce(
                &weeks,
                PLAYER_GROUP_COLUMNS,
                PLAYER_METRIC_COLUMNS,
                Reduction::Sum,
            )?;
            totals.truncate(PLAYER_STATS_LIMIT);
            Ok(normalize_records(&totals, NumberMode::Float))
        })
        .await
    }

    // == Cache Pipeline ==
    /// Serves `key` from the cache, or runs `load` and stores its result.
    ///
    /// Locks are not held while `load` runs, so concurrent misses for one
    /// key may both load; the last write wins. Failures are logged and never
    /// stored.
    async fn cached<F, Fut>(&self, key: CacheKey, label: &str, load: F) -> Result<Payload>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<NormalizedRecord>>>,
    {
        if let Some(payload) = self.cache.read().await.get(key.as_str()) {
            info!("Using cached {} data ({})", label, key);
            return Ok(payload);
        }

        info!("Fetching {} ({})", label, key);
        let records = match load().await {
            Ok(records) => records,
            Err(err) => {
                error!("Error fetching {} ({}): {}", label, key, err);
                return Err(err);
            }
        };

        let payload: Payload = Arc::new(records);
        self.cache
            .write()
            .await
            .put(key.as_str(), payload.clone());

        info!("Successfully fetched {} {} rows", payload.len(), label);
        Ok(payload)
    }
}
