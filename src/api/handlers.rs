//! API Handlers
//!
//! HTTP request handlers for each data service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;

use crate::cache::{CacheStore, Payload};
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    CurrentWeekResponse, HealthResponse, PlayerStatsQuery, WeekScheduleQuery, YearsQuery,
};
use crate::query::{current_season, current_week, QueryService};
use crate::upstream::{DataSource, NflverseClient, SourceUrls};

/// Application state shared across all handlers.
///
/// Holds the query service, which owns the shared cache and the upstream
/// source.
#[derive(Clone)]
pub struct AppState {
    pub service: QueryService,
}

impl AppState {
    /// Creates a new AppState over the given cache and data source.
    pub fn new(cache: CacheStore, source: Arc<dyn DataSource>) -> Self {
        Self {
            service: QueryService::new(cache, source),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses an empty cache and the nflverse client pointed at the configured URLs.
    pub fn from_config(config: &Config) -> Self {
        let source = NflverseClient::new(SourceUrls::from_config(config));
        Self::new(CacheStore::new(), Arc::new(source))
    }
}

fn default_season() -> i32 {
    current_season(Local::now().date_naive())
}

/// Handler for GET /
///
/// Returns health status of the service.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.service.source_name()))
}

/// Handler for GET /api/schedules
///
/// Returns every game of the requested seasons.
pub async fn schedules_handler(
    State(state): State<AppState>,
    Query(query): Query<YearsQuery>,
) -> Result<Json<Payload>> {
    let years = query.years(default_season())?;
    let games = state.service.schedules(&years).await?;

    Ok(Json(games))
}

/// Handler for GET /api/schedules/week
///
/// Returns the games of one week and game type.
pub async fn week_schedule_handler(
    State(state): State<AppState>,
    Query(query): Query<WeekScheduleQuery>,
) -> Result<Json<Payload>> {
    let selection = query.selection(default_season())?;
    let games = state.service.week_schedule(&selection).await?;

    Ok(Json(games))
}

/// Handler for GET /api/team-stats
///
/// Returns per team-season averages.
pub async fn team_stats_handler(
    State(state): State<AppState>,
    Query(query): Query<YearsQuery>,
) -> Result<Json<Payload>> {
    let years = query.years(default_season())?;
    let stats = state.service.team_stats(&years).await?;

    Ok(Json(stats))
}

/// Handler for GET /api/player-stats
///
/// Returns per player-season totals, at most 500 rows.
pub async fn player_stats_handler(
    State(state): State<AppState>,
    Query(query): Query<PlayerStatsQuery>,
) -> Result<Json<Payload>> {
    let (years, position) = query.params(default_season())?;
    let stats = state
        .service
        .player_stats(&years, position.as_deref())
        .await?;

    Ok(Json(stats))
}

/// Handler for GET /api/current-week
///
/// Computes the season week from the local clock; never touches the cache.
pub async fn current_week_handler() -> Json<CurrentWeekResponse> {
    let now = Local::now().naive_local();
    Json(CurrentWeekResponse::new(current_week(now), &now))
}
