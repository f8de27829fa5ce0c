//! API Routes
//!
//! Configures the Axum router with all data service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    current_week_handler, health_handler, player_stats_handler, schedules_handler,
    team_stats_handler, week_schedule_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Health check
/// - `GET /api/schedules` - Games for one or more seasons
/// - `GET /api/schedules/week` - Games for one week
/// - `GET /api/team-stats` - Team season averages
/// - `GET /api/player-stats` - Player season totals
/// - `GET /api/current-week` - Current season week
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_handler))
        .route("/api/schedules", get(schedules_handler))
        .route("/api/schedules/week", get(week_schedule_handler))
        .route("/api/team-stats", get(team_stats_handler))
        .route("/api/player-stats", get(player_stats_handler))
        .route("/api/current-week", get(current_week_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use crate::upstream::MemorySource;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(CacheStore::new(), Arc::new(MemorySource::new()));
        create_router(state)
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of("/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_data_endpoints_routed() {
        assert_eq!(status_of("/api/schedules?years=2024").await, StatusCode::OK);
        assert_eq!(
            status_of("/api/schedules/week?year=2024&week=1").await,
            StatusCode::OK
        );
        assert_eq!(status_of("/api/team-stats?years=2024").await, StatusCode::OK);
        assert_eq!(status_of("/api/player-stats?years=2024").await, StatusCode::OK);
        assert_eq!(status_of("/api/current-week").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(status_of("/api/standings").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_post_not_allowed() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/schedules")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
