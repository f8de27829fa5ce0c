//! NFL Data Service - schedules and statistics over HTTP
//!
//! Serves nflverse data as normalized JSON with a five minute response cache.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nfl_data_service::api::{create_router, AppState};
use nfl_data_service::cache::CACHE_TTL_SECS;
use nfl_data_service::config::Config;
use nfl_data_service::upstream::{Category, DataSource};

/// Season fetched by the startup connectivity check
const PROBE_SEASON: i32 = 2024;

/// Main entry point for the data service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the nflverse client, cache and query service
/// 4. Optionally probe the upstream source
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nfl_data_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting NFL Data Service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, schedules_url={}, cache_ttl={}s",
        config.server_port, config.schedules_url, CACHE_TTL_SECS
    );

    if config.uses_default_team_stats_url() {
        warn!(
            "TEAM_STATS_URL is not set; the default table lacks the team stats columns \
             and /api/team-stats will return errors"
        );
    }

    let state = AppState::from_config(&config);
    if config.probe_upstream {
        probe_upstream(state.service.source().as_ref()).await;
    }

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Fetches one season of schedules and logs the outcome. Never fatal.
async fn probe_upstream(source: &dyn DataSource) {
    match source
        .fetch_records(Category::Schedules, &[PROBE_SEASON])
        .await
    {
        Ok(games) => info!(
            "{} connection successful ({} games found for {})",
            source.name(),
            games.len(),
            PROBE_SEASON
        ),
        Err(err) => warn!("{} connectivity check failed: {}", source.name(), err),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
