//! API Module
//!
//! HTTP handlers and routing for the data service REST API.
//!
//! # Endpoints
//! - `GET /` - Health check
//! - `GET /api/schedules` - Games for one or more seasons
//! - `GET /api/schedules/week` - Games for one week
//! - `GET /api/team-stats` - Team season averages
//! - `GET /api/player-stats` - Player season totals
//! - `GET /api/current-week` - Current season week

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
