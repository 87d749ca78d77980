use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::stats::handlers;
use crate::features::stats::services::StatsService;

/// Create dashboard statistics routes
pub fn routes(stats_service: Arc<StatsService>) -> Router {
    Router::new()
        .route("/api/stats", get(handlers::get_stats))
        .with_state(stats_service)
}
