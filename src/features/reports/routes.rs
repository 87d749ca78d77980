use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, put},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;
use crate::shared::constants::MAX_UPLOAD_SIZE;

/// Create routes for the reports feature
pub fn routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports)
                .post(handlers::create_report)
                // Whole submission, photo included, is capped
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE)),
        )
        .route("/api/reports/{id}", delete(handlers::delete_report))
        .route(
            "/api/reports/{id}/status",
            put(handlers::update_report_status),
        )
        .with_state(report_service)
}
