use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::core::database;
use crate::core::openapi::ApiDoc;
use crate::features::reports::dtos::PhotoUpload;
use crate::features::reports::models::CreateReport;
use crate::features::reports::{ReportService, ReportStore};
use crate::features::stats::StatsService;
use crate::modules::storage::LocalImageStorage;

/// Fresh in-memory database with migrations applied.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the lifetime of the pool.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    database::run_migrations(&pool).await.unwrap();
    pool
}

pub fn create_report_data(issue_type: &str) -> CreateReport {
    CreateReport {
        issue_type: issue_type.to_string(),
        description: format!("{} reported by a resident", issue_type),
        location: "Main St".to_string(),
        image_filename: None,
    }
}

pub fn photo(filename: &str) -> PhotoUpload {
    PhotoUpload {
        filename: filename.to_string(),
        data: b"\x89PNG fake image bytes".to_vec(),
    }
}

/// Full application router over an in-memory database and the given upload directory
pub async fn test_app(upload_dir: &std::path::Path) -> axum::Router {
    let storage = Arc::new(
        LocalImageStorage::new(upload_dir, "http://localhost:5000")
            .await
            .unwrap(),
    );
    let store = Arc::new(ReportStore::new(test_pool().await));
    let report_service = Arc::new(ReportService::new(Arc::clone(&store), Arc::clone(&storage)));
    let stats_service = Arc::new(StatsService::new(store));

    crate::build_app(crate::AppServices {
        report_service,
        stats_service,
        storage,
        cors_allowed_origins: vec!["*".to_string()],
        openapi: ApiDoc::openapi(),
    })
}
