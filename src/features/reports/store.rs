use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{CreateReport, Report, ReportStatus};

const REPORT_COLUMNS: &str =
    "id, issue_type, description, location, status, image_filename, created_at";

/// Report counts grouped by status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromRow)]
pub struct StatusCounts {
    pub total: i64,
    pub active: i64,
    pub resolved: i64,
}

/// Persistence for the `reports` table.
///
/// Every method is a single SQL statement, so each call is atomic on its own.
pub struct ReportStore {
    pool: SqlitePool,
}

impl ReportStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a report, stamping it with the current time
    pub async fn create(&self, data: &CreateReport) -> Result<Report> {
        self.create_at(data, Utc::now()).await
    }

    pub(crate) async fn create_at(
        &self,
        data: &CreateReport,
        created_at: DateTime<Utc>,
    ) -> Result<Report> {
        let sql = format!(
            r#"
            INSERT INTO reports (issue_type, description, location, status, image_filename, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {REPORT_COLUMNS}
            "#
        );

        let report = sqlx::query_as::<_, Report>(&sql)
            .bind(&data.issue_type)
            .bind(&data.description)
            .bind(&data.location)
            .bind(ReportStatus::Active)
            .bind(&data.image_filename)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create report: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(report)
    }

    /// All reports, newest first
    pub async fn list_all(&self) -> Result<Vec<Report>> {
        let sql = format!("SELECT {REPORT_COLUMNS} FROM reports ORDER BY created_at DESC, id DESC");

        sqlx::query_as::<_, Report>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get(&self, id: i64) -> Result<Option<Report>> {
        let sql = format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = ?");

        sqlx::query_as::<_, Report>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get report {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    /// Set the status of a report, returning the updated row if it exists
    pub async fn update_status(&self, id: i64, status: ReportStatus) -> Result<Option<Report>> {
        let sql = format!("UPDATE reports SET status = ? WHERE id = ? RETURNING {REPORT_COLUMNS}");

        sqlx::query_as::<_, Report>(&sql)
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update status of report {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    /// Delete a report row. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reports WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete report {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_by_status(&self) -> Result<StatusCounts> {
        sqlx::query_as::<_, StatusCounts>(
            r#"
            SELECT
                COUNT(*) AS total,
                COALESCE(SUM(CASE WHEN status = 'Active' THEN 1 ELSE 0 END), 0) AS active,
                COALESCE(SUM(CASE WHEN status = 'Resolved' THEN 1 ELSE 0 END), 0) AS resolved
            FROM reports
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count reports: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Creation timestamps falling in `[start, end)`
    pub async fn created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>> {
        sqlx::query_scalar::<_, DateTime<Utc>>(
            "SELECT created_at FROM reports WHERE created_at >= ? AND created_at < ?",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch report timestamps: {:?}", e);
            AppError::Database(e)
        })
    }
}
