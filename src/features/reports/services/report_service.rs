use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{CreateReportDto, PhotoUpload, ReportResponseDto};
use crate::features::reports::models::{CreateReport, Report, ReportStatus};
use crate::features::reports::store::ReportStore;
use crate::modules::storage::LocalImageStorage;
use crate::shared::constants::DEFAULT_LOCATION;
use crate::shared::validation::first_error_message;

/// Service for report operations
pub struct ReportService {
    store: Arc<ReportStore>,
    storage: Arc<LocalImageStorage>,
}

impl ReportService {
    pub fn new(store: Arc<ReportStore>, storage: Arc<LocalImageStorage>) -> Self {
        Self { store, storage }
    }

    /// Validate a submission, store its photo if any, and persist it.
    ///
    /// Text fields are trimmed first. A blank location becomes "Not specified".
    /// If the insert fails after the photo was written, the photo is removed again.
    pub async fn create_report(
        &self,
        issue_type: &str,
        description: &str,
        location: Option<&str>,
        photo: Option<PhotoUpload>,
    ) -> Result<Report> {
        let location = location.map(str::trim).unwrap_or_default();
        let dto = CreateReportDto {
            issue_type: issue_type.trim().to_string(),
            description: description.trim().to_string(),
            location: if location.is_empty() {
                DEFAULT_LOCATION.to_string()
            } else {
                location.to_string()
            },
        };

        dto.validate().map_err(|e| {
            AppError::Validation(first_error_message(&e, CreateReportDto::FIELD_ORDER))
        })?;

        let image_filename = match photo {
            Some(photo) => {
                if !LocalImageStorage::validate_extension(&photo.filename) {
                    return Err(AppError::Validation(
                        "Invalid file type. Only JPG and PNG allowed".to_string(),
                    ));
                }
                Some(self.storage.store(&photo.data, &photo.filename).await?)
            }
            None => None,
        };

        let data = CreateReport {
            issue_type: dto.issue_type,
            description: dto.description,
            location: dto.location,
            image_filename,
        };

        let report = match self.store.create(&data).await {
            Ok(report) => report,
            Err(e) => {
                if let Some(filename) = &data.image_filename {
                    self.storage.delete(filename).await;
                }
                return Err(e);
            }
        };

        tracing::info!(
            "Report created: id={}, type={}",
            report.id,
            report.issue_type
        );

        Ok(report)
    }

    /// All reports, newest first
    pub async fn list_reports(&self) -> Result<Vec<Report>> {
        self.store.list_all().await
    }

    /// Shape a report for the wire, computing its age against the current time
    pub fn to_response(&self, report: Report) -> ReportResponseDto {
        ReportResponseDto::from_report(report, &self.storage, Utc::now())
    }

    /// Change a report's status to "Active" or "Resolved"
    pub async fn update_status(&self, id: i64, new_status: &str) -> Result<Report> {
        let existing = self.get_report(id).await?;

        let status: ReportStatus = new_status.trim().parse().map_err(|_| {
            AppError::Validation("Invalid status. Must be \"Active\" or \"Resolved\"".to_string())
        })?;

        let report = self
            .store
            .update_status(id, status)
            .await?
            .ok_or_else(|| report_not_found(id))?;

        tracing::info!(
            "Report {} status changed: {} -> {}",
            id,
            existing.status,
            report.status
        );

        Ok(report)
    }

    /// Delete a report and, best-effort, its photo
    pub async fn delete_report(&self, id: i64) -> Result<()> {
        let report = self.get_report(id).await?;

        if let Some(filename) = &report.image_filename {
            self.storage.delete(filename).await;
        }

        if !self.store.delete(id).await? {
            return Err(report_not_found(id));
        }

        tracing::info!("Report {} deleted successfully", id);
        Ok(())
    }

    /// Fetch a report, failing with NotFound when the id is unknown
    pub async fn get_report(&self, id: i64) -> Result<Report> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| report_not_found(id))
    }
}

fn report_not_found(id: i64) -> AppError {
    tracing::debug!("Report {} not found", id);
    AppError::NotFound("Report not found".to_string())
}
