use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::reports::models::{Report, ReportStatus};
use crate::modules::storage::LocalImageStorage;
use crate::shared::constants::{MAX_ISSUE_TYPE_LENGTH, MAX_LOCATION_LENGTH};
use crate::shared::time::time_ago;

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: i64,
    #[schema(example = "Pothole")]
    pub issue_type: String,
    #[schema(example = "Large pothole on Main St")]
    pub description: String,
    #[schema(example = "Not specified")]
    pub location: String,
    pub status: ReportStatus,
    pub image_filename: Option<String>,
    /// Absolute URL of the attached photo
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Relative age such as "Just now", "5 min ago" or "2024-11-10"
    #[schema(example = "3 days ago")]
    pub time_ago: String,
}

impl ReportResponseDto {
    pub fn from_report(report: Report, storage: &LocalImageStorage, now: DateTime<Utc>) -> Self {
        Self {
            image_url: report
                .image_filename
                .as_deref()
                .map(|name| storage.public_url(name)),
            time_ago: time_ago(report.created_at, now),
            id: report.id,
            issue_type: report.issue_type,
            description: report.description,
            location: report.location,
            status: report.status,
            image_filename: report.image_filename,
            created_at: report.created_at,
        }
    }
}

/// Text fields of a submission after trimming, checked before anything is stored
#[derive(Debug, Clone, Validate)]
pub struct CreateReportDto {
    #[validate(custom(function = "validate_issue_type"))]
    pub issue_type: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(custom(function = "validate_location"))]
    pub location: String,
}

fn validate_issue_type(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required").with_message("Issue type is required".into()));
    }
    if value.chars().count() > MAX_ISSUE_TYPE_LENGTH {
        return Err(ValidationError::new("length").with_message(
            format!(
                "Issue type must be at most {} characters",
                MAX_ISSUE_TYPE_LENGTH
            )
            .into(),
        ));
    }
    Ok(())
}

fn validate_location(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_LOCATION_LENGTH {
        return Err(ValidationError::new("length").with_message(
            format!("Location must be at most {} characters", MAX_LOCATION_LENGTH).into(),
        ));
    }
    Ok(())
}

impl CreateReportDto {
    /// Order in which field errors are reported
    pub const FIELD_ORDER: &'static [&'static str] = &["issue_type", "description", "location"];
}

/// A photo part received with a submission
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Multipart form for report submission (Swagger UI documentation only).
/// The handler reads axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CreateReportForm {
    #[schema(example = "Pothole")]
    pub issue_type: String,
    #[schema(example = "Large pothole on Main St")]
    pub description: String,
    /// Defaults to "Not specified"
    pub location: Option<String>,
    /// PNG or JPEG image, at most 5MB
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub photo: Option<String>,
}

/// Request DTO for updating report status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    /// Either "Active" or "Resolved"
    #[serde(default)]
    #[schema(example = "Resolved")]
    pub status: String,
}

/// Response for create and status update
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportMutationResponseDto {
    pub success: bool,
    pub message: String,
    pub report: ReportResponseDto,
}

impl ReportMutationResponseDto {
    pub fn new(message: impl Into<String>, report: ReportResponseDto) -> Self {
        Self {
            success: true,
            message: message.into(),
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::first_error_message;
    use chrono::{Duration, TimeZone};
    use tempfile::tempdir;

    fn dto(issue_type: &str, description: &str, location: &str) -> CreateReportDto {
        CreateReportDto {
            issue_type: issue_type.to_string(),
            description: description.to_string(),
            location: location.to_string(),
        }
    }

    fn message(dto: &CreateReportDto) -> String {
        first_error_message(&dto.validate().unwrap_err(), CreateReportDto::FIELD_ORDER)
    }

    #[test]
    fn test_create_dto_requires_issue_type_first() {
        assert_eq!(message(&dto("", "", "Main St")), "Issue type is required");
        assert_eq!(message(&dto("Pothole", "", "Main St")), "Description is required");
    }

    #[test]
    fn test_create_dto_length_bounds() {
        assert!(dto(
            &"x".repeat(MAX_ISSUE_TYPE_LENGTH),
            "d",
            &"y".repeat(MAX_LOCATION_LENGTH)
        )
        .validate()
        .is_ok());
        // Bounds count characters, not bytes
        assert!(dto("Pothole", "d", &"é".repeat(MAX_LOCATION_LENGTH))
            .validate()
            .is_ok());
        assert_eq!(
            message(&dto(&"x".repeat(MAX_ISSUE_TYPE_LENGTH + 1), "d", "Main St")),
            "Issue type must be at most 100 characters"
        );
        assert_eq!(
            message(&dto("Pothole", "d", &"y".repeat(MAX_LOCATION_LENGTH + 1))),
            "Location must be at most 200 characters"
        );
    }

    #[tokio::test]
    async fn test_response_derives_url_and_age() {
        let dir = tempdir().unwrap();
        let storage = LocalImageStorage::new(dir.path(), "http://localhost:5000")
            .await
            .unwrap();
        let now = Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap();

        let report = Report {
            id: 7,
            issue_type: "Pothole".to_string(),
            description: "Large pothole on Main St".to_string(),
            location: "Not specified".to_string(),
            status: ReportStatus::Active,
            image_filename: Some("abc.jpg".to_string()),
            created_at: now - Duration::minutes(90),
        };

        let dto = ReportResponseDto::from_report(report.clone(), &storage, now);
        assert_eq!(
            dto.image_url.as_deref(),
            Some("http://localhost:5000/static/uploads/abc.jpg")
        );
        assert_eq!(dto.time_ago, "1 hour ago");
        assert_eq!(dto.image_filename.as_deref(), Some("abc.jpg"));

        let without_image = Report {
            image_filename: None,
            ..report
        };
        let dto = ReportResponseDto::from_report(without_image, &storage, now);
        assert_eq!(dto.image_url, None);
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json["image_filename"].is_null());
        assert!(json["image_url"].is_null());
        assert_eq!(json["status"], "Active");
    }
}
