use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tracing::debug;

use crate::core::error::Result;
use crate::core::extractor::{
    multipart_read_error, AppJson, AppJsonRejection, AppMultipart, AppPath,
};
use crate::features::reports::dtos::{
    CreateReportForm, PhotoUpload, ReportMutationResponseDto, ReportResponseDto,
    UpdateReportStatusDto,
};
use crate::features::reports::services::ReportService;
use crate::shared::types::{ErrorResponse, MessageResponse};

/// List all reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "reports",
    responses(
        (status = 200, description = "All reports, newest first", body = Vec<ReportResponseDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<Vec<ReportResponseDto>>> {
    let reports = service.list_reports().await?;
    let dtos = reports
        .into_iter()
        .map(|r| service.to_response(r))
        .collect();
    Ok(Json(dtos))
}

/// Submit a new report
///
/// Accepts multipart/form-data with:
/// - `issue_type`: Kind of issue (required)
/// - `description`: What is wrong (required)
/// - `location`: Where it is (optional, defaults to "Not specified")
/// - `photo`: PNG or JPEG image (optional)
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "reports",
    request_body(
        content = CreateReportForm,
        content_type = "multipart/form-data",
        description = "Report form with an optional photo",
    ),
    responses(
        (status = 201, description = "Report created", body = ReportMutationResponseDto),
        (status = 400, description = "Missing field or invalid file type", body = ErrorResponse),
        (status = 413, description = "Request larger than 5MB", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    AppMultipart(mut multipart): AppMultipart,
) -> Result<(StatusCode, Json<ReportMutationResponseDto>)> {
    let mut issue_type = String::new();
    let mut description = String::new();
    let mut location: Option<String> = None;
    let mut photo: Option<PhotoUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_read_error)? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "issue_type" => issue_type = field.text().await.map_err(multipart_read_error)?,
            "description" => description = field.text().await.map_err(multipart_read_error)?,
            "location" => location = Some(field.text().await.map_err(multipart_read_error)?),
            "photo" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await.map_err(multipart_read_error)?;

                // Browsers send an empty, unnamed part when no file was chosen
                if filename.is_empty() {
                    debug!("Photo field without filename, ignoring");
                } else {
                    photo = Some(PhotoUpload {
                        filename,
                        data: data.to_vec(),
                    });
                }
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let report = service
        .create_report(&issue_type, &description, location.as_deref(), photo)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReportMutationResponseDto::new(
            "Report created successfully",
            service.to_response(report),
        )),
    ))
}

/// Mark a report as Active or Resolved
#[utoipa::path(
    put,
    path = "/api/reports/{id}/status",
    tag = "reports",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ReportMutationResponseDto),
        (status = 400, description = "Invalid status value or malformed body", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse)
    )
)]
pub async fn update_report_status(
    State(service): State<Arc<ReportService>>,
    AppPath(id): AppPath<i64>,
    body: std::result::Result<AppJson<UpdateReportStatusDto>, AppJsonRejection>,
) -> Result<Json<ReportMutationResponseDto>> {
    // Unknown ids answer 404 even when the body is also unusable
    service.get_report(id).await?;
    let AppJson(dto) = body?;

    let report = service.update_status(id, &dto.status).await?;
    let message = format!("Report marked as {}", report.status);

    Ok(Json(ReportMutationResponseDto::new(
        message,
        service.to_response(report),
    )))
}

/// Delete a report and its photo
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    tag = "reports",
    params(
        ("id" = i64, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report deleted", body = MessageResponse),
        (status = 404, description = "Report not found", body = ErrorResponse)
    )
)]
pub async fn delete_report(
    State(service): State<Arc<ReportService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>> {
    service.delete_report(id).await?;
    Ok(Json(MessageResponse::success("Report deleted successfully")))
}

