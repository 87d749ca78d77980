use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::stats::dtos::StatsResponseDto;
use crate::features::stats::services::StatsService;
use crate::shared::types::ErrorResponse;

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Status counts and this week's daily histogram", body = StatsResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_stats(
    State(service): State<Arc<StatsService>>,
) -> Result<Json<StatsResponseDto>, AppError> {
    let stats = service.compute().await?;
    Ok(Json(stats))
}
