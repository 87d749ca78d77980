use utoipa::{Modify, OpenApi};

use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::stats::{dtos as stats_dtos, handlers as stats_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::update_report_status,
        reports_handlers::report_handler::delete_report,
        // Stats
        stats_handlers::stats_handler::get_stats,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            MessageResponse,
            // Reports
            reports_models::ReportStatus,
            reports_dtos::ReportResponseDto,
            reports_dtos::CreateReportForm,
            reports_dtos::UpdateReportStatusDto,
            reports_dtos::ReportMutationResponseDto,
            // Stats
            stats_dtos::StatsResponseDto,
        )
    ),
    tags(
        (name = "reports", description = "Civic issue reports"),
        (name = "stats", description = "Dashboard statistics"),
    ),
    info(
        title = "Civic Reporter API",
        version = "0.1.0",
        description = "API documentation for Civic Reporter",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
