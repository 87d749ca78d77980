use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dashboard statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatsResponseDto {
    pub total: i64,
    pub active: i64,
    pub resolved: i64,
    /// Reports created per day of the current week, Monday first (always 7 entries)
    #[schema(example = json!([0, 2, 1, 0, 0, 3, 0]))]
    pub weekly_data: Vec<i64>,
}
