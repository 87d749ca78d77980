use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::str::FromStr;
use utoipa::ToSchema;

/// Resolution state of a report, stored as its variant name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Type, ToSchema)]
pub enum ReportStatus {
    #[default]
    Active,
    Resolved,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Active => "Active",
            ReportStatus::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    /// Exact, case-sensitive match on "Active" or "Resolved"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(ReportStatus::Active),
            "Resolved" => Ok(ReportStatus::Resolved),
            other => Err(format!("Unknown report status: {}", other)),
        }
    }
}

/// Database model for report
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Report {
    pub id: i64,
    pub issue_type: String,
    pub description: String,
    pub location: String,
    pub status: ReportStatus,
    pub image_filename: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new report (already trimmed and validated)
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub issue_type: String,
    pub description: String,
    pub location: String,
    pub image_filename: Option<String>,
}
