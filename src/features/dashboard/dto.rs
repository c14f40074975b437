use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::complaints::store::StatusCounts;

/// Lightweight complaint statistics for the public dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub total_complaints: i64,
    pub submitted: i64,
    pub assigned: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub filed_this_week: i64,
    pub filed_this_month: i64,
}

impl From<StatusCounts> for DashboardSummaryDto {
    fn from(c: StatusCounts) -> Self {
        Self {
            total_complaints: c.total,
            submitted: c.submitted,
            assigned: c.assigned,
            in_progress: c.in_progress,
            resolved: c.resolved,
            filed_this_week: c.filed_this_week,
            filed_this_month: c.filed_this_month,
        }
    }
}
