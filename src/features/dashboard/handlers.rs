use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::dashboard::dto::DashboardSummaryDto;
use crate::features::dashboard::service::DashboardService;
use crate::shared::types::ApiResponse;

/// Complaint statistics for the public dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses(
        (status = 200, description = "Complaint counts by status", body = ApiResponse<DashboardSummaryDto>)
    ),
    tag = "dashboard"
)]
pub async fn get_summary(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>> {
    let summary = service.get_summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}
