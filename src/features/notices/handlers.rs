use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::error::Result;
use crate::features::notices::model::Notice;
use crate::features::notices::service::NoticeService;
use crate::shared::types::ApiResponse;

/// Query params for listing notices
#[derive(Debug, Deserialize)]
pub struct ListNoticesQuery {
    /// Restrict to one category (tender, announcement, policy, event)
    pub category: Option<String>,
}

/// List public notices, newest first
#[utoipa::path(
    get,
    path = "/api/notices",
    params(
        ("category" = Option<String>, Query, description = "Filter by notice category")
    ),
    responses(
        (status = 200, description = "Public notices", body = ApiResponse<Vec<Notice>>)
    ),
    tag = "notices"
)]
pub async fn list_notices(
    State(service): State<Arc<NoticeService>>,
    Query(query): Query<ListNoticesQuery>,
) -> Result<Json<ApiResponse<Vec<Notice>>>> {
    let notices = service.list(query.category.as_deref());
    Ok(Json(ApiResponse::success(Some(notices), None, None)))
}
