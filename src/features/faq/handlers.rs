use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::faq::model::FaqEntry;
use crate::features::faq::service::FaqService;
use crate::shared::types::ApiResponse;

/// List frequently asked questions
#[utoipa::path(
    get,
    path = "/api/faqs",
    responses(
        (status = 200, description = "FAQ entries", body = ApiResponse<Vec<FaqEntry>>)
    ),
    tag = "faq"
)]
pub async fn list_faqs(
    State(service): State<Arc<FaqService>>,
) -> Result<Json<ApiResponse<Vec<FaqEntry>>>> {
    Ok(Json(ApiResponse::success(Some(service.list()), None, None)))
}
