use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::service::CategoryService;
use crate::shared::types::ApiResponse;

/// List complaint categories citizens can file under
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Category registry", body = ApiResponse<Vec<String>>)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    Ok(Json(ApiResponse::success(Some(service.list()), None, None)))
}
