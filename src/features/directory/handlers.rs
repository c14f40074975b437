use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::directory::model::{Department, Ward};
use crate::features::directory::service::DirectoryService;
use crate::shared::types::ApiResponse;

/// List municipal departments
#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "Department directory", body = ApiResponse<Vec<Department>>)
    ),
    tag = "directory"
)]
pub async fn list_departments(
    State(service): State<Arc<DirectoryService>>,
) -> Result<Json<ApiResponse<Vec<Department>>>> {
    Ok(Json(ApiResponse::success(
        Some(service.list_departments()),
        None,
        None,
    )))
}

/// Look up ward information by ward number
#[utoipa::path(
    get,
    path = "/api/wards/{ward_no}",
    params(
        ("ward_no" = String, Path, description = "Ward number")
    ),
    responses(
        (status = 200, description = "Ward information", body = ApiResponse<Ward>),
        (status = 404, description = "Unknown ward")
    ),
    tag = "directory"
)]
pub async fn get_ward(
    State(service): State<Arc<DirectoryService>>,
    Path(ward_no): Path<String>,
) -> Result<Json<ApiResponse<Ward>>> {
    service
        .find_ward(&ward_no)
        .map(|ward| Json(ApiResponse::success(Some(ward), None, None)))
        .ok_or_else(|| AppError::NotFound(format!("Ward '{}' not found", ward_no.trim())))
}
