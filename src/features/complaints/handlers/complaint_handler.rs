use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::complaints::dtos::{
    AppendHistoryDto, ComplaintFiledDto, ComplaintResponseDto, FileComplaintDto,
    ListComplaintsQuery,
};
use crate::features::complaints::services::ComplaintService;
use crate::shared::types::{ApiResponse, Meta};

/// File a new complaint
///
/// Public endpoint. The server issues the tracking id; the response carries
/// it for later tracking.
#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = FileComplaintDto,
    responses(
        (status = 201, description = "Complaint filed", body = ApiResponse<ComplaintFiledDto>),
        (status = 400, description = "Validation error with field-level detail"),
        (status = 503, description = "Tracking id allocation exhausted, retry")
    ),
    tag = "complaints"
)]
pub async fn file_complaint(
    State(service): State<Arc<ComplaintService>>,
    AppJson(dto): AppJson<FileComplaintDto>,
) -> Result<(StatusCode, Json<ApiResponse<ComplaintFiledDto>>)> {
    let complaint = service.file(dto).await?;
    let filed = ComplaintFiledDto {
        tracking_id: complaint.tracking_id,
        status: complaint.status,
    };
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(filed),
            Some(
                "Complaint filed successfully. Use your tracking ID to follow progress."
                    .to_string(),
            ),
            None,
        )),
    ))
}

/// Track a complaint by tracking id
///
/// Lookup is case-insensitive; surrounding whitespace is ignored.
#[utoipa::path(
    get,
    path = "/api/complaints/{tracking_id}",
    params(
        ("tracking_id" = String, Path, description = "Public tracking id, e.g. C-2507291234")
    ),
    responses(
        (status = 200, description = "Complaint with full history", body = ApiResponse<ComplaintResponseDto>),
        (status = 404, description = "No complaint under this tracking id")
    ),
    tag = "complaints"
)]
pub async fn track_complaint(
    State(service): State<Arc<ComplaintService>>,
    Path(tracking_id): Path<String>,
) -> Result<Json<ApiResponse<ComplaintResponseDto>>> {
    // Not-found is an expected outcome of the lifecycle service; it only
    // becomes a 404 here at the HTTP boundary.
    match service.track(&tracking_id).await? {
        Some(complaint) => Ok(Json(ApiResponse::success(Some(complaint), None, None))),
        None => Err(AppError::NotFound("Complaint not found.".to_string())),
    }
}

/// List complaints filed under a contact number
#[utoipa::path(
    get,
    path = "/api/complaints",
    params(ListComplaintsQuery),
    responses(
        (status = 200, description = "Complaints for this contact, newest first", body = ApiResponse<Vec<ComplaintResponseDto>>)
    ),
    tag = "complaints"
)]
pub async fn list_complaints(
    State(service): State<Arc<ComplaintService>>,
    Query(query): Query<ListComplaintsQuery>,
) -> Result<Json<ApiResponse<Vec<ComplaintResponseDto>>>> {
    let complaints = service.list_by_contact(&query.contact).await?;
    let total = complaints.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(complaints),
        None,
        Some(Meta { total }),
    )))
}

/// Append a status transition to a complaint (administrative)
#[utoipa::path(
    post,
    path = "/api/complaints/{tracking_id}/history",
    params(
        ("tracking_id" = String, Path, description = "Public tracking id")
    ),
    request_body = AppendHistoryDto,
    responses(
        (status = 200, description = "Updated complaint", body = ApiResponse<ComplaintResponseDto>),
        (status = 404, description = "No complaint under this tracking id")
    ),
    tag = "complaints"
)]
pub async fn append_history(
    State(service): State<Arc<ComplaintService>>,
    Path(tracking_id): Path<String>,
    AppJson(dto): AppJson<AppendHistoryDto>,
) -> Result<Json<ApiResponse<ComplaintResponseDto>>> {
    let updated = service.advance(&tracking_id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(updated),
        Some("Complaint status updated.".to_string()),
        None,
    )))
}
