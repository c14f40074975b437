use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::taxes::dto::{PayTaxDto, TaxReceiptDto};
use crate::features::taxes::model::TaxItem;
use crate::features::taxes::service::TaxService;
use crate::shared::types::ApiResponse;

/// List the municipal tax catalog
#[utoipa::path(
    get,
    path = "/api/taxes",
    responses(
        (status = 200, description = "Tax catalog", body = ApiResponse<Vec<TaxItem>>)
    ),
    tag = "taxes"
)]
pub async fn list_taxes(
    State(service): State<Arc<TaxService>>,
) -> Result<Json<ApiResponse<Vec<TaxItem>>>> {
    Ok(Json(ApiResponse::success(Some(service.list()), None, None)))
}

/// Pay a tax through the mock gateway
///
/// Returns a stub receipt; no money moves and nothing is persisted.
#[utoipa::path(
    post,
    path = "/api/taxes/{tax_id}/payments",
    params(
        ("tax_id" = String, Path, description = "Tax catalog slug, e.g. property-tax")
    ),
    request_body = PayTaxDto,
    responses(
        (status = 200, description = "Payment accepted", body = ApiResponse<TaxReceiptDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown tax")
    ),
    tag = "taxes"
)]
pub async fn pay_tax(
    State(service): State<Arc<TaxService>>,
    Path(tax_id): Path<String>,
    AppJson(dto): AppJson<PayTaxDto>,
) -> Result<Json<ApiResponse<TaxReceiptDto>>> {
    let receipt = service.pay(&tax_id, dto)?;
    Ok(Json(ApiResponse::success(
        Some(receipt),
        Some("Payment successful. Keep the receipt number for your records.".to_string()),
        None,
    )))
}
