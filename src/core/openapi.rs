use utoipa::{Modify, OpenApi};

use crate::features::categories::handlers as categories_handlers;
use crate::features::complaints::{
    dtos as complaints_dtos, handlers as complaints_handlers, models as complaints_models,
};
use crate::features::dashboard::{dto as dashboard_dto, handlers as dashboard_handlers};
use crate::features::directory::{handlers as directory_handlers, model as directory_model};
use crate::features::faq::{handlers as faq_handlers, model as faq_model};
use crate::features::notices::{handlers as notices_handlers, model as notices_model};
use crate::features::taxes::{dto as taxes_dto, handlers as taxes_handlers, model as taxes_model};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Complaints
        complaints_handlers::complaint_handler::file_complaint,
        complaints_handlers::complaint_handler::track_complaint,
        complaints_handlers::complaint_handler::list_complaints,
        complaints_handlers::complaint_handler::append_history,
        // Categories (public)
        categories_handlers::list_categories,
        // Directory (public)
        directory_handlers::list_departments,
        directory_handlers::get_ward,
        // Notices (public)
        notices_handlers::list_notices,
        // FAQ (public)
        faq_handlers::list_faqs,
        // Taxes (public, mock gateway)
        taxes_handlers::list_taxes,
        taxes_handlers::pay_tax,
        // Dashboard (public)
        dashboard_handlers::get_summary,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Complaints
            complaints_models::ComplaintStatus,
            complaints_models::ResolvedLocation,
            complaints_dtos::SubmitterDto,
            complaints_dtos::FileComplaintDto,
            complaints_dtos::ComplaintFiledDto,
            complaints_dtos::HistoryEntryDto,
            complaints_dtos::ComplaintResponseDto,
            complaints_dtos::AppendHistoryDto,
            ApiResponse<complaints_dtos::ComplaintFiledDto>,
            ApiResponse<complaints_dtos::ComplaintResponseDto>,
            ApiResponse<Vec<complaints_dtos::ComplaintResponseDto>>,
            // Categories
            ApiResponse<Vec<String>>,
            // Directory
            directory_model::Department,
            directory_model::Ward,
            ApiResponse<Vec<directory_model::Department>>,
            ApiResponse<directory_model::Ward>,
            // Notices
            notices_model::Notice,
            ApiResponse<Vec<notices_model::Notice>>,
            // FAQ
            faq_model::FaqEntry,
            ApiResponse<Vec<faq_model::FaqEntry>>,
            // Taxes
            taxes_model::TaxItem,
            taxes_dto::PaymentMethod,
            taxes_dto::PayTaxDto,
            taxes_dto::TaxReceiptDto,
            ApiResponse<Vec<taxes_model::TaxItem>>,
            ApiResponse<taxes_dto::TaxReceiptDto>,
            // Dashboard
            dashboard_dto::DashboardSummaryDto,
            ApiResponse<dashboard_dto::DashboardSummaryDto>,
        )
    ),
    tags(
        (name = "complaints", description = "Complaint filing, tracking and status history"),
        (name = "categories", description = "Complaint category registry (public)"),
        (name = "directory", description = "Municipal departments and wards (public)"),
        (name = "notices", description = "Public notice board"),
        (name = "faq", description = "Frequently asked questions (public)"),
        (name = "taxes", description = "Tax catalog and mock payment gateway"),
        (name = "dashboard", description = "Public complaint statistics"),
    ),
    info(
        title = "CivicTrack API",
        version = "0.1.0",
        description = "API documentation for CivicTrack",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
