use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::complaints::models::{
    Complaint, ComplaintStatus, HistoryEntry, ResolvedLocation,
};
use crate::shared::validation::CONTACT_REGEX;

/// Identity of the filing citizen.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitterDto {
    /// Full name of the citizen
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    /// Contact phone number, also the reference for listing own complaints
    #[validate(regex(path = *CONTACT_REGEX, message = "contact must be a phone number"))]
    pub contact: String,
}

/// Request DTO for filing a new complaint.
///
/// Note the absence of any identifier field: tracking ids are issued solely
/// by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileComplaintDto {
    #[validate(nested)]
    pub submitter: SubmitterDto,

    /// Complaint category; must be one of the configured registry entries
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    /// Optional free-text location of the issue
    #[validate(length(max = 1000, message = "address must not exceed 1000 characters"))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 5000, message = "description is required"))]
    pub description: String,
}

/// Response DTO returned right after filing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintFiledDto {
    pub tracking_id: String,
    pub status: ComplaintStatus,
}

/// One history entry in a complaint representation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryDto {
    pub status: ComplaintStatus,
    pub details: String,
    pub recorded_at: DateTime<Utc>,
}

impl From<HistoryEntry> for HistoryEntryDto {
    fn from(e: HistoryEntry) -> Self {
        Self {
            status: e.status,
            details: e.details,
            recorded_at: e.recorded_at,
        }
    }
}

/// Full complaint representation: current status plus ordered history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintResponseDto {
    pub tracking_id: String,
    pub submitter: SubmitterDto,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub description: String,
    pub status: ComplaintStatus,
    pub history: Vec<HistoryEntryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<ResolvedLocation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Complaint> for ComplaintResponseDto {
    fn from(c: Complaint) -> Self {
        Self {
            tracking_id: c.tracking_id,
            submitter: SubmitterDto {
                name: c.submitter_name,
                contact: c.submitter_contact,
            },
            category: c.category,
            address: c.address,
            description: c.description,
            status: c.status,
            history: c.history.into_iter().map(|e| e.into()).collect(),
            location: c.location,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Request DTO for the administrative status-advance endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppendHistoryDto {
    pub status: ComplaintStatus,

    /// Explanatory note shown to the citizen in the history timeline
    #[validate(length(min = 1, max = 2000, message = "details is required"))]
    pub details: String,
}

/// Query params for listing a citizen's own complaints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListComplaintsQuery {
    /// Submitter contact number the complaints were filed under
    pub contact: String,
}
