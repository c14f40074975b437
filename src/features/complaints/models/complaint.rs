use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::INITIAL_HISTORY_DETAILS;

/// Complaint workflow status.
///
/// Serialized with the human-presentable labels the portal shows citizens.
/// "Work in Progress" is accepted as an input alias of "In Progress".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ComplaintStatus {
    Submitted,
    Assigned,
    #[serde(rename = "In Progress", alias = "Work in Progress")]
    InProgress,
    Resolved,
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplaintStatus::Submitted => write!(f, "Submitted"),
            ComplaintStatus::Assigned => write!(f, "Assigned"),
            ComplaintStatus::InProgress => write!(f, "In Progress"),
            ComplaintStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

impl std::str::FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Submitted" => Ok(ComplaintStatus::Submitted),
            "Assigned" => Ok(ComplaintStatus::Assigned),
            "In Progress" | "Work in Progress" => Ok(ComplaintStatus::InProgress),
            "Resolved" => Ok(ComplaintStatus::Resolved),
            other => Err(format!("Unknown complaint status '{}'", other)),
        }
    }
}

/// One append-only entry in a complaint's status history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub status: ComplaintStatus,
    pub details: String,
    pub recorded_at: DateTime<Utc>,
}

/// Best-effort geocoding snapshot resolved from the submitted address.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolvedLocation {
    pub display_name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// A citizen complaint record.
///
/// `tracking_id` is assigned exactly once at creation and never changes.
/// `history` always holds at least the initial Submitted entry, and its last
/// entry's status equals `status`.
#[derive(Debug, Clone)]
pub struct Complaint {
    pub id: Uuid,
    pub tracking_id: String,
    pub submitter_name: String,
    pub submitter_contact: String,
    pub category: String,
    pub address: Option<String>,
    pub description: String,
    pub status: ComplaintStatus,
    pub history: Vec<HistoryEntry>,
    pub location: Option<ResolvedLocation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Complaint {
    /// Build a fresh complaint in the Submitted state with its mandatory
    /// initial history entry.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tracking_id: String,
        submitter_name: String,
        submitter_contact: String,
        category: String,
        address: Option<String>,
        description: String,
        location: Option<ResolvedLocation>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tracking_id,
            submitter_name,
            submitter_contact,
            category,
            address,
            description,
            status: ComplaintStatus::Submitted,
            history: vec![HistoryEntry {
                status: ComplaintStatus::Submitted,
                details: INITIAL_HISTORY_DETAILS.to_string(),
                recorded_at: now,
            }],
            location,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_round_trip() {
        for status in [
            ComplaintStatus::Submitted,
            ComplaintStatus::Assigned,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
        ] {
            let parsed: ComplaintStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_accepts_work_in_progress_alias() {
        let parsed: ComplaintStatus = "Work in Progress".parse().unwrap();
        assert_eq!(parsed, ComplaintStatus::InProgress);

        let from_json: ComplaintStatus =
            serde_json::from_str("\"Work in Progress\"").unwrap();
        assert_eq!(from_json, ComplaintStatus::InProgress);
        // Canonical spelling always serializes
        assert_eq!(
            serde_json::to_string(&from_json).unwrap(),
            "\"In Progress\""
        );
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!("Closed".parse::<ComplaintStatus>().is_err());
    }

    #[test]
    fn test_new_complaint_has_initial_history() {
        let c = Complaint::new(
            "C-2507291234001".to_string(),
            "Asha".to_string(),
            "9876543210".to_string(),
            "Road Potholes".to_string(),
            None,
            "pothole on MG road".to_string(),
            None,
        );
        assert_eq!(c.status, ComplaintStatus::Submitted);
        assert_eq!(c.history.len(), 1);
        assert_eq!(c.history[0].status, ComplaintStatus::Submitted);
        assert_eq!(c.history[0].details, INITIAL_HISTORY_DETAILS);
        assert_eq!(c.created_at, c.history[0].recorded_at);
    }
}
