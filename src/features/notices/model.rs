use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A published municipal notice (announcement, tender, policy or event).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: i64,
    pub title: String,
    /// Publication date, ISO `YYYY-MM-DD`
    pub date: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}
