use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A frequently asked question with its published answer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
