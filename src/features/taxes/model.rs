use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry for one municipal tax or fee.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxItem {
    /// Stable slug used in payment URLs, e.g. "property-tax"
    pub id: String,
    pub title: String,
    pub description: String,
    /// Published rate as display text, e.g. "₹12 per sq ft"
    pub base_rate: String,
    pub due_date: String,
}
