use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A municipal department directory entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: String,
    pub description: String,
    pub head: String,
    pub contact: String,
    pub email: String,
    pub address: String,
}

/// Ward information: elected corporator and recent civic work.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ward {
    pub ward_no: String,
    pub corporator: String,
    pub mobile: String,
    pub recent_work: Vec<String>,
}
