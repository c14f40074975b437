use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::CONTACT_REGEX;

/// Accepted mock payment channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Online,
    Card,
    Upi,
    Wallet,
}

/// Request DTO for a mock tax payment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayTaxDto {
    #[validate(length(min = 1, max = 255, message = "payer name is required"))]
    pub payer_name: String,

    #[validate(regex(path = *CONTACT_REGEX, message = "contact must be a phone number"))]
    pub contact: String,

    /// Amount in rupees
    pub amount: Decimal,

    pub method: PaymentMethod,
}

/// Stub receipt returned by the mock payment gateway. Nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxReceiptDto {
    pub receipt_number: String,
    pub tax_id: String,
    pub tax_title: String,
    pub payer_name: String,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: String,
    pub paid_at: DateTime<Utc>,
}
