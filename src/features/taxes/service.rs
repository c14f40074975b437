use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::taxes::dto::{PayTaxDto, TaxReceiptDto};
use crate::features::taxes::model::TaxItem;
use crate::shared::validation::collect_field_errors;

/// Tax catalog plus a payment-gateway stub.
///
/// Payments are mock-only: a receipt is issued and returned but nothing is
/// persisted or charged.
pub struct TaxService {
    taxes: Arc<Vec<TaxItem>>,
}

impl TaxService {
    pub fn new(taxes: Arc<Vec<TaxItem>>) -> Self {
        Self { taxes }
    }

    pub fn list(&self) -> Vec<TaxItem> {
        self.taxes.as_ref().clone()
    }

    /// Generate a receipt number in format: RCPT-YYYY-NNNNNNN
    fn generate_receipt_number(&self) -> String {
        let year = Utc::now().format("%Y");
        let seq: u32 = rand::thread_rng().gen_range(0..10_000_000);
        format!("RCPT-{}-{:07}", year, seq)
    }

    /// Process a mock payment against a catalog entry.
    pub fn pay(&self, tax_id: &str, dto: PayTaxDto) -> Result<TaxReceiptDto> {
        let mut field_errors = match dto.validate() {
            Ok(()) => Vec::new(),
            Err(e) => collect_field_errors(&e),
        };
        if dto.amount <= Decimal::ZERO {
            field_errors.push("amount: must be greater than zero".to_string());
        }
        if !field_errors.is_empty() {
            return Err(AppError::Validation(field_errors));
        }

        let tax = self
            .taxes
            .iter()
            .find(|t| t.id == tax_id)
            .ok_or_else(|| AppError::NotFound(format!("Tax '{}' not found", tax_id)))?;

        let receipt = TaxReceiptDto {
            receipt_number: self.generate_receipt_number(),
            tax_id: tax.id.clone(),
            tax_title: tax.title.clone(),
            payer_name: dto.payer_name,
            amount: dto.amount,
            method: dto.method,
            status: "Paid".to_string(),
            paid_at: Utc::now(),
        };

        tracing::info!(
            "Mock tax payment accepted: receipt={}, tax={}, amount={}",
            receipt.receipt_number,
            receipt.tax_id,
            receipt.amount
        );

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::MunicipalContent;
    use crate::features::taxes::dto::PaymentMethod;

    fn service() -> TaxService {
        TaxService::new(Arc::new(MunicipalContent::default_content().taxes))
    }

    fn payment() -> PayTaxDto {
        PayTaxDto {
            payer_name: "Asha".to_string(),
            contact: "9876543210".to_string(),
            amount: Decimal::new(15000, 2), // 150.00
            method: PaymentMethod::Upi,
        }
    }

    #[test]
    fn test_pay_known_tax_issues_receipt() {
        let receipt = service().pay("water-tax", payment()).unwrap();
        assert!(receipt.receipt_number.starts_with("RCPT-"));
        assert_eq!(receipt.tax_id, "water-tax");
        assert_eq!(receipt.status, "Paid");
        assert_eq!(receipt.amount, Decimal::new(15000, 2));
    }

    #[test]
    fn test_pay_unknown_tax_is_not_found() {
        let err = service().pay("air-tax", payment()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_pay_rejects_non_positive_amount() {
        let mut dto = payment();
        dto.amount = Decimal::ZERO;
        let err = service().pay("water-tax", dto).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_pay_rejects_bad_contact() {
        let mut dto = payment();
        dto.contact = "not-a-phone".to_string();
        let err = service().pay("water-tax", dto).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
