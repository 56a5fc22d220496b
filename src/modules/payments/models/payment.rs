use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, timezone, AppError, Result};
use crate::modules::installments::models::Installment;

/// A payment recorded against one installment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub installment_id: i64,
    pub amount: Decimal,
    pub paid_at: DateTime<Utc>,
    pub receipt_number: String,
}

/// Payment form values as entered by the cashier
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentPayload {
    pub amount: Decimal,
    /// Timestamp as typed; read in the ledger's local offset when it has none
    pub paid_at: String,
    pub receipt_number: String,
}

impl PaymentPayload {
    pub fn new(
        amount: Decimal,
        paid_at: impl Into<String>,
        receipt_number: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            paid_at: paid_at.into(),
            receipt_number: receipt_number.into(),
        }
    }

    /// Check the payload against `installment` and produce the request body.
    ///
    /// Rejects settled installments, non-positive amounts, amounts finer
    /// than a centavo or above the outstanding balance, and blank timestamps
    /// or receipt numbers. Receipt uniqueness is left to the backend.
    pub fn validate(&self, installment: &Installment, offset: FixedOffset) -> Result<NewPayment> {
        if !installment.can_accept_payment() {
            return Err(AppError::validation("installment is already paid"));
        }

        if self.amount <= Decimal::ZERO {
            return Err(AppError::validation("amount must be greater than zero"));
        }
        money::validate_amount("amount", self.amount)?;

        let amount_cents = money::to_cents(self.amount)?;
        if amount_cents > installment.outstanding_cents()? {
            return Err(AppError::validation("amount exceeds outstanding"));
        }

        let paid_at = timezone::parse_form_timestamp(&self.paid_at, offset)?;

        let receipt_number = self.receipt_number.trim();
        if receipt_number.is_empty() {
            return Err(AppError::validation("Receipt number is required"));
        }

        Ok(NewPayment {
            amount: money::from_cents(amount_cents),
            paid_at,
            receipt_number: receipt_number.to_string(),
        })
    }
}

/// Body of the record-payment request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPayment {
    pub amount: Decimal,
    pub paid_at: DateTime<Utc>,
    pub receipt_number: String,
}
