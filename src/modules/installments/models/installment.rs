use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};

/// One scheduled partial payment against an assessment's total.
///
/// Installments are never edited after the plan is created; the only change
/// they see is `paid_amount` growing as payments are recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub id: i64,
    pub assessment_id: i64,
    pub due_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    /// Sum of recorded payments
    #[serde(default)]
    pub paid_amount: Decimal,
    /// Backend flag; also set locally once outstanding reaches zero
    #[serde(default)]
    pub is_paid: bool,
}

/// Installment status. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentStatus {
    Unpaid,
    PartiallyPaid,
    Paid,
}

impl InstallmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::PartiallyPaid => "partially_paid",
            Self::Paid => "paid",
        }
    }
}

impl std::fmt::Display for InstallmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Installment {
    /// `amount - paid_amount`
    pub fn outstanding(&self) -> Decimal {
        self.amount - self.paid_amount
    }

    pub fn outstanding_cents(&self) -> Result<i64> {
        Ok(money::to_cents(self.amount)? - money::to_cents(self.paid_amount)?)
    }

    /// True once the backend says so or nothing is left to pay
    pub fn is_settled(&self) -> bool {
        self.is_paid
            || self
                .outstanding_cents()
                .map(|cents| cents <= 0)
                .unwrap_or(false)
    }

    pub fn status(&self) -> InstallmentStatus {
        if self.is_settled() {
            InstallmentStatus::Paid
        } else if self.paid_amount > Decimal::ZERO {
            InstallmentStatus::PartiallyPaid
        } else {
            InstallmentStatus::Unpaid
        }
    }

    /// Payments are accepted only while something is outstanding
    pub fn can_accept_payment(&self) -> bool {
        !self.is_settled()
    }

    /// Unsettled and due strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_settled() && self.due_date < today
    }

    /// Apply a payment the backend has accepted.
    ///
    /// The amount must not exceed what is outstanding; when it clears the
    /// balance the installment becomes paid.
    pub fn apply_payment(&mut self, amount: Decimal) -> Result<()> {
        if !self.can_accept_payment() {
            return Err(AppError::validation("installment is already paid"));
        }

        let amount_cents = money::to_cents(amount)?;
        if amount_cents <= 0 {
            return Err(AppError::validation("amount must be greater than zero"));
        }

        let outstanding_cents = self.outstanding_cents()?;
        if amount_cents > outstanding_cents {
            return Err(AppError::validation("amount exceeds outstanding"));
        }

        self.paid_amount = money::from_cents(money::to_cents(self.paid_amount)? + amount_cents);
        if amount_cents == outstanding_cents {
            self.is_paid = true;
        }

        Ok(())
    }
}

/// Installment row ready to be submitted as part of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInstallment {
    pub due_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}
