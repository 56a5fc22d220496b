use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::NewInstallment;

/// Installments produced by the default plan
pub const DEFAULT_PLAN_INSTALLMENTS: u32 = 5;

/// Days between default-plan due dates when none is given
pub const DEFAULT_INTERVAL_DAYS: u32 = 30;

pub const MIN_INTERVAL_DAYS: u32 = 1;
pub const MAX_INTERVAL_DAYS: u32 = 365;

/// Description of a single full-payment installment when none is given
pub const FULL_PAYMENT_DESCRIPTION: &str = "Full payment";

/// How a plan was built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Full,
    Default,
    Custom,
}

/// One row of a custom plan as entered in the form
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRow {
    pub due_date: Option<NaiveDate>,
    pub description: String,
    pub amount: Decimal,
}

impl PlanRow {
    pub fn new(due_date: NaiveDate, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            due_date: Some(due_date),
            description: description.into(),
            amount,
        }
    }
}

/// Plan parameters as collected from the plan dialog
#[derive(Debug, Clone, PartialEq)]
pub enum InstallmentPlanRequest {
    /// One installment for the whole total
    Full {
        due_date: Option<NaiveDate>,
        description: Option<String>,
    },
    /// Five equal installments spaced `interval_days` apart
    Default {
        start_date: Option<NaiveDate>,
        interval_days: Option<u32>,
    },
    /// Caller-supplied rows that must add up to the total
    Custom { rows: Vec<PlanRow> },
}

impl InstallmentPlanRequest {
    pub fn plan_type(&self) -> PlanType {
        match self {
            Self::Full { .. } => PlanType::Full,
            Self::Default { .. } => PlanType::Default,
            Self::Custom { .. } => PlanType::Custom,
        }
    }
}

/// A fully validated plan; this is the submission body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedPlan {
    pub plan_type: PlanType,
    pub installments: Vec<NewInstallment>,
}

impl ValidatedPlan {
    pub fn total(&self) -> Decimal {
        self.installments.iter().map(|i| i.amount).sum()
    }
}
