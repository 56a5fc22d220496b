// Fee record for one student enrollment in one term.
//
// net_total = tuition + miscellaneous + other_fees - discounts + sum(adjustments)
// grand_total defaults to net_total unless the backend sends its own value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};
use crate::modules::assessments::services::AssessmentLedger;
use crate::modules::installments::models::Installment;

/// Free-text correction to an assessment; the amount may be negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub description: String,
    pub amount: Decimal,
}

impl Adjustment {
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// The charges entered on the assessment form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub tuition: Decimal,
    pub miscellaneous: Decimal,
    pub other_fees: Decimal,
    pub discounts: Decimal,
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
}

impl FeeBreakdown {
    pub fn new(
        tuition: Decimal,
        miscellaneous: Decimal,
        other_fees: Decimal,
        discounts: Decimal,
    ) -> Self {
        Self {
            tuition,
            miscellaneous,
            other_fees,
            discounts,
            adjustments: Vec::new(),
        }
    }

    pub fn with_adjustment(mut self, description: impl Into<String>, amount: Decimal) -> Self {
        self.adjustments.push(Adjustment::new(description, amount));
        self
    }

    /// Form-level checks that must pass before totals are computed
    pub fn validate(&self) -> Result<()> {
        money::validate_amount("Tuition", self.tuition)?;
        money::validate_amount("Miscellaneous", self.miscellaneous)?;
        money::validate_amount("Other fees", self.other_fees)?;
        money::validate_amount("Discounts", self.discounts)?;

        for (i, adjustment) in self.adjustments.iter().enumerate() {
            if adjustment.description.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "Adjustment {}: description is required",
                    i + 1
                )));
            }

            if money::round_cents(adjustment.amount) != adjustment.amount.normalize() {
                return Err(AppError::validation(format!(
                    "Adjustment {}: amount must have at most 2 decimal places",
                    i + 1
                )));
            }
        }

        Ok(())
    }
}

/// Derived totals of an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentTotals {
    pub net_total: Decimal,
    pub grand_total: Decimal,
}

/// Assessment as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: i64,
    pub enrollment_id: i64,
    pub tuition: Decimal,
    pub miscellaneous: Decimal,
    pub other_fees: Decimal,
    pub discounts: Decimal,
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
    /// Backend override; when absent the net total is used
    #[serde(default)]
    pub grand_total: Option<Decimal>,
    #[serde(default)]
    pub installments: Vec<Installment>,
}

impl Assessment {
    pub fn breakdown(&self) -> FeeBreakdown {
        FeeBreakdown {
            tuition: self.tuition,
            miscellaneous: self.miscellaneous,
            other_fees: self.other_fees,
            discounts: self.discounts,
            adjustments: self.adjustments.clone(),
        }
    }

    pub fn totals(&self) -> AssessmentTotals {
        AssessmentLedger::compute_totals(&self.breakdown(), self.grand_total)
    }

    /// A plan may be created only while no installment exists
    pub fn can_create_plan(&self) -> bool {
        self.installments.is_empty()
    }
}

/// Body of the create-assessment request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAssessment {
    #[serde(flatten)]
    pub breakdown: FeeBreakdown,
    pub net_total: Decimal,
    pub grand_total: Decimal,
}

impl NewAssessment {
    /// Validate the form and attach computed totals
    pub fn from_breakdown(breakdown: FeeBreakdown) -> Result<Self> {
        breakdown.validate()?;
        let totals = AssessmentLedger::compute_totals(&breakdown, None);

        Ok(Self {
            breakdown,
            net_total: totals.net_total,
            grand_total: totals.grand_total,
        })
    }
}
