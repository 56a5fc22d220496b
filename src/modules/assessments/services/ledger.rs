use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::assessments::models::{Assessment, AssessmentTotals, FeeBreakdown};
use crate::modules::installments::models::{Installment, InstallmentStatus};

/// Pure fee arithmetic for assessments and their installments
pub struct AssessmentLedger;

/// Paid and outstanding position of one assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub assessment_id: i64,
    pub totals: AssessmentTotals,
    pub installment_count: usize,
    pub total_paid: Decimal,
    pub total_outstanding: Decimal,
    /// Earliest unsettled installment
    pub next_due: Option<Installment>,
    pub overdue: Vec<Installment>,
    pub fully_paid: bool,
}

impl AssessmentLedger {
    /// `net_total = tuition + miscellaneous + other_fees - discounts + sum(adjustments)`
    ///
    /// `grand_total` is `net_total` unless an override is given. Inputs are
    /// expected to have passed [`FeeBreakdown::validate`].
    pub fn compute_totals(
        breakdown: &FeeBreakdown,
        grand_total_override: Option<Decimal>,
    ) -> AssessmentTotals {
        let adjustments: Decimal = breakdown.adjustments.iter().map(|a| a.amount).sum();

        let net_total = breakdown.tuition + breakdown.miscellaneous + breakdown.other_fees
            - breakdown.discounts
            + adjustments;

        AssessmentTotals {
            net_total,
            grand_total: grand_total_override.unwrap_or(net_total),
        }
    }

    /// Summarize payments against `assessment` as of `today`
    pub fn summarize(assessment: &Assessment, today: NaiveDate) -> LedgerSummary {
        let mut installments = assessment.installments.clone();
        installments.sort_by_key(|i| (i.due_date, i.id));

        let total_paid: Decimal = installments.iter().map(|i| i.paid_amount).sum();
        let total_outstanding: Decimal = installments
            .iter()
            .filter(|i| !i.is_settled())
            .map(Installment::outstanding)
            .sum();

        let next_due = installments.iter().find(|i| !i.is_settled()).cloned();
        let overdue: Vec<Installment> = installments
            .iter()
            .filter(|i| i.is_overdue(today))
            .cloned()
            .collect();

        let fully_paid = !installments.is_empty()
            && installments
                .iter()
                .all(|i| i.status() == InstallmentStatus::Paid);

        LedgerSummary {
            assessment_id: assessment.id,
            totals: assessment.totals(),
            installment_count: installments.len(),
            total_paid,
            total_outstanding,
            next_due,
            overdue,
            fully_paid,
        }
    }
}
