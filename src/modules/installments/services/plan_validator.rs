use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::{money, AppError, Result};
use crate::modules::installments::models::{
    InstallmentPlanRequest, NewInstallment, PlanRow, PlanType, ValidatedPlan,
    DEFAULT_INTERVAL_DAYS, DEFAULT_PLAN_INSTALLMENTS, FULL_PAYMENT_DESCRIPTION,
    MAX_INTERVAL_DAYS, MIN_INTERVAL_DAYS,
};

/// Builds and validates installment plans against an assessment total.
///
/// All arithmetic happens in integer centavos. A plan is either valid as a
/// whole or rejected; no partial plan is ever returned.
pub struct InstallmentPlanner;

impl InstallmentPlanner {
    /// Validate a plan request against `total_amount`
    ///
    /// # Arguments
    /// * `request` - Plan parameters (full / default / custom)
    /// * `total_amount` - The assessment's grand total
    ///
    /// # Returns
    /// The installment rows ready for submission
    pub fn validate_plan(
        request: &InstallmentPlanRequest,
        total_amount: Decimal,
    ) -> Result<ValidatedPlan> {
        let total_cents = money::to_cents(total_amount)?;
        if total_cents <= 0 {
            return Err(AppError::validation("assessment total must be positive"));
        }

        let installments = match request {
            InstallmentPlanRequest::Full {
                due_date,
                description,
            } => Self::full_plan(*due_date, description.as_deref(), total_cents)?,
            InstallmentPlanRequest::Default {
                start_date,
                interval_days,
            } => Self::default_plan(*start_date, *interval_days, total_cents)?,
            InstallmentPlanRequest::Custom { rows } => Self::custom_plan(rows, total_cents)?,
        };

        debug!(
            plan_type = ?request.plan_type(),
            installments = installments.len(),
            total = %total_amount,
            "Installment plan validated"
        );

        Ok(ValidatedPlan {
            plan_type: request.plan_type(),
            installments,
        })
    }

    fn full_plan(
        due_date: Option<NaiveDate>,
        description: Option<&str>,
        total_cents: i64,
    ) -> Result<Vec<NewInstallment>> {
        let due_date = due_date.ok_or_else(|| AppError::validation("due date is required"))?;

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(FULL_PAYMENT_DESCRIPTION);

        Ok(vec![NewInstallment {
            due_date,
            description: description.to_string(),
            amount: money::from_cents(total_cents),
        }])
    }

    fn default_plan(
        start_date: Option<NaiveDate>,
        interval_days: Option<u32>,
        total_cents: i64,
    ) -> Result<Vec<NewInstallment>> {
        let start_date =
            start_date.ok_or_else(|| AppError::validation("start date is required"))?;

        let interval = interval_days.unwrap_or(DEFAULT_INTERVAL_DAYS);
        if !(MIN_INTERVAL_DAYS..=MAX_INTERVAL_DAYS).contains(&interval) {
            return Err(AppError::validation(format!(
                "interval must be between {} and {} days",
                MIN_INTERVAL_DAYS, MAX_INTERVAL_DAYS
            )));
        }

        let count = DEFAULT_PLAN_INSTALLMENTS;
        let amounts = Self::split_cents(total_cents, count as usize)?;

        amounts
            .into_iter()
            .enumerate()
            .map(|(k, cents)| {
                let offset = Days::new(u64::from(interval) * k as u64);
                let due_date = start_date
                    .checked_add_days(offset)
                    .ok_or_else(|| AppError::validation("Failed to calculate due date"))?;

                Ok(NewInstallment {
                    due_date,
                    description: format!("Installment {} of {}", k + 1, count),
                    amount: money::from_cents(cents),
                })
            })
            .collect()
    }

    fn custom_plan(rows: &[PlanRow], total_cents: i64) -> Result<Vec<NewInstallment>> {
        if rows.is_empty() {
            return Err(AppError::validation("at least one installment is required"));
        }

        let mut installments = Vec::with_capacity(rows.len());
        let mut sum_cents: i64 = 0;

        for (i, row) in rows.iter().enumerate() {
            let number = i + 1;

            let due_date = row
                .due_date
                .ok_or_else(|| AppError::validation(format!("row {}: due date is required", number)))?;

            let description = row.description.trim();
            if description.is_empty() {
                return Err(AppError::validation(format!(
                    "row {}: description is required",
                    number
                )));
            }

            if row.amount <= Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "row {}: amount must be positive",
                    number
                )));
            }
            money::validate_amount(&format!("row {}: amount", number), row.amount)?;
            let cents = money::to_cents(row.amount)?;

            sum_cents = match sum_cents.checked_add(cents) {
                Some(sum) => sum,
                None => {
                    warn!(
                        "Installment amount mismatch: rows overflow the centavo range vs total {} cents",
                        total_cents
                    );
                    return Err(AppError::validation("amount mismatch"));
                }
            };

            installments.push(NewInstallment {
                due_date,
                description: description.to_string(),
                amount: money::from_cents(cents),
            });
        }

        if sum_cents != total_cents {
            warn!(
                "Installment amount mismatch: rows sum to {} cents vs total {} cents",
                sum_cents, total_cents
            );
            return Err(AppError::validation("amount mismatch"));
        }

        Ok(installments)
    }

    /// Split `total_cents` into `count` equal parts; the last absorbs the remainder
    pub fn split_cents(total_cents: i64, count: usize) -> Result<Vec<i64>> {
        if count == 0 {
            return Err(AppError::validation("Installment count cannot be zero"));
        }

        let base = total_cents / count as i64;
        if base <= 0 {
            return Err(AppError::validation(format!(
                "total is too small to split into {} installments",
                count
            )));
        }

        let mut amounts = vec![base; count];
        amounts[count - 1] = total_cents - base * (count as i64 - 1);

        Ok(amounts)
    }
}
