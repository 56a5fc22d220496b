// Business logic layer for installment plans
//
// - Plan creation is a one-time action per assessment
// - Plans are validated completely before the single submission request

use std::sync::Arc;

use tracing::{info, warn};

use crate::client::{ApiTransport, Session};
use crate::core::{AppError, Result};
use crate::modules::assessments::models::Assessment;
use crate::modules::installments::{
    models::{Installment, InstallmentPlanRequest, ValidatedPlan},
    repositories::InstallmentRepository,
    services::InstallmentPlanner,
};

/// Service for installment plan operations
pub struct InstallmentService {
    repository: InstallmentRepository,
}

impl InstallmentService {
    /// Create a new installment service
    pub fn new(api: Arc<dyn ApiTransport>) -> Self {
        Self {
            repository: InstallmentRepository::new(api),
        }
    }

    /// Validate a plan for `assessment` without submitting it
    pub fn preview_plan(
        assessment: &Assessment,
        request: &InstallmentPlanRequest,
    ) -> Result<ValidatedPlan> {
        if !assessment.can_create_plan() {
            return Err(AppError::validation(
                "an installment plan already exists for this assessment",
            ));
        }

        InstallmentPlanner::validate_plan(request, assessment.totals().grand_total)
    }

    /// Create the installment plan of an assessment
    ///
    /// # Business Rules
    /// - Rejected once the assessment has any installment
    /// - Custom plans must sum to the grand total in centavos
    /// - Nothing is sent unless the whole plan is valid
    /// - Once the backend accepts the plan, `assessment.installments` holds
    ///   the created rows, so the same assessment cannot submit again
    pub async fn create_plan(
        &self,
        session: &Session,
        assessment: &mut Assessment,
        request: &InstallmentPlanRequest,
    ) -> Result<Vec<Installment>> {
        let plan = Self::preview_plan(assessment, request).map_err(|e| {
            warn!(
                assessment_id = assessment.id,
                plan_type = ?request.plan_type(),
                error = %e,
                "Installment plan rejected"
            );
            e
        })?;

        info!(
            assessment_id = assessment.id,
            plan_type = ?plan.plan_type,
            installments = plan.installments.len(),
            total = %plan.total(),
            "Submitting installment plan"
        );

        let created = self
            .repository
            .create_plan(session, assessment.id, &plan)
            .await?;

        info!(
            assessment_id = assessment.id,
            installments_created = created.len(),
            "Installment plan created"
        );

        assessment.installments = created.clone();
        Ok(created)
    }

    /// Installments of an assessment, ordered by due date
    pub async fn get_installments(
        &self,
        session: &Session,
        assessment_id: i64,
    ) -> Result<Vec<Installment>> {
        self.repository.find_by_assessment(session, assessment_id).await
    }
}
