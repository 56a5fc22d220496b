use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::client::{ApiTransport, Session};
use crate::core::Result;
use crate::modules::assessments::{
    models::{Assessment, FeeBreakdown, NewAssessment},
    repositories::AssessmentRepository,
    services::{AssessmentLedger, LedgerSummary},
};

/// Service for assessment business logic
pub struct AssessmentService {
    repository: AssessmentRepository,
}

impl AssessmentService {
    pub fn new(api: Arc<dyn ApiTransport>) -> Self {
        Self {
            repository: AssessmentRepository::new(api),
        }
    }

    /// Create the assessment of an enrollment.
    ///
    /// The form is validated and totals computed before the request is sent.
    /// One assessment per enrollment is enforced by the backend.
    pub async fn create_assessment(
        &self,
        session: &Session,
        enrollment_id: i64,
        breakdown: FeeBreakdown,
    ) -> Result<Assessment> {
        let new_assessment = NewAssessment::from_breakdown(breakdown).map_err(|e| {
            warn!(enrollment_id, error = %e, "Assessment form rejected");
            e
        })?;

        info!(
            enrollment_id,
            net_total = %new_assessment.net_total,
            "Creating assessment"
        );

        self.repository
            .create(session, enrollment_id, &new_assessment)
            .await
    }

    pub async fn get_assessment(&self, session: &Session, id: i64) -> Result<Assessment> {
        self.repository.find_by_id(session, id).await
    }

    pub async fn get_for_enrollment(
        &self,
        session: &Session,
        enrollment_id: i64,
    ) -> Result<Option<Assessment>> {
        self.repository.find_by_enrollment(session, enrollment_id).await
    }

    /// Fetch an assessment and summarize its payment position
    pub async fn ledger_summary(
        &self,
        session: &Session,
        id: i64,
        today: NaiveDate,
    ) -> Result<LedgerSummary> {
        let assessment = self.repository.find_by_id(session, id).await?;
        Ok(AssessmentLedger::summarize(&assessment, today))
    }
}
