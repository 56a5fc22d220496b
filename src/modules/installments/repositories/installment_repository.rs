use std::sync::Arc;

use crate::client::{self, ApiTransport, Method, Session};
use crate::core::Result;
use crate::modules::installments::models::{Installment, ValidatedPlan};

/// Backend access for installment plans.
///
/// Create and read only; an installment changes afterwards only through
/// payments.
#[derive(Clone)]
pub struct InstallmentRepository {
    api: Arc<dyn ApiTransport>,
}

impl InstallmentRepository {
    pub fn new(api: Arc<dyn ApiTransport>) -> Self {
        Self { api }
    }

    /// Submit a whole plan in one request
    pub async fn create_plan(
        &self,
        session: &Session,
        assessment_id: i64,
        plan: &ValidatedPlan,
    ) -> Result<Vec<Installment>> {
        client::send(
            self.api.as_ref(),
            session,
            Method::POST,
            &format!("/assessments/{}/installments", assessment_id),
            plan,
        )
        .await
    }

    /// Installments of an assessment, ordered by due date
    pub async fn find_by_assessment(
        &self,
        session: &Session,
        assessment_id: i64,
    ) -> Result<Vec<Installment>> {
        let mut installments: Vec<Installment> = client::get(
            self.api.as_ref(),
            session,
            &format!("/assessments/{}/installments", assessment_id),
        )
        .await?;

        installments.sort_by_key(|i| (i.due_date, i.id));
        Ok(installments)
    }
}
