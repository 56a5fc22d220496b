use std::sync::Arc;

use crate::client::{self, ApiTransport, Method, Session};
use crate::core::Result;
use crate::modules::assessments::models::{Assessment, NewAssessment};

/// Backend access for assessments
#[derive(Clone)]
pub struct AssessmentRepository {
    api: Arc<dyn ApiTransport>,
}

impl AssessmentRepository {
    pub fn new(api: Arc<dyn ApiTransport>) -> Self {
        Self { api }
    }

    pub async fn find_by_id(&self, session: &Session, id: i64) -> Result<Assessment> {
        client::get(self.api.as_ref(), session, &format!("/assessments/{}", id)).await
    }

    /// `None` when the enrollment has not been assessed yet
    pub async fn find_by_enrollment(
        &self,
        session: &Session,
        enrollment_id: i64,
    ) -> Result<Option<Assessment>> {
        client::get(
            self.api.as_ref(),
            session,
            &format!("/enrollments/{}/assessment", enrollment_id),
        )
        .await
    }

    pub async fn create(
        &self,
        session: &Session,
        enrollment_id: i64,
        assessment: &NewAssessment,
    ) -> Result<Assessment> {
        client::send(
            self.api.as_ref(),
            session,
            Method::POST,
            &format!("/enrollments/{}/assessment", enrollment_id),
            assessment,
        )
        .await
    }
}
