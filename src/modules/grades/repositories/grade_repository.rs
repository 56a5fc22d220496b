use std::sync::Arc;

use crate::client::{self, ApiTransport, Method, Session};
use crate::core::Result;
use crate::modules::grades::models::{Grade, GradeSubmission};

/// Backend access for subject grades
#[derive(Clone)]
pub struct GradeRepository {
    api: Arc<dyn ApiTransport>,
}

impl GradeRepository {
    pub fn new(api: Arc<dyn ApiTransport>) -> Self {
        Self { api }
    }

    pub async fn find_by_enrollment(
        &self,
        session: &Session,
        enrollment_id: i64,
    ) -> Result<Vec<Grade>> {
        client::get(
            self.api.as_ref(),
            session,
            &format!("/enrollments/{}/grades", enrollment_id),
        )
        .await
    }

    pub async fn submit(
        &self,
        session: &Session,
        grade_id: i64,
        submission: &GradeSubmission,
    ) -> Result<Grade> {
        client::send(
            self.api.as_ref(),
            session,
            Method::POST,
            &format!("/grades/{}/submit", grade_id),
            submission,
        )
        .await
    }
}
