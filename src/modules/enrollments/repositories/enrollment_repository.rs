use std::sync::Arc;

use crate::client::{self, ApiTransport, Method, Session};
use crate::core::Result;
use crate::modules::enrollments::models::{AddDropWindow, EnrolledSubject, SubjectChange};

/// Backend access for term windows and enrolled subjects
#[derive(Clone)]
pub struct EnrollmentRepository {
    api: Arc<dyn ApiTransport>,
}

impl EnrollmentRepository {
    pub fn new(api: Arc<dyn ApiTransport>) -> Self {
        Self { api }
    }

    pub async fn find_window(&self, session: &Session, term_id: i64) -> Result<AddDropWindow> {
        client::get(
            self.api.as_ref(),
            session,
            &format!("/terms/{}/add-drop-window", term_id),
        )
        .await
    }

    pub async fn add_subject(
        &self,
        session: &Session,
        enrollment_id: i64,
        change: &SubjectChange,
    ) -> Result<EnrolledSubject> {
        client::send(
            self.api.as_ref(),
            session,
            Method::POST,
            &format!("/enrollments/{}/subjects", enrollment_id),
            change,
        )
        .await
    }

    pub async fn drop_subject(
        &self,
        session: &Session,
        enrollment_id: i64,
        subject_id: i64,
    ) -> Result<String> {
        client::delete(
            self.api.as_ref(),
            session,
            &format!("/enrollments/{}/subjects/{}", enrollment_id, subject_id),
        )
        .await
    }
}
