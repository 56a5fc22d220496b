use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::client::{ApiTransport, Session};
use crate::core::Result;
use crate::modules::enrollments::{
    models::{AddDropWindow, EnrolledSubject, SubjectChange},
    repositories::EnrollmentRepository,
};

/// Subject add/drop, gated by the term's add/drop window
pub struct EnrollmentService {
    repository: EnrollmentRepository,
}

impl EnrollmentService {
    pub fn new(api: Arc<dyn ApiTransport>) -> Self {
        Self {
            repository: EnrollmentRepository::new(api),
        }
    }

    pub async fn get_window(&self, session: &Session, term_id: i64) -> Result<AddDropWindow> {
        let window = self.repository.find_window(session, term_id).await?;
        window.validate()?;
        Ok(window)
    }

    /// Add a subject; rejected locally outside the window
    pub async fn add_subject(
        &self,
        session: &Session,
        window: &AddDropWindow,
        enrollment_id: i64,
        subject_id: i64,
        today: NaiveDate,
    ) -> Result<EnrolledSubject> {
        if let Err(e) = window.ensure_open(today) {
            warn!(enrollment_id, subject_id, %today, "Subject add outside add/drop window");
            return Err(e);
        }

        info!(enrollment_id, subject_id, "Adding subject");
        self.repository
            .add_subject(session, enrollment_id, &SubjectChange { subject_id })
            .await
    }

    /// Drop a subject; rejected locally outside the window
    pub async fn drop_subject(
        &self,
        session: &Session,
        window: &AddDropWindow,
        enrollment_id: i64,
        subject_id: i64,
        today: NaiveDate,
    ) -> Result<String> {
        if let Err(e) = window.ensure_open(today) {
            warn!(enrollment_id, subject_id, %today, "Subject drop outside add/drop window");
            return Err(e);
        }

        info!(enrollment_id, subject_id, "Dropping subject");
        self.repository
            .drop_subject(session, enrollment_id, subject_id)
            .await
    }
}
