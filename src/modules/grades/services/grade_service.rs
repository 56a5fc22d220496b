use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::client::{ApiTransport, Session};
use crate::core::{AppError, Result};
use crate::modules::grades::{
    models::{Grade, GradeSubmission},
    repositories::GradeRepository,
    services::GradeCalculator,
};

/// Service for grade submission and GWA
pub struct GradeService {
    repository: GradeRepository,
}

impl GradeService {
    pub fn new(api: Arc<dyn ApiTransport>) -> Self {
        Self {
            repository: GradeRepository::new(api),
        }
    }

    pub async fn get_grades(&self, session: &Session, enrollment_id: i64) -> Result<Vec<Grade>> {
        self.repository.find_by_enrollment(session, enrollment_id).await
    }

    /// Build the submission body for an open grade
    pub fn prepare_submission(grade: &Grade) -> Result<GradeSubmission> {
        if grade.is_submitted() {
            return Err(AppError::validation("grade has already been submitted"));
        }

        let components = grade.components();
        components.validate()?;

        let (Some(quizzes), Some(projects), Some(participation), Some(major_exams)) = (
            components.quizzes,
            components.projects,
            components.participation,
            components.major_exams,
        ) else {
            return Err(AppError::validation(
                "all grade components are required before submission",
            ));
        };

        let final_numeric =
            GradeCalculator::final_numeric(quizzes, projects, participation, major_exams);

        Ok(GradeSubmission {
            quizzes,
            projects,
            participation,
            major_exams,
            final_numeric,
            grade_point: GradeCalculator::grade_point_for(final_numeric),
            remarks: GradeCalculator::remarks_for(final_numeric),
        })
    }

    /// Submit an open grade. Submission is one-way.
    pub async fn submit_grade(&self, session: &Session, grade: &Grade) -> Result<Grade> {
        let submission = Self::prepare_submission(grade).map_err(|e| {
            warn!(grade_id = grade.id, error = %e, "Grade submission rejected");
            e
        })?;

        info!(
            grade_id = grade.id,
            subject_code = grade.subject_code.as_str(),
            final_numeric = %submission.final_numeric,
            grade_point = %submission.grade_point,
            remarks = %submission.remarks,
            "Submitting grade"
        );

        self.repository.submit(session, grade.id, &submission).await
    }

    /// GWA over the submitted grades of an enrollment
    pub async fn gwa_for_enrollment(
        &self,
        session: &Session,
        enrollment_id: i64,
    ) -> Result<Option<Decimal>> {
        let grades = self.get_grades(session, enrollment_id).await?;
        Ok(GradeCalculator::compute_gwa(&grades))
    }
}
