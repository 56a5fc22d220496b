use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Raw component scores, each in `[0, 100]`. A missing score is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeComponents {
    pub quizzes: Option<Decimal>,
    pub projects: Option<Decimal>,
    pub participation: Option<Decimal>,
    pub major_exams: Option<Decimal>,
}

impl GradeComponents {
    pub fn new(
        quizzes: Decimal,
        projects: Decimal,
        participation: Decimal,
        major_exams: Decimal,
    ) -> Self {
        Self {
            quizzes: Some(quizzes),
            projects: Some(projects),
            participation: Some(participation),
            major_exams: Some(major_exams),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.quizzes.is_some()
            && self.projects.is_some()
            && self.participation.is_some()
            && self.major_exams.is_some()
    }

    /// Form-level range check on the scores that are present
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("Quizzes", self.quizzes),
            ("Projects", self.projects),
            ("Participation", self.participation),
            ("Major exams", self.major_exams),
        ];

        for (name, score) in fields {
            if let Some(score) = score {
                if score < Decimal::ZERO || score > Decimal::ONE_HUNDRED {
                    return Err(AppError::validation(format!(
                        "{} score must be between 0 and 100",
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Remarks {
    Passed,
    Failed,
}

impl Remarks {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for Remarks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the weighted grade computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeResult {
    pub final_numeric: Decimal,
    pub grade_point: Decimal,
    pub remarks: Remarks,
}

/// Grade lifecycle: open for editing, then submitted for good
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeStatus {
    #[default]
    Open,
    Submitted,
}

/// A student's grade in one enrolled subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub enrollment_id: i64,
    pub subject_code: String,
    pub units: Decimal,
    #[serde(default)]
    pub quizzes: Option<Decimal>,
    #[serde(default)]
    pub projects: Option<Decimal>,
    #[serde(default)]
    pub participation: Option<Decimal>,
    #[serde(default)]
    pub major_exams: Option<Decimal>,
    #[serde(default)]
    pub final_numeric: Option<Decimal>,
    #[serde(default)]
    pub grade_point: Option<Decimal>,
    #[serde(default)]
    pub remarks: Option<Remarks>,
    #[serde(default)]
    pub status: GradeStatus,
}

impl Grade {
    pub fn components(&self) -> GradeComponents {
        GradeComponents {
            quizzes: self.quizzes,
            projects: self.projects,
            participation: self.participation,
            major_exams: self.major_exams,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.status == GradeStatus::Submitted
    }
}

/// Body of the submit-grade request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeSubmission {
    pub quizzes: Decimal,
    pub projects: Decimal,
    pub participation: Decimal,
    pub major_exams: Decimal,
    pub final_numeric: Decimal,
    pub grade_point: Decimal,
    pub remarks: Remarks,
}
