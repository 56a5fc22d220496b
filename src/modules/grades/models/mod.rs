pub mod grade;

pub use grade::{Grade, GradeComponents, GradeResult, GradeStatus, GradeSubmission, Remarks};
