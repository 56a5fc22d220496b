pub mod assessment;

pub use assessment::{Adjustment, Assessment, AssessmentTotals, FeeBreakdown, NewAssessment};
