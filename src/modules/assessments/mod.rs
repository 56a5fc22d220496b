pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Adjustment, Assessment, AssessmentTotals, FeeBreakdown};
pub use repositories::AssessmentRepository;
pub use services::{AssessmentLedger, AssessmentService, LedgerSummary};
