pub mod assessment_service;
pub mod ledger;

pub use assessment_service::AssessmentService;
pub use ledger::{AssessmentLedger, LedgerSummary};
