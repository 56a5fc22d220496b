pub mod installment_service;
pub mod plan_validator;

pub use installment_service::InstallmentService;
pub use plan_validator::InstallmentPlanner;
