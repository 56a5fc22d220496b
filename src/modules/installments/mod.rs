pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Installment, InstallmentPlanRequest, InstallmentStatus, PlanRow, PlanType};
pub use repositories::InstallmentRepository;
pub use services::{InstallmentPlanner, InstallmentService};
