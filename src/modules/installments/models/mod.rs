pub mod installment;
pub mod plan;

pub use installment::{Installment, InstallmentStatus, NewInstallment};
pub use plan::{
    InstallmentPlanRequest, PlanRow, PlanType, ValidatedPlan, DEFAULT_INTERVAL_DAYS,
    DEFAULT_PLAN_INSTALLMENTS, FULL_PAYMENT_DESCRIPTION, MAX_INTERVAL_DAYS, MIN_INTERVAL_DAYS,
};
