pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Grade, GradeComponents, GradeResult, GradeStatus, Remarks};
pub use repositories::GradeRepository;
pub use services::{GradeCalculator, GradeService};
