pub mod grade_calculator;
pub mod grade_service;

pub use grade_calculator::GradeCalculator;
pub use grade_service::GradeService;
