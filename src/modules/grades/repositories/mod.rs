pub mod grade_repository;

pub use grade_repository::GradeRepository;
