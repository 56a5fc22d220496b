pub mod assessment_repository;

pub use assessment_repository::AssessmentRepository;
