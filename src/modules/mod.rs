pub mod assessments;
pub mod enrollments;
pub mod grades;
pub mod installments;
pub mod payments;
