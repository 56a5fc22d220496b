pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AddDropWindow, EnrolledSubject, SubjectChange};
pub use repositories::EnrollmentRepository;
pub use services::EnrollmentService;
