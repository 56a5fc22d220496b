pub mod add_drop_window;

pub use add_drop_window::{AddDropWindow, EnrolledSubject, SubjectChange};
