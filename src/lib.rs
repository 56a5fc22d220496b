//! Registrar Ledger
//!
//! Computational core of a school information system client: assessment fee
//! totals, installment plans, payment recording, grade computation, GWA and
//! the add/drop window, all talking to the REST backend through a typed
//! HTTP client.

pub mod client;
pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::assessments;
pub use modules::enrollments;
pub use modules::grades;
pub use modules::installments;
pub use modules::payments;
