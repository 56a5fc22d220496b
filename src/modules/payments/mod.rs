pub mod models;
pub mod repositories;
pub mod services;

pub use models::{NewPayment, Payment, PaymentPayload};
pub use repositories::PaymentRepository;
pub use services::PaymentService;
