use std::sync::Arc;

use crate::client::{self, ApiTransport, Method, Session};
use crate::core::Result;
use crate::modules::payments::models::{NewPayment, Payment};

/// Backend access for installment payments
#[derive(Clone)]
pub struct PaymentRepository {
    api: Arc<dyn ApiTransport>,
}

impl PaymentRepository {
    pub fn new(api: Arc<dyn ApiTransport>) -> Self {
        Self { api }
    }

    pub async fn create(
        &self,
        session: &Session,
        installment_id: i64,
        payment: &NewPayment,
    ) -> Result<Payment> {
        client::send(
            self.api.as_ref(),
            session,
            Method::POST,
            &format!("/installments/{}/payments", installment_id),
            payment,
        )
        .await
    }

    /// Payments of an installment, oldest first
    pub async fn find_by_installment(
        &self,
        session: &Session,
        installment_id: i64,
    ) -> Result<Vec<Payment>> {
        let mut payments: Vec<Payment> = client::get(
            self.api.as_ref(),
            session,
            &format!("/installments/{}/payments", installment_id),
        )
        .await?;

        payments.sort_by_key(|p| (p.paid_at, p.id));
        Ok(payments)
    }
}
