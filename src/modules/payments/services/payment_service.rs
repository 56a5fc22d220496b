use std::sync::Arc;

use chrono::FixedOffset;
use tracing::{info, warn};

use crate::client::{ApiTransport, Session};
use crate::core::Result;
use crate::modules::installments::models::Installment;
use crate::modules::payments::{
    models::{NewPayment, Payment, PaymentPayload},
    repositories::PaymentRepository,
};

/// Payment service for business logic
///
/// Validates payments locally, submits them in one request and keeps the
/// caller's installment in step with what the backend accepted.
pub struct PaymentService {
    repository: PaymentRepository,
    offset: FixedOffset,
}

impl PaymentService {
    /// Create a new PaymentService
    ///
    /// # Arguments
    /// * `api` - Backend transport
    /// * `offset` - Offset used to read form timestamps without one
    pub fn new(api: Arc<dyn ApiTransport>, offset: FixedOffset) -> Self {
        Self {
            repository: PaymentRepository::new(api),
            offset,
        }
    }

    /// Validate a payment without submitting it
    pub fn validate_payment(
        &self,
        installment: &Installment,
        payload: &PaymentPayload,
    ) -> Result<NewPayment> {
        payload.validate(installment, self.offset)
    }

    /// Record a payment against `installment`
    ///
    /// # Business Rules
    /// - `0 < amount <= outstanding`
    /// - Timestamp and receipt number are required
    /// - On success `paid_amount` grows by `amount`; the installment is paid
    ///   once nothing is outstanding
    ///
    /// # Errors
    /// * `Validation` - Payload rejected locally, nothing was sent
    /// * `Remote` / `Network` - The backend refused or could not be reached;
    ///   `installment` is left unchanged
    pub async fn record_payment(
        &self,
        session: &Session,
        installment: &mut Installment,
        payload: &PaymentPayload,
    ) -> Result<Payment> {
        let new_payment = self.validate_payment(installment, payload).map_err(|e| {
            warn!(
                installment_id = installment.id,
                error = %e,
                "Payment rejected"
            );
            e
        })?;

        info!(
            installment_id = installment.id,
            amount = %new_payment.amount,
            receipt_number = new_payment.receipt_number.as_str(),
            "Recording payment"
        );

        let payment = self
            .repository
            .create(session, installment.id, &new_payment)
            .await?;

        installment.apply_payment(new_payment.amount)?;

        info!(
            installment_id = installment.id,
            payment_id = payment.id,
            outstanding = %installment.outstanding(),
            status = %installment.status(),
            "Payment recorded"
        );

        Ok(payment)
    }

    pub async fn get_payments(
        &self,
        session: &Session,
        installment_id: i64,
    ) -> Result<Vec<Payment>> {
        self.repository
            .find_by_installment(session, installment_id)
            .await
    }
}
