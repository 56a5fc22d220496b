// Property-based tests for payment validation against an installment
//
// - zero and negative amounts are rejected
// - amounts above outstanding are rejected
// - any amount in (0, outstanding] is accepted and applied exactly

use proptest::prelude::*;
use registrar_ledger::core::{money, timezone, AppError};
use registrar_ledger::modules::installments::models::InstallmentStatus;
use registrar_ledger::modules::payments::models::PaymentPayload;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[path = "../helpers/test_data.rs"]
mod test_data;

use test_data::sample_installment;

fn manila() -> chrono::FixedOffset {
    timezone::local_offset(8).unwrap()
}

#[test]
fn test_zero_amount_rejected() {
    let inst = sample_installment(1, dec!(3200), Decimal::ZERO);
    let err = PaymentPayload::new(Decimal::ZERO, "2025-07-01T09:00", "OR-1")
        .validate(&inst, manila())
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_exact_outstanding_accepted() {
    let mut inst = sample_installment(1, dec!(3200), dec!(1200));
    let payment = PaymentPayload::new(dec!(2000), "2025-07-01T09:00", "OR-1")
        .validate(&inst, manila())
        .unwrap();

    inst.apply_payment(payment.amount).unwrap();
    assert_eq!(inst.status(), InstallmentStatus::Paid);
    assert!(inst.is_paid);
}

#[test]
fn test_paid_installment_rejects_payments() {
    let inst = sample_installment(1, dec!(3200), dec!(3200));
    let err = PaymentPayload::new(dec!(1), "2025-07-01T09:00", "OR-1")
        .validate(&inst, manila())
        .unwrap_err();
    assert_eq!(err.user_message(), "installment is already paid");
}

proptest! {
    /// Property: anything above outstanding is rejected with the same message
    #[test]
    fn prop_rejects_above_outstanding(
        outstanding in 1i64..10_000_000,
        paid_cents in 0i64..10_000_000,
        excess in 1i64..1_000_000,
    ) {
        let amount_cents = paid_cents + outstanding;
        let inst = sample_installment(1, money::from_cents(amount_cents), money::from_cents(paid_cents));

        let err = PaymentPayload::new(money::from_cents(outstanding + excess), "2025-07-01", "OR-1")
            .validate(&inst, manila())
            .unwrap_err();
        prop_assert!(matches!(err, AppError::Validation(ref m) if m == "amount exceeds outstanding"));
    }

    /// Property: any amount up to outstanding is accepted and reduces it exactly
    #[test]
    fn prop_accepts_up_to_outstanding(
        amount_cents in 2i64..10_000_000,
        pay_ratio in 1u32..=100,
    ) {
        let mut inst = sample_installment(1, money::from_cents(amount_cents), Decimal::ZERO);
        let pay_cents = (amount_cents * i64::from(pay_ratio) / 100).max(1);

        let payment = PaymentPayload::new(money::from_cents(pay_cents), "2025-07-01", "OR-1")
            .validate(&inst, manila())
            .unwrap();
        inst.apply_payment(payment.amount).unwrap();

        prop_assert_eq!(inst.outstanding_cents().unwrap(), amount_cents - pay_cents);
        prop_assert_eq!(inst.is_paid, pay_cents == amount_cents);
    }

    /// Property: non-positive amounts never pass
    #[test]
    fn prop_rejects_non_positive(amount_cents in -1_000_000i64..=0) {
        let inst = sample_installment(1, dec!(3200), Decimal::ZERO);
        let result = PaymentPayload::new(money::from_cents(amount_cents), "2025-07-01", "OR-1")
            .validate(&inst, manila());
        prop_assert!(result.is_err());
    }
}
