// Property-based tests for assessment fee totals
//
// Properties tested:
// 1. net_total = tuition + misc + other - discounts, to the centavo
// 2. adjustments are added with their sign
// 3. grand_total equals net_total unless overridden

use proptest::prelude::*;
use registrar_ledger::core::money;
use registrar_ledger::modules::assessments::models::FeeBreakdown;
use registrar_ledger::modules::assessments::services::AssessmentLedger;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn cents(c: i64) -> Decimal {
    money::from_cents(c)
}

#[test]
fn test_typical_assessment_totals() {
    let breakdown = FeeBreakdown::new(dec!(12000), dec!(3000), dec!(1500), dec!(500));
    let totals = AssessmentLedger::compute_totals(&breakdown, None);

    assert_eq!(totals.net_total, dec!(16000));
    assert_eq!(totals.grand_total, dec!(16000));
}

#[test]
fn test_decimal_inputs_do_not_drift() {
    // 0.1 + 0.2 style inputs stay exact
    let breakdown = FeeBreakdown::new(dec!(0.10), dec!(0.20), dec!(0), dec!(0));
    let totals = AssessmentLedger::compute_totals(&breakdown, None);
    assert_eq!(money::to_cents(totals.net_total).unwrap(), 30);
}

proptest! {
    /// Property: net total equals the charge arithmetic to the centavo
    #[test]
    fn prop_net_total_matches_charges(
        tuition in 0i64..5_000_000,
        misc in 0i64..1_000_000,
        other in 0i64..1_000_000,
        discount in 0i64..500_000,
    ) {
        let breakdown = FeeBreakdown::new(cents(tuition), cents(misc), cents(other), cents(discount));
        let totals = AssessmentLedger::compute_totals(&breakdown, None);

        prop_assert_eq!(
            money::to_cents(totals.net_total).unwrap(),
            tuition + misc + other - discount
        );
        prop_assert_eq!(totals.grand_total, totals.net_total);
    }

    /// Property: signed adjustments are summed into the net total
    #[test]
    fn prop_adjustments_are_added(
        tuition in 0i64..5_000_000,
        adjustments in prop::collection::vec(-100_000i64..100_000, 0..6),
    ) {
        let breakdown = adjustments.iter().enumerate().fold(
            FeeBreakdown::new(cents(tuition), Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            |b, (i, a)| b.with_adjustment(format!("Adjustment {}", i + 1), cents(*a)),
        );
        let totals = AssessmentLedger::compute_totals(&breakdown, None);

        prop_assert_eq!(
            money::to_cents(totals.net_total).unwrap(),
            tuition + adjustments.iter().sum::<i64>()
        );
    }

    /// Property: an override replaces only the grand total
    #[test]
    fn prop_override_only_changes_grand_total(
        tuition in 0i64..5_000_000,
        grand in 0i64..5_000_000,
    ) {
        let breakdown = FeeBreakdown::new(cents(tuition), Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
        let totals = AssessmentLedger::compute_totals(&breakdown, Some(cents(grand)));

        prop_assert_eq!(totals.net_total, cents(tuition));
        prop_assert_eq!(totals.grand_total, cents(grand));
    }
}
