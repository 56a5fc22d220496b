use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Result};

/// Peso amounts carry at most two decimal places (centavos)
pub const CENTS_SCALE: u32 = 2;

/// Rounds an amount to centavos, half away from zero
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENTS_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a decimal amount to integer centavos.
///
/// Amounts are compared for equality only after this conversion, never as
/// decimals with arbitrary scale.
pub fn to_cents(amount: Decimal) -> Result<i64> {
    (round_cents(amount) * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| AppError::validation(format!("Amount {} is out of range", amount)))
}

/// Converts integer centavos back to a two-decimal amount
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, CENTS_SCALE)
}

/// Validates a non-negative charge with centavo precision
pub fn validate_amount(field: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(AppError::validation(format!("{} cannot be negative", field)));
    }

    if amount.normalize().scale() > CENTS_SCALE {
        return Err(AppError::validation(format!(
            "{} must have at most {} decimal places",
            field, CENTS_SCALE
        )));
    }

    Ok(())
}

/// Formats an amount for display, e.g. `₱16,000.00` or `-₱250.50`
pub fn format_php(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}₱{}.{}", sign, grouped, fraction)
}
