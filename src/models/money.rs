//! Monetary representation helpers.
//!
//! All monetary amounts in the engine are integer minor currency units
//! (euro cents). Rates, multipliers, and hours are [`Decimal`]; conversion
//! to cents happens at defined rounding points only, so recomputing a
//! payslip from identical inputs always reproduces identical cents.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// A monetary amount in euro cents.
pub type Cents = i64;

/// Converts a decimal euro amount to cents, rounding half away from zero.
///
/// Amounts outside the `i64` cent range saturate; payroll magnitudes never
/// reach it.
///
/// # Example
///
/// ```
/// use colf_engine::models::cents_from_euros;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(cents_from_euros(Decimal::from_str("5640.00").unwrap()), 564_000);
/// assert_eq!(cents_from_euros(Decimal::from_str("0.005").unwrap()), 1);
/// ```
pub fn cents_from_euros(amount: Decimal) -> Cents {
    let rounded = (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Converts a cent amount back to decimal euros for presentation.
///
/// # Example
///
/// ```
/// use colf_engine::models::euros_from_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(euros_from_cents(56_376), Decimal::new(56_376, 2));
/// ```
pub fn euros_from_cents(cents: Cents) -> Decimal {
    Decimal::new(cents, 2)
}
