//! Cent rounding and percentage helpers shared by every pricing step.

use rust_decimal::{Decimal, RoundingStrategy};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Largest amount a single line, catalog price or package may reach (10^12).
///
/// Lines are capped at construction, so sums and percentages over a quote's
/// lines stay far inside `Decimal` range.
pub const MAX_LINE_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Round to cents, half away from zero (0.005 -> 0.01).
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount * percentage / 100`, unrounded.
pub fn percent_of(amount: Decimal, percentage: Decimal) -> Decimal {
    amount * percentage / HUNDRED
}

/// `lhs * rhs`, or `None` if the product overflows or exceeds `MAX_LINE_AMOUNT`.
pub fn bounded_product(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    lhs.checked_mul(rhs).filter(|p| p.abs() <= MAX_LINE_AMOUNT)
}

/// `lhs + rhs` under the same bound.
pub fn bounded_sum(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    lhs.checked_add(rhs).filter(|s| s.abs() <= MAX_LINE_AMOUNT)
}

/// Multiplier for a percentage uplift: 15 -> 1.15.
pub fn uplift_factor(percentage: Decimal) -> Decimal {
    Decimal::ONE + percentage / HUNDRED
}
