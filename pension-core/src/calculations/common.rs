//! Shared arithmetic helpers for the pension pipeline.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pension_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1783.714)), dec!(1783.71));
/// assert_eq!(round_half_up(dec!(1511.795)), dec!(1511.80));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Restricts `value` to `[floor, ceiling]`.
///
/// The floor wins if the bounds are inverted; [`SchemeConfig::validate`]
/// rules that out for pension bounds.
///
/// [`SchemeConfig::validate`]: crate::SchemeConfig::validate
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pension_core::calculations::common::clamp;
///
/// assert_eq!(clamp(dec!(900), dec!(1050), dec!(3175)), dec!(1050));
/// assert_eq!(clamp(dec!(4000), dec!(1050), dec!(3175)), dec!(3175));
/// ```
pub fn clamp(
    value: Decimal,
    floor: Decimal,
    ceiling: Decimal,
) -> Decimal {
    if value < floor {
        floor
    } else if value > ceiling {
        ceiling
    } else {
        value
    }
}
