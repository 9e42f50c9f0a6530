//! Accrual scale and the final monthly pension for each regulatory base.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{clamp, round_half_up};
use crate::{PensionOption, SchemeConfig};

const HUNDRED: Decimal = dec!(100);
const FLOOR_PERCENTAGE: Decimal = dec!(50);

/// Percentage of the regulatory base earned by `final_months` of contribution.
///
/// Zero below the minimum contribution, then a linear ramp from 50% at the
/// minimum to 100% at `full_accrual_months`, capped at 100%.
///
/// ```
/// use rust_decimal_macros::dec;
/// use pension_core::SchemeConfig;
/// use pension_core::calculations::pension::accrual_percentage;
///
/// let config = SchemeConfig::default();
///
/// assert_eq!(accrual_percentage(179, &config), dec!(0));
/// assert_eq!(accrual_percentage(180, &config), dec!(50));
/// assert_eq!(accrual_percentage(438, &config), dec!(100));
/// ```
pub fn accrual_percentage(
    final_months: i32,
    config: &SchemeConfig,
) -> Decimal {
    let minimum = config.min_contribution_months as i64;
    let months = final_months as i64;
    if months < minimum {
        return Decimal::ZERO;
    }

    let ramp = config.full_accrual_months as i64 - minimum;
    if ramp <= 0 {
        return HUNDRED;
    }
    let earned =
        FLOOR_PERCENTAGE + Decimal::from(months - minimum) * FLOOR_PERCENTAGE / Decimal::from(ramp);
    round_half_up(earned.min(HUNDRED))
}

/// Flat gender-gap supplement for `children`.
pub fn gender_gap_supplement(
    children: u32,
    config: &SchemeConfig,
) -> Decimal {
    round_half_up(Decimal::from(children) * config.child_supplement)
}

/// Coefficients shared by both pension options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionCoefficients {
    /// Percentage in [0, 100].
    pub accrual_percentage: Decimal,
    pub reduction_percentage: Decimal,
    pub delay_bonus: Decimal,
    pub supplement: Decimal,
}

/// Monthly pension for one regulatory base, clamped to the pension range.
///
/// `base × accrual × (1 − reduction) + delay_bonus × base + supplement`,
/// saturating before the clamp so oversized inputs land on the ceiling.
pub fn monthly_pension(
    regulatory_base: Decimal,
    coefficients: &PensionCoefficients,
    config: &SchemeConfig,
) -> Decimal {
    let accrued = regulatory_base.saturating_mul(coefficients.accrual_percentage) / HUNDRED;
    let raw = accrued
        .saturating_mul(Decimal::ONE - coefficients.reduction_percentage)
        .saturating_add(coefficients.delay_bonus.saturating_mul(regulatory_base))
        .saturating_add(coefficients.supplement);
    let rounded = round_half_up(raw);

    let clamped = clamp(rounded, config.min_pension, config.max_pension);
    if clamped != rounded {
        warn!(
            computed = %rounded,
            clamped = %clamped,
            min = %config.min_pension,
            max = %config.max_pension,
            "pension clamped to statutory range"
        );
    }
    clamped
}

/// `B` only when it pays strictly more; ties go to `A`.
pub fn best_option(
    pension_a: Decimal,
    pension_b: Decimal,
) -> PensionOption {
    if pension_b > pension_a {
        PensionOption::B
    } else {
        PensionOption::A
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn coefficients(
        accrual_percentage: Decimal,
        reduction_percentage: Decimal,
        delay_bonus: Decimal,
        supplement: Decimal,
    ) -> PensionCoefficients {
        PensionCoefficients {
            accrual_percentage,
            reduction_percentage,
            delay_bonus,
            supplement,
        }
    }

    // =========================================================================
    // accrual_percentage tests
    // =========================================================================

    #[test]
    fn accrual_is_zero_below_fifteen_years() {
        assert_eq!(accrual_percentage(0, &SchemeConfig::default()), Decimal::ZERO);
        assert_eq!(accrual_percentage(-5, &SchemeConfig::default()), Decimal::ZERO);
    }

    #[test]
    fn accrual_ramps_linearly_between_bounds() {
        // 180 + 129 months is halfway along the 258-month ramp.
        assert_eq!(accrual_percentage(309, &SchemeConfig::default()), dec!(75));
    }

    #[test]
    fn accrual_rounds_to_two_decimals() {
        // 50 + 200 × 50 / 258 = 88.759...
        assert_eq!(accrual_percentage(380, &SchemeConfig::default()), dec!(88.76));
    }

    #[test]
    fn accrual_caps_at_one_hundred() {
        assert_eq!(accrual_percentage(505, &SchemeConfig::default()), dec!(100));
    }

    // =========================================================================
    // gender_gap_supplement tests
    // =========================================================================

    #[test]
    fn supplement_is_flat_per_child() {
        let config = SchemeConfig::default();

        assert_eq!(gender_gap_supplement(0, &config), dec!(0));
        assert_eq!(gender_gap_supplement(2, &config), dec!(66.40));
    }

    // =========================================================================
    // monthly_pension tests
    // =========================================================================

    #[test]
    fn pension_applies_full_accrual() {
        let pension = monthly_pension(
            dec!(1913.67),
            &coefficients(dec!(100), dec!(0), dec!(0), dec!(0)),
            &SchemeConfig::default(),
        );

        assert_eq!(pension, dec!(1913.67));
    }

    #[test]
    fn pension_applies_reduction_after_accrual() {
        let pension = monthly_pension(
            dec!(1913.67),
            &coefficients(dec!(100), dec!(0.21), dec!(0), dec!(0)),
            &SchemeConfig::default(),
        );

        // 1913.67 × 0.79 = 1511.7993
        assert_eq!(pension, dec!(1511.80));
    }

    #[test]
    fn pension_adds_delay_bonus_on_base_not_accrued_amount() {
        let pension = monthly_pension(
            dec!(2000),
            &coefficients(dec!(80), dec!(0), dec!(0.12), dec!(0)),
            &SchemeConfig::default(),
        );

        // 2000 × 0.80 + 0.12 × 2000
        assert_eq!(pension, dec!(1840.00));
    }

    #[test]
    fn pension_adds_supplement_before_clamping() {
        let pension = monthly_pension(
            dec!(2000),
            &coefficients(dec!(100), dec!(0), dec!(0), dec!(66.40)),
            &SchemeConfig::default(),
        );

        assert_eq!(pension, dec!(2066.40));
    }

    #[test]
    fn pension_is_raised_to_minimum() {
        let pension = monthly_pension(
            dec!(800),
            &coefficients(dec!(60), dec!(0.30), dec!(0), dec!(0)),
            &SchemeConfig::default(),
        );

        assert_eq!(pension, dec!(1050.00));
    }

    #[test]
    fn pension_is_capped_at_maximum() {
        let pension = monthly_pension(
            dec!(4500),
            &coefficients(dec!(100), dec!(0), dec!(0.08), dec!(33.20)),
            &SchemeConfig::default(),
        );

        assert_eq!(pension, dec!(3175.00));
    }

    #[test]
    fn pension_saturates_on_oversized_base() {
        let pension = monthly_pension(
            Decimal::MAX,
            &coefficients(dec!(100), dec!(0), dec!(7158276.20), dec!(33.20)),
            &SchemeConfig::default(),
        );

        assert_eq!(pension, dec!(3175.00));
    }

    // =========================================================================
    // best_option tests
    // =========================================================================

    #[test]
    fn best_option_prefers_strictly_higher_b() {
        assert_eq!(best_option(dec!(1783.71), dec!(1913.67)), PensionOption::B);
    }

    #[test]
    fn best_option_defaults_to_a_on_tie() {
        assert_eq!(best_option(dec!(3175), dec!(3175)), PensionOption::A);
    }

    #[test]
    fn best_option_keeps_higher_a() {
        assert_eq!(best_option(dec!(2000), dec!(1999.99)), PensionOption::A);
    }
}
