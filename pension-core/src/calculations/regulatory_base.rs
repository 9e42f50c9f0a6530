//! Regulatory bases over the two contribution windows.
//!
//! | Option | Window | Discarded | Divisor |
//! |--------|--------|-----------|---------|
//! | A      | most recent 25 years | none | 350 (25 × 14 payments) |
//! | B      | most recent 29 years | 2 lowest monthly bases | 352.33 |
//!
//! Each kept year contributes `monthly_base × 12` to the sum. Histories
//! shorter than the window follow [`WindowShortfall`]:
//!
//! - `ExcludeMissing`: only available years enter the sum, and the divisor
//!   is scaled by `available / window`, so the base stays an average of
//!   the years actually worked.
//! - `ZeroFill`: missing years count as zero; the divisor is unchanged.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pension_core::ContributionBase;
//! use pension_core::SchemeConfig;
//! use pension_core::calculations::regulatory_base::regulatory_bases;
//!
//! let history: Vec<ContributionBase> = (0..30)
//!     .map(|i| ContributionBase { year: 2024 - i, monthly_base: dec!(2081) })
//!     .collect();
//!
//! let bases = regulatory_bases(&history, &SchemeConfig::default());
//!
//! assert_eq!(bases.base_a, dec!(1783.71));
//! assert_eq!(bases.base_b, dec!(1913.67));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::common::round_half_up;
use crate::{ContributionBase, SchemeConfig, WindowShortfall};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Both regulatory bases, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatoryBases {
    pub base_a: Decimal,
    pub base_b: Decimal,
}

/// Computes both regulatory bases from a newest-first history.
pub fn regulatory_bases(
    history: &[ContributionBase],
    config: &SchemeConfig,
) -> RegulatoryBases {
    let bases = RegulatoryBases {
        base_a: regulatory_base_a(history, config),
        base_b: regulatory_base_b(history, config),
    };
    debug!(
        base_a = %bases.base_a,
        base_b = %bases.base_b,
        years_available = history.len(),
        "computed regulatory bases"
    );
    bases
}

/// Option A: the most recent `window_a_years` years over `divisor_a`.
pub fn regulatory_base_a(
    history: &[ContributionBase],
    config: &SchemeConfig,
) -> Decimal {
    let window = config.window_a_years;
    let values = window_values(history, window);
    let sum = annual_sum(&values);

    match config.window_shortfall {
        WindowShortfall::ZeroFill => average(sum, config.divisor_a),
        WindowShortfall::ExcludeMissing => {
            scaled_average(sum, config.divisor_a, window, values.len())
        }
    }
}

/// Option B: the most recent `window_b_years` years, minus the
/// `window_b_discarded` lowest, over `divisor_b`.
pub fn regulatory_base_b(
    history: &[ContributionBase],
    config: &SchemeConfig,
) -> Decimal {
    let window = config.window_b_years;
    let mut values = window_values(history, window);

    if config.window_shortfall == WindowShortfall::ZeroFill {
        values.resize(window, Decimal::ZERO);
    }
    values.sort_unstable();

    let discard = config.window_b_discarded.min(values.len());
    let kept = &values[discard..];
    let sum = annual_sum(kept);

    match config.window_shortfall {
        WindowShortfall::ZeroFill => average(sum, config.divisor_b),
        WindowShortfall::ExcludeMissing => {
            scaled_average(sum, config.divisor_b, config.window_b_kept(), kept.len())
        }
    }
}

/// Monthly bases of the first `window` entries, negatives floored at zero.
fn window_values(
    history: &[ContributionBase],
    window: usize,
) -> Vec<Decimal> {
    if history.len() < window {
        warn!(
            available = history.len(),
            window,
            "contribution history shorter than regulatory window"
        );
    }
    history
        .iter()
        .take(window)
        .map(|entry| entry.monthly_base.max(Decimal::ZERO))
        .collect()
}

/// Saturates at [`Decimal::MAX`].
fn annual_sum(values: &[Decimal]) -> Decimal {
    values.iter().fold(Decimal::ZERO, |sum, value| {
        sum.saturating_add(value.saturating_mul(MONTHS_PER_YEAR))
    })
}

/// `sum / divisor`, saturating when a small divisor would overflow.
fn average(
    sum: Decimal,
    divisor: Decimal,
) -> Decimal {
    round_half_up(sum.checked_div(divisor).unwrap_or(Decimal::MAX))
}

/// `sum / divisor`, with the divisor scaled by `present / expected`.
fn scaled_average(
    sum: Decimal,
    divisor: Decimal,
    expected: usize,
    present: usize,
) -> Decimal {
    if present == 0 {
        return Decimal::ZERO;
    }
    average(
        sum.saturating_mul(Decimal::from(expected)),
        divisor.saturating_mul(Decimal::from(present)),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn flat_history(
        years: usize,
        monthly_base: Decimal,
    ) -> Vec<ContributionBase> {
        (0..years)
            .map(|i| ContributionBase {
                year: 2024 - i as i32,
                monthly_base,
            })
            .collect()
    }

    fn zero_fill() -> SchemeConfig {
        SchemeConfig {
            window_shortfall: WindowShortfall::ZeroFill,
            ..SchemeConfig::default()
        }
    }

    // =========================================================================
    // Base A
    // =========================================================================

    #[test]
    fn base_a_averages_most_recent_25_years() {
        let base = regulatory_base_a(&flat_history(30, dec!(2081)), &SchemeConfig::default());

        // 25 × 2081 × 12 / 350 = 1783.714...
        assert_eq!(base, dec!(1783.71));
    }

    #[test]
    fn base_a_ignores_years_beyond_window() {
        let mut history = flat_history(25, dec!(2000));
        history.push(ContributionBase {
            year: 1999,
            monthly_base: dec!(50000),
        });

        let base = regulatory_base_a(&history, &SchemeConfig::default());

        assert_eq!(base, dec!(1714.29));
    }

    #[test]
    fn base_a_excluding_missing_years_keeps_the_average() {
        let base = regulatory_base_a(&flat_history(10, dec!(2000)), &SchemeConfig::default());

        // 240000 × 25 / (350 × 10)
        assert_eq!(base, dec!(1714.29));
    }

    #[test]
    fn base_a_zero_fill_dilutes_short_history() {
        let base = regulatory_base_a(&flat_history(10, dec!(2000)), &zero_fill());

        // 240000 / 350
        assert_eq!(base, dec!(685.71));
    }

    #[test]
    fn base_a_is_zero_for_empty_history() {
        assert_eq!(regulatory_base_a(&[], &SchemeConfig::default()), Decimal::ZERO);
        assert_eq!(regulatory_base_a(&[], &zero_fill()), Decimal::ZERO);
    }

    #[test]
    fn base_a_floors_negative_bases_at_zero() {
        let mut history = flat_history(24, dec!(2000));
        history.insert(
            0,
            ContributionBase {
                year: 2025,
                monthly_base: dec!(-500),
            },
        );

        let base = regulatory_base_a(&history, &SchemeConfig::default());

        // 24 × 2000 × 12 / 350
        assert_eq!(base, dec!(1645.71));
    }

    // =========================================================================
    // Base B
    // =========================================================================

    #[test]
    fn base_b_uses_27_best_of_29_years() {
        let base = regulatory_base_b(&flat_history(30, dec!(2081)), &SchemeConfig::default());

        // 27 × 2081 × 12 / 352.33 = 1913.67...
        assert_eq!(base, dec!(1913.67));
    }

    #[test]
    fn base_b_discards_lowest_values_not_oldest_years() {
        let mut history = flat_history(29, dec!(2000));
        history[3].monthly_base = dec!(100);
        history[10].monthly_base = dec!(200);

        let base = regulatory_base_b(&history, &SchemeConfig::default());

        let flat = regulatory_base_b(&flat_history(29, dec!(2000)), &SchemeConfig::default());
        assert_eq!(base, flat);
        assert_eq!(base, dec!(1839.18));
    }

    #[test]
    fn base_b_only_considers_first_29_entries() {
        let mut history = flat_history(29, dec!(2000));
        // Year 30 is the lowest overall but is outside the window.
        history.push(ContributionBase {
            year: 1995,
            monthly_base: dec!(10),
        });
        history[0].monthly_base = dec!(500);
        history[1].monthly_base = dec!(600);

        let base = regulatory_base_b(&history, &SchemeConfig::default());

        assert_eq!(base, dec!(1839.18));
    }

    #[test]
    fn base_b_excluding_missing_years_scales_divisor() {
        let base = regulatory_base_b(&flat_history(10, dec!(2000)), &SchemeConfig::default());

        // 8 kept: 192000 × 27 / (352.33 × 8)
        assert_eq!(base, dec!(1839.18));
    }

    #[test]
    fn base_b_zero_fill_discards_padding_first() {
        let base = regulatory_base_b(&flat_history(10, dec!(2000)), &zero_fill());

        // All 10 real years survive; 240000 / 352.33
        assert_eq!(base, dec!(681.18));
    }

    #[test]
    fn base_b_is_zero_when_nothing_survives_discard() {
        let base = regulatory_base_b(&flat_history(2, dec!(2000)), &SchemeConfig::default());

        assert_eq!(base, Decimal::ZERO);
    }

    #[test]
    fn extreme_bases_saturate_instead_of_overflowing() {
        let config = SchemeConfig::default();
        let history = flat_history(30, Decimal::MAX);

        let bases = regulatory_bases(&history, &config);

        assert!(bases.base_a > dec!(1_000_000_000_000));
        assert!(bases.base_b > dec!(1_000_000_000_000));
        assert!(regulatory_base_a(&history, &zero_fill()) > dec!(1_000_000_000_000));
    }

    #[test]
    fn regulatory_bases_computes_both_options() {
        let bases = regulatory_bases(&flat_history(30, dec!(2081)), &SchemeConfig::default());

        assert_eq!(
            bases,
            RegulatoryBases {
                base_a: dec!(1783.71),
                base_b: dec!(1913.67),
            }
        );
    }
}
