//! Statutory constants of the dual-calculation scheme.
//!
//! Every rate, threshold and divisor the engine uses lives in
//! [`SchemeConfig`]. [`SchemeConfig::default`] carries the projected values;
//! a TOML file can override any subset of fields (see `pension-data`).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AgeSpan;

/// Errors raised by [`SchemeConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemeConfigError {
    /// A reduction or bonus coefficient must lie in [0, 1].
    #[error("{field} must be between 0 and 1, got {value}")]
    InvalidCoefficient { field: &'static str, value: Decimal },

    /// A regulatory-base divisor must be positive.
    #[error("{field} must be positive, got {value}")]
    InvalidDivisor { field: &'static str, value: Decimal },

    /// The 29-year window must keep at least one entry after discarding.
    #[error("window B discards {discarded} of {window} years; at least one must remain")]
    InvalidWindowB { window: usize, discarded: usize },

    /// Window A must contain at least one year.
    #[error("window A must contain at least one year")]
    EmptyWindowA,

    /// Full accrual must be reached after the minimum contribution period.
    #[error("full accrual at {full} months must exceed the {minimum}-month minimum")]
    InvalidAccrualRamp { minimum: u32, full: u32 },

    /// An anticipation ceiling of zero months would divide by zero.
    #[error("{field} must be at least one month")]
    ZeroAnticipationCeiling { field: &'static str },

    /// The pension floor cannot exceed the ceiling.
    #[error("minimum pension {min} exceeds maximum pension {max}")]
    InvertedPensionRange { min: Decimal, max: Decimal },

    /// Ages must carry months in [0, 11] and be non-negative.
    #[error("{field} is not a valid age: {age}")]
    InvalidAge { field: &'static str, age: AgeSpan },
}

/// How a window is filled when the history is shorter than the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowShortfall {
    /// Missing years drop out of the sum, and the divisor shrinks in
    /// proportion to the entries actually available.
    #[default]
    ExcludeMissing,
    /// Missing years count as zero contribution; the divisor is unchanged.
    ZeroFill,
}

/// Configuration parameters for the pension calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeConfig {
    /// Minimum contribution for any pension (15 years).
    pub min_contribution_months: u32,
    /// Minimum contribution for voluntary early retirement (35 years).
    pub early_voluntary_min_months: u32,
    /// Minimum contribution for involuntary early retirement (33 years).
    pub early_involuntary_min_months: u32,
    /// Registered unemployment required for involuntary early retirement.
    pub min_unemployment_months: u32,

    /// Age at which projected contribution is compared with the threshold.
    pub reference_age: AgeSpan,
    /// Projected contribution at `reference_age` that unlocks `reduced_age`.
    pub full_age_threshold_months: u32,
    /// Ordinary age when the threshold is met.
    pub reduced_age: AgeSpan,
    /// Ordinary age otherwise.
    pub extended_age: AgeSpan,

    pub max_voluntary_anticipation: u32,
    /// Reduction at `max_voluntary_anticipation` months; scales linearly from zero.
    pub voluntary_max_reduction: Decimal,
    pub max_involuntary_anticipation: u32,
    /// Reduction at `max_involuntary_anticipation` months; scales linearly from zero.
    pub involuntary_max_reduction: Decimal,
    /// Additive bonus per year worked past ordinary age.
    pub delay_bonus_per_year: Decimal,

    pub window_a_years: usize,
    pub divisor_a: Decimal,
    pub window_b_years: usize,
    /// Lowest-valued years dropped from window B.
    pub window_b_discarded: usize,
    pub divisor_b: Decimal,
    pub window_shortfall: WindowShortfall,

    /// Contribution that earns 100% of the regulatory base (36.5 years).
    pub full_accrual_months: u32,
    /// Gender-gap supplement paid per child.
    pub child_supplement: Decimal,
    pub min_pension: Decimal,
    pub max_pension: Decimal,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            min_contribution_months: 180,
            early_voluntary_min_months: 420,
            early_involuntary_min_months: 396,
            min_unemployment_months: 6,
            reference_age: AgeSpan::new(65, 0),
            full_age_threshold_months: 38 * 12 + 3,
            reduced_age: AgeSpan::new(65, 0),
            extended_age: AgeSpan::new(66, 10),
            max_voluntary_anticipation: 24,
            voluntary_max_reduction: dec!(0.21),
            max_involuntary_anticipation: 48,
            involuntary_max_reduction: dec!(0.30),
            delay_bonus_per_year: dec!(0.04),
            window_a_years: 25,
            divisor_a: dec!(350),
            window_b_years: 29,
            window_b_discarded: 2,
            divisor_b: dec!(352.33),
            window_shortfall: WindowShortfall::ExcludeMissing,
            full_accrual_months: 438,
            child_supplement: dec!(33.20),
            min_pension: dec!(1050.00),
            max_pension: dec!(3175.00),
        }
    }
}

impl SchemeConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeConfigError`] for the first field outside its valid range.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pension_core::{SchemeConfig, SchemeConfigError};
    ///
    /// let config = SchemeConfig {
    ///     divisor_a: dec!(0),
    ///     ..SchemeConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(SchemeConfigError::InvalidDivisor { field: "divisor_a", value: dec!(0) })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), SchemeConfigError> {
        for (field, age) in [
            ("reference_age", self.reference_age),
            ("reduced_age", self.reduced_age),
            ("extended_age", self.extended_age),
        ] {
            if age.years < 0 || !(0..12).contains(&age.months) {
                return Err(SchemeConfigError::InvalidAge { field, age });
            }
        }
        for (field, value) in [
            ("voluntary_max_reduction", self.voluntary_max_reduction),
            ("involuntary_max_reduction", self.involuntary_max_reduction),
            ("delay_bonus_per_year", self.delay_bonus_per_year),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(SchemeConfigError::InvalidCoefficient { field, value });
            }
        }
        if self.max_voluntary_anticipation == 0 {
            return Err(SchemeConfigError::ZeroAnticipationCeiling {
                field: "max_voluntary_anticipation",
            });
        }
        if self.max_involuntary_anticipation == 0 {
            return Err(SchemeConfigError::ZeroAnticipationCeiling {
                field: "max_involuntary_anticipation",
            });
        }
        if self.window_a_years == 0 {
            return Err(SchemeConfigError::EmptyWindowA);
        }
        if self.window_b_discarded >= self.window_b_years {
            return Err(SchemeConfigError::InvalidWindowB {
                window: self.window_b_years,
                discarded: self.window_b_discarded,
            });
        }
        for (field, value) in [("divisor_a", self.divisor_a), ("divisor_b", self.divisor_b)] {
            if value <= Decimal::ZERO {
                return Err(SchemeConfigError::InvalidDivisor { field, value });
            }
        }
        if self.full_accrual_months <= self.min_contribution_months {
            return Err(SchemeConfigError::InvalidAccrualRamp {
                minimum: self.min_contribution_months,
                full: self.full_accrual_months,
            });
        }
        if self.min_pension > self.max_pension {
            return Err(SchemeConfigError::InvertedPensionRange {
                min: self.min_pension,
                max: self.max_pension,
            });
        }
        Ok(())
    }

    /// Entries kept from window B once the worst years are dropped.
    pub fn window_b_kept(&self) -> usize {
        self.window_b_years - self.window_b_discarded
    }
}
