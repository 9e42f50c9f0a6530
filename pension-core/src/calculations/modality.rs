//! Modality adjustment of the target age and pension coefficients.
//!
//! [`ModalityPlan`] is the tagged form of a profile's modality together with
//! the parameters that modality reads. Each variant has its own
//! transformation from the ordinary age to a [`ModalityOutcome`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{AgeSpan, RetirementModality, SchemeConfig, WorkerProfile};

/// Target age and coefficients produced by a modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalityOutcome {
    pub target_age: AgeSpan,
    /// Fraction removed from the accrued pension, in [0, 1].
    pub reduction_percentage: Decimal,
    /// Fraction of the regulatory base added on top, not compounded.
    pub delay_bonus: Decimal,
}

/// A modality with its parameters resolved and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalityPlan {
    Ordinary,
    EarlyVoluntary { anticipation_months: u32 },
    EarlyInvoluntary { anticipation_months: u32 },
    Delayed { extra_years: u32 },
    /// Retires at ordinary age with no coefficient; the reduced working day
    /// is outside this engine.
    Partial,
}

impl ModalityPlan {
    /// Resolves the profile's modality, clamping anticipation to the
    /// modality's ceiling.
    pub fn from_profile(
        profile: &WorkerProfile,
        config: &SchemeConfig,
    ) -> Self {
        let requested = profile.anticipation_months.unwrap_or(0);
        match profile.modality {
            RetirementModality::Ordinary => Self::Ordinary,
            RetirementModality::EarlyVoluntary => Self::EarlyVoluntary {
                anticipation_months: clamp_anticipation(
                    requested,
                    config.max_voluntary_anticipation,
                ),
            },
            RetirementModality::EarlyInvoluntary => Self::EarlyInvoluntary {
                anticipation_months: clamp_anticipation(
                    requested,
                    config.max_involuntary_anticipation,
                ),
            },
            RetirementModality::Delayed => Self::Delayed {
                extra_years: profile.delayed_years.unwrap_or(0),
            },
            RetirementModality::Partial => Self::Partial,
        }
    }

    pub fn modality(&self) -> RetirementModality {
        match self {
            Self::Ordinary => RetirementModality::Ordinary,
            Self::EarlyVoluntary { .. } => RetirementModality::EarlyVoluntary,
            Self::EarlyInvoluntary { .. } => RetirementModality::EarlyInvoluntary,
            Self::Delayed { .. } => RetirementModality::Delayed,
            Self::Partial => RetirementModality::Partial,
        }
    }

    /// Anticipation applied by this plan; zero for non-early modalities.
    pub fn anticipation_months(&self) -> u32 {
        match self {
            Self::EarlyVoluntary {
                anticipation_months,
            }
            | Self::EarlyInvoluntary {
                anticipation_months,
            } => *anticipation_months,
            _ => 0,
        }
    }

    /// Applies the plan to the ordinary age.
    pub fn apply(
        &self,
        ordinary_age: AgeSpan,
        config: &SchemeConfig,
    ) -> ModalityOutcome {
        let outcome = match *self {
            Self::Ordinary | Self::Partial => at_ordinary_age(ordinary_age),
            Self::EarlyVoluntary {
                anticipation_months,
            } => anticipate(
                ordinary_age,
                anticipation_months,
                config.max_voluntary_anticipation,
                config.voluntary_max_reduction,
            ),
            Self::EarlyInvoluntary {
                anticipation_months,
            } => anticipate(
                ordinary_age,
                anticipation_months,
                config.max_involuntary_anticipation,
                config.involuntary_max_reduction,
            ),
            Self::Delayed { extra_years } => {
                delay(ordinary_age, extra_years, config.delay_bonus_per_year)
            }
        };

        debug!(
            modality = self.modality().as_str(),
            target_age = %outcome.target_age,
            reduction = %outcome.reduction_percentage,
            delay_bonus = %outcome.delay_bonus,
            "applied retirement modality"
        );
        outcome
    }
}

fn clamp_anticipation(
    requested: u32,
    ceiling: u32,
) -> u32 {
    if requested > ceiling {
        warn!(requested, ceiling, "anticipation months clamped to modality ceiling");
        ceiling
    } else {
        requested
    }
}

fn at_ordinary_age(ordinary_age: AgeSpan) -> ModalityOutcome {
    ModalityOutcome {
        target_age: ordinary_age,
        reduction_percentage: Decimal::ZERO,
        delay_bonus: Decimal::ZERO,
    }
}

/// Retires `months` early; the reduction scales linearly up to `max_reduction`
/// at `max_months`.
fn anticipate(
    ordinary_age: AgeSpan,
    months: u32,
    max_months: u32,
    max_reduction: Decimal,
) -> ModalityOutcome {
    let months = months.min(max_months);
    let reduction_percentage = if max_months == 0 {
        Decimal::ZERO
    } else {
        max_reduction * Decimal::from(months) / Decimal::from(max_months)
    };

    ModalityOutcome {
        target_age: ordinary_age.add_months(-(months as i32)),
        reduction_percentage,
        delay_bonus: Decimal::ZERO,
    }
}

/// Works `extra_years` past ordinary age, capped so the target age stays
/// representable; the bonus counts only the years applied.
fn delay(
    ordinary_age: AgeSpan,
    extra_years: u32,
    bonus_per_year: Decimal,
) -> ModalityOutcome {
    let headroom = (i32::MAX - ordinary_age.total_months().max(0)) / 12;
    let extra_years = i32::try_from(extra_years).unwrap_or(i32::MAX).min(headroom);

    ModalityOutcome {
        target_age: ordinary_age.add_years(extra_years),
        reduction_percentage: Decimal::ZERO,
        delay_bonus: bonus_per_year * Decimal::from(extra_years),
    }
}
