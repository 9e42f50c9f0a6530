//! Minimum-contribution gate.
//!
//! Every modality needs the general minimum; the two early variants add their
//! own contribution floor, and involuntary early retirement also needs a
//! period of registered unemployment.

use thiserror::Error;
use tracing::warn;

use crate::{AgeSpan, RetirementModality, SchemeConfig, WorkerProfile};

/// Why a profile cannot retire under the requested modality.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockReason {
    #[error("at least {required} of contributions are required for any pension; {actual} accredited")]
    InsufficientContribution { required: AgeSpan, actual: AgeSpan },

    #[error("voluntary early retirement requires {required} of contributions; {actual} accredited")]
    EarlyVoluntaryContribution { required: AgeSpan, actual: AgeSpan },

    #[error("involuntary early retirement requires {required} of contributions; {actual} accredited")]
    EarlyInvoluntaryContribution { required: AgeSpan, actual: AgeSpan },

    #[error(
        "involuntary early retirement requires {required} months of registered unemployment; {actual} recorded"
    )]
    InsufficientUnemployment { required: u32, actual: u32 },
}

fn months_span(months: u32) -> AgeSpan {
    AgeSpan::from_total_months(months.min(i32::MAX as u32) as i32)
}

/// Checks the profile against the general and modality-specific prerequisites.
///
/// # Errors
///
/// Returns the first [`BlockReason`] that applies.
pub fn check_eligibility(
    profile: &WorkerProfile,
    config: &SchemeConfig,
) -> Result<(), BlockReason> {
    let worked = profile.total_worked_months();
    let actual = profile.current_contribution();

    let outcome = if (worked as i64) < config.min_contribution_months as i64 {
        Err(BlockReason::InsufficientContribution {
            required: months_span(config.min_contribution_months),
            actual,
        })
    } else {
        match profile.modality {
            RetirementModality::EarlyVoluntary
                if (worked as i64) < config.early_voluntary_min_months as i64 =>
            {
                Err(BlockReason::EarlyVoluntaryContribution {
                    required: months_span(config.early_voluntary_min_months),
                    actual,
                })
            }
            RetirementModality::EarlyInvoluntary
                if (worked as i64) < config.early_involuntary_min_months as i64 =>
            {
                Err(BlockReason::EarlyInvoluntaryContribution {
                    required: months_span(config.early_involuntary_min_months),
                    actual,
                })
            }
            RetirementModality::EarlyInvoluntary => {
                let unemployed = profile.months_of_unemployment.unwrap_or(0);
                if unemployed < config.min_unemployment_months {
                    Err(BlockReason::InsufficientUnemployment {
                        required: config.min_unemployment_months,
                        actual: unemployed,
                    })
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    };

    if let Err(reason) = &outcome {
        warn!(
            modality = profile.modality.as_str(),
            worked_months = worked,
            %reason,
            "profile blocked by eligibility gate"
        );
    }
    outcome
}
