//! The pension calculation pipeline.
//!
//! [`PensionCalculator`] composes the stages in order:
//!
//! 1. Eligibility gate ([`check_eligibility`])
//! 2. Ordinary-age projection ([`project_ordinary_age`])
//! 3. Modality adjustment ([`ModalityPlan`])
//! 4. Retirement date and countdown ([`add_age`], [`time_remaining`])
//! 5. Regulatory bases A and B ([`regulatory_bases`])
//! 6. Accrual, coefficients, supplement and clamp ([`monthly_pension`])
//!
//! Early-retirement results also carry an [`OrdinaryComparison`] obtained by
//! re-running the same pipeline with the ordinary modality.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use pension_core::{
//!     AgeSpan, ContributionBase, PensionCalculator, PensionOption, RetirementModality,
//!     WorkerProfile,
//! };
//!
//! let profile = WorkerProfile {
//!     holder_name: None,
//!     birth_date: NaiveDate::from_ymd_opt(1967, 9, 10).unwrap(),
//!     total_contributed_years: 34,
//!     total_contributed_months: 5,
//!     contribution_bases: (0..30)
//!         .map(|i| ContributionBase { year: 2024 - i, monthly_base: dec!(2081) })
//!         .collect(),
//!     number_of_children: 0,
//!     modality: RetirementModality::Ordinary,
//!     months_of_unemployment: None,
//!     anticipation_months: None,
//!     delayed_years: None,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let result = PensionCalculator::default().calculate_as_of(&profile, today);
//!
//! assert!(result.eligible);
//! assert_eq!(result.ordinary_age, AgeSpan::new(65, 0));
//! assert_eq!(result.pension_b, dec!(1913.67));
//! assert_eq!(result.best_option, PensionOption::B);
//! ```

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::calculations::dates::{add_age, time_remaining};
use crate::calculations::eligibility::check_eligibility;
use crate::calculations::modality::ModalityPlan;
use crate::calculations::ordinary_age::project_ordinary_age;
use crate::calculations::pension::{
    PensionCoefficients, accrual_percentage, best_option, gender_gap_supplement, monthly_pension,
};
use crate::calculations::regulatory_base::regulatory_bases;
use crate::{
    AgeSpan, CalculationResult, OrdinaryComparison, PensionOption, SchemeConfig,
    SchemeConfigError, WorkerProfile,
};

/// Calculator for retirement age and pension under a [`SchemeConfig`].
///
/// Holds no state besides the validated configuration; every call is a pure
/// function of the profile and the reference date.
#[derive(Debug, Clone, Default)]
pub struct PensionCalculator {
    config: SchemeConfig,
}

impl PensionCalculator {
    /// Creates a calculator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeConfigError`] if any configuration value is out of range.
    pub fn new(config: SchemeConfig) -> Result<Self, SchemeConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// Calculates against the local calendar date, read once for the whole call.
    pub fn calculate(
        &self,
        profile: &WorkerProfile,
    ) -> CalculationResult {
        self.calculate_as_of(profile, Local::now().date_naive())
    }

    /// Calculates with `today` as the reference date.
    ///
    /// Identical inputs always produce identical results.
    pub fn calculate_as_of(
        &self,
        profile: &WorkerProfile,
        today: NaiveDate,
    ) -> CalculationResult {
        let mut result = self.evaluate(profile, today);

        if result.eligible && profile.modality.is_early() {
            let ordinary = self.evaluate(&profile.as_ordinary(), today);
            result.ordinary_comparison = Some(OrdinaryComparison {
                ordinary_pension: ordinary.best_pension,
                ordinary_date: ordinary.retirement_date,
                monthly_difference: ordinary.best_pension - result.best_pension,
            });
        }

        result
    }

    fn evaluate(
        &self,
        profile: &WorkerProfile,
        today: NaiveDate,
    ) -> CalculationResult {
        let config = &self.config;
        let worked_months = profile.total_worked_months();
        let current_contribution = profile.current_contribution();

        if let Err(reason) = check_eligibility(profile, config) {
            return CalculationResult::blocked(
                profile.modality,
                current_contribution,
                reason.to_string(),
            )
            .with_holder_name(profile.holder_name.clone());
        }

        let projection = project_ordinary_age(profile.birth_date, worked_months, today, config);

        let plan = ModalityPlan::from_profile(profile, config);
        let outcome = plan.apply(projection.ordinary_age, config);

        let retirement_date = add_age(profile.birth_date, outcome.target_age);
        let remaining = time_remaining(today, retirement_date);
        let final_months = worked_months.saturating_add(remaining.whole_months());

        let bases = regulatory_bases(&profile.contribution_bases, config);
        let coefficients = PensionCoefficients {
            accrual_percentage: accrual_percentage(final_months, config),
            reduction_percentage: outcome.reduction_percentage,
            delay_bonus: outcome.delay_bonus,
            supplement: gender_gap_supplement(profile.number_of_children, config),
        };

        let pension_a = monthly_pension(bases.base_a, &coefficients, config);
        let pension_b = monthly_pension(bases.base_b, &coefficients, config);
        let best = best_option(pension_a, pension_b);
        let best_pension = match best {
            PensionOption::A => pension_a,
            PensionOption::B => pension_b,
        };

        debug!(
            modality = profile.modality.as_str(),
            %retirement_date,
            final_months,
            accrual = %coefficients.accrual_percentage,
            %pension_a,
            %pension_b,
            best = %best,
            "pension calculated"
        );

        CalculationResult {
            holder_name: profile.holder_name.clone(),
            eligible: true,
            block_reason: None,
            modality: profile.modality,
            anticipation_months: plan.anticipation_months(),
            ordinary_age: projection.ordinary_age,
            target_age: outcome.target_age,
            retirement_date: Some(retirement_date),
            time_remaining: remaining,
            current_contribution,
            final_contribution: AgeSpan::from_total_months(final_months),
            accrual_percentage: coefficients.accrual_percentage,
            regulatory_base_a: bases.base_a,
            regulatory_base_b: bases.base_b,
            pension_a,
            pension_b,
            best_option: best,
            best_pension,
            gender_gap_supplement: coefficients.supplement,
            reduction_percentage: outcome.reduction_percentage,
            delay_bonus: outcome.delay_bonus,
            ordinary_comparison: None,
        }
    }
}

/// Calculates with the default scheme against today's local date.
pub fn calculate(profile: &WorkerProfile) -> CalculationResult {
    PensionCalculator::default().calculate(profile)
}

/// Calculates with the default scheme against `today`.
pub fn calculate_as_of(
    profile: &WorkerProfile,
    today: NaiveDate,
) -> CalculationResult {
    PensionCalculator::default().calculate_as_of(profile, today)
}
