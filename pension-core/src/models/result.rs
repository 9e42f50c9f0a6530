use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AgeSpan, RetirementModality, TimeRemaining};

/// Which regulatory-base window produced the better pension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PensionOption {
    /// Traditional 25-year window.
    #[default]
    A,
    /// 29-year window minus the two worst years.
    B,
}

impl fmt::Display for PensionOption {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// "What if you waited" figures attached to early-retirement results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinaryComparison {
    pub ordinary_pension: Decimal,
    pub ordinary_date: Option<NaiveDate>,
    /// Ordinary best pension minus this result's best pension.
    pub monthly_difference: Decimal,
}

/// Outcome of a single engine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub holder_name: Option<String>,
    pub eligible: bool,
    pub block_reason: Option<String>,
    pub modality: RetirementModality,
    /// Anticipation months actually applied, after the modality ceiling.
    pub anticipation_months: u32,
    pub ordinary_age: AgeSpan,
    pub target_age: AgeSpan,
    pub retirement_date: Option<NaiveDate>,
    pub time_remaining: TimeRemaining,
    pub current_contribution: AgeSpan,
    pub final_contribution: AgeSpan,
    pub accrual_percentage: Decimal,
    pub regulatory_base_a: Decimal,
    pub regulatory_base_b: Decimal,
    pub pension_a: Decimal,
    pub pension_b: Decimal,
    pub best_option: PensionOption,
    pub best_pension: Decimal,
    pub gender_gap_supplement: Decimal,
    pub reduction_percentage: Decimal,
    pub delay_bonus: Decimal,
    pub ordinary_comparison: Option<OrdinaryComparison>,
}

impl CalculationResult {
    /// Creates a zero-valued result for a profile that fails the eligibility gate.
    pub fn blocked(
        modality: RetirementModality,
        current_contribution: AgeSpan,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            holder_name: None,
            eligible: false,
            block_reason: Some(reason.into()),
            modality,
            anticipation_months: 0,
            ordinary_age: AgeSpan::ZERO,
            target_age: AgeSpan::ZERO,
            retirement_date: None,
            time_remaining: TimeRemaining::ZERO,
            current_contribution,
            final_contribution: AgeSpan::ZERO,
            accrual_percentage: Decimal::ZERO,
            regulatory_base_a: Decimal::ZERO,
            regulatory_base_b: Decimal::ZERO,
            pension_a: Decimal::ZERO,
            pension_b: Decimal::ZERO,
            best_option: PensionOption::A,
            best_pension: Decimal::ZERO,
            gender_gap_supplement: Decimal::ZERO,
            reduction_percentage: Decimal::ZERO,
            delay_bonus: Decimal::ZERO,
            ordinary_comparison: None,
        }
    }

    pub fn with_holder_name(
        mut self,
        holder_name: Option<String>,
    ) -> Self {
        self.holder_name = holder_name;
        self
    }
}
