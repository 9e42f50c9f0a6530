use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AgeSpan, RetirementModality};

/// One year of the earnings history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBase {
    pub year: i32,
    pub monthly_base: Decimal,
}

/// A worker's situation as supplied by the input form.
///
/// `contribution_bases` is ordered most recent year first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerProfile {
    #[serde(default)]
    pub holder_name: Option<String>,
    pub birth_date: NaiveDate,
    pub total_contributed_years: u32,
    pub total_contributed_months: u32,
    #[serde(default)]
    pub contribution_bases: Vec<ContributionBase>,
    #[serde(default)]
    pub number_of_children: u32,
    #[serde(default)]
    pub modality: RetirementModality,
    #[serde(default)]
    pub months_of_unemployment: Option<u32>,
    #[serde(default)]
    pub anticipation_months: Option<u32>,
    #[serde(default)]
    pub delayed_years: Option<u32>,
}

impl WorkerProfile {
    /// Contribution time accumulated as of today, in months.
    pub fn total_worked_months(&self) -> i32 {
        let months =
            self.total_contributed_years as i64 * 12 + self.total_contributed_months as i64;
        months.clamp(0, i32::MAX as i64) as i32
    }

    pub fn current_contribution(&self) -> AgeSpan {
        AgeSpan::from_total_months(self.total_worked_months())
    }

    /// Same profile retiring at ordinary age, used for the comparison report.
    pub fn as_ordinary(&self) -> Self {
        Self {
            modality: RetirementModality::Ordinary,
            anticipation_months: Some(0),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn profile() -> WorkerProfile {
        WorkerProfile {
            holder_name: None,
            birth_date: NaiveDate::from_ymd_opt(1967, 9, 10).unwrap(),
            total_contributed_years: 34,
            total_contributed_months: 5,
            contribution_bases: Vec::new(),
            number_of_children: 0,
            modality: RetirementModality::EarlyVoluntary,
            months_of_unemployment: None,
            anticipation_months: Some(24),
            delayed_years: None,
        }
    }

    #[test]
    fn total_worked_months_combines_years_and_months() {
        assert_eq!(profile().total_worked_months(), 413);
        assert_eq!(profile().current_contribution(), AgeSpan::new(34, 5));
    }

    #[test]
    fn current_contribution_normalizes_month_overflow() {
        let p = WorkerProfile {
            total_contributed_months: 14,
            ..profile()
        };

        assert_eq!(p.current_contribution(), AgeSpan::new(35, 2));
    }

    #[test]
    fn as_ordinary_resets_modality_and_anticipation() {
        let ordinary = profile().as_ordinary();

        assert_eq!(ordinary.modality, RetirementModality::Ordinary);
        assert_eq!(ordinary.anticipation_months, Some(0));
        assert_eq!(ordinary.birth_date, profile().birth_date);
    }
}
