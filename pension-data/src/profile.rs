//! TOML loader for worker profiles.
//!
//! Dates and decimals are written as strings so they round-trip through
//! chrono and rust_decimal unchanged:
//!
//! ```toml
//! holder_name = "Sample Worker"
//! birth_date = "1967-09-10"
//! total_contributed_years = 34
//! total_contributed_months = 5
//! number_of_children = 1
//! modality = "early_voluntary"     # or the short code, e.g. "EARLY_VOL"
//! anticipation_months = 24
//!
//! [[contribution_bases]]
//! year = 2024
//! monthly_base = "2081.00"
//! ```
//!
//! Inline bases are optional; the CLI can read them from a CSV file instead.

use std::path::Path;

use pension_core::WorkerProfile;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a profile.
#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("total_contributed_months must be below 12, got {0}")]
    MonthsOutOfRange(u32),

    #[error("contribution base for year {0} appears more than once")]
    DuplicateYear(i32),

    #[error("negative monthly base for year {0}")]
    NegativeBase(i32),
}

/// Parses and checks a profile, ordering inline bases newest first.
///
/// # Errors
///
/// Returns [`ProfileLoadError`] when the TOML is malformed or a field breaks
/// the profile's invariants.
pub fn load_profile_from_str(input: &str) -> Result<WorkerProfile, ProfileLoadError> {
    let mut profile: WorkerProfile = toml::from_str(input)?;

    if profile.total_contributed_months >= 12 {
        return Err(ProfileLoadError::MonthsOutOfRange(profile.total_contributed_months));
    }

    profile.contribution_bases.sort_by(|a, b| b.year.cmp(&a.year));
    if let Some(pair) = profile.contribution_bases.windows(2).find(|w| w[0].year == w[1].year) {
        return Err(ProfileLoadError::DuplicateYear(pair[0].year));
    }
    if let Some(base) = profile
        .contribution_bases
        .iter()
        .find(|b| b.monthly_base.is_sign_negative() && !b.monthly_base.is_zero())
    {
        return Err(ProfileLoadError::NegativeBase(base.year));
    }

    debug!(
        modality = profile.modality.as_str(),
        inline_bases = profile.contribution_bases.len(),
        "loaded worker profile"
    );
    Ok(profile)
}

pub fn load_profile_from_file(path: &Path) -> Result<WorkerProfile, ProfileLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_profile_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pension_core::RetirementModality;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const MINIMAL_TOML: &str = r#"
birth_date = "1967-09-10"
total_contributed_years = 34
total_contributed_months = 5
"#;

    const FULL_TOML: &str = r#"
holder_name = "Sample Worker"
birth_date = "1962-04-30"
total_contributed_years = 38
total_contributed_months = 11
number_of_children = 2
modality = "early_involuntary"
months_of_unemployment = 9
anticipation_months = 30

[[contribution_bases]]
year = 2022
monthly_base = "1900.00"

[[contribution_bases]]
year = 2024
monthly_base = "2081.00"

[[contribution_bases]]
year = 2023
monthly_base = "2010.50"
"#;

    #[test]
    fn minimal_profile_uses_defaults() {
        let profile = load_profile_from_str(MINIMAL_TOML).expect("should parse");

        assert_eq!(profile.birth_date, NaiveDate::from_ymd_opt(1967, 9, 10).unwrap());
        assert_eq!(profile.total_worked_months(), 413);
        assert_eq!(profile.modality, RetirementModality::Ordinary);
        assert_eq!(profile.number_of_children, 0);
        assert!(profile.contribution_bases.is_empty());
        assert!(profile.holder_name.is_none());
        assert!(profile.anticipation_months.is_none());
    }

    #[test]
    fn full_profile_reads_every_field() {
        let profile = load_profile_from_str(FULL_TOML).expect("should parse");

        assert_eq!(profile.holder_name.as_deref(), Some("Sample Worker"));
        assert_eq!(profile.modality, RetirementModality::EarlyInvoluntary);
        assert_eq!(profile.months_of_unemployment, Some(9));
        assert_eq!(profile.anticipation_months, Some(30));
        assert_eq!(profile.number_of_children, 2);
    }

    #[test]
    fn inline_bases_are_ordered_newest_first() {
        let profile = load_profile_from_str(FULL_TOML).expect("should parse");

        let years: Vec<i32> = profile.contribution_bases.iter().map(|b| b.year).collect();
        assert_eq!(years, vec![2024, 2023, 2022]);
        assert_eq!(profile.contribution_bases[0].monthly_base, dec!(2081.00));
    }

    #[test]
    fn rejects_month_overflow() {
        let toml =
            MINIMAL_TOML.replace("total_contributed_months = 5", "total_contributed_months = 12");

        let err = load_profile_from_str(&toml).unwrap_err();

        assert!(matches!(err, ProfileLoadError::MonthsOutOfRange(12)));
    }

    #[test]
    fn rejects_unknown_modality() {
        let toml = format!("{MINIMAL_TOML}modality = \"early\"\n");

        let err = load_profile_from_str(&toml).unwrap_err();

        assert!(matches!(err, ProfileLoadError::Toml(_)));
    }

    #[test]
    fn accepts_short_modality_code() {
        let toml = format!("{MINIMAL_TOML}modality = \"EARLY_INVOL\"\n");

        let profile = load_profile_from_str(&toml).expect("should parse");

        assert_eq!(profile.modality, RetirementModality::EarlyInvoluntary);
    }

    #[test]
    fn rejects_negative_years() {
        let toml =
            MINIMAL_TOML.replace("total_contributed_years = 34", "total_contributed_years = -1");

        let err = load_profile_from_str(&toml).unwrap_err();

        assert!(matches!(err, ProfileLoadError::Toml(_)));
    }

    #[test]
    fn rejects_duplicate_inline_year() {
        let toml = format!(
            "{MINIMAL_TOML}\n[[contribution_bases]]\nyear = 2024\nmonthly_base = \"1\"\n\n[[contribution_bases]]\nyear = 2024\nmonthly_base = \"2\"\n"
        );

        let err = load_profile_from_str(&toml).unwrap_err();

        assert!(matches!(err, ProfileLoadError::DuplicateYear(2024)));
    }

    #[test]
    fn rejects_negative_inline_base() {
        let toml = format!(
            "{MINIMAL_TOML}\n[[contribution_bases]]\nyear = 2024\nmonthly_base = \"-5\"\n"
        );

        let err = load_profile_from_str(&toml).unwrap_err();

        assert!(matches!(err, ProfileLoadError::NegativeBase(2024)));
    }
}
