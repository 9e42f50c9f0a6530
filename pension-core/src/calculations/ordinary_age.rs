//! Statutory ("ordinary") retirement age projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::dates::{add_age, whole_months_between};
use crate::{AgeSpan, SchemeConfig};

/// Projected contribution at the reference age and the ordinary age it yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinaryAgeProjection {
    pub projected_months: i32,
    pub ordinary_age: AgeSpan,
}

/// Projects contribution up to the reference age (65 by default) and picks
/// the ordinary age from the threshold.
///
/// Months between `today` and the reference birthday are added to
/// `worked_months`; a reference birthday already past adds nothing.
pub fn project_ordinary_age(
    birth_date: NaiveDate,
    worked_months: i32,
    today: NaiveDate,
    config: &SchemeConfig,
) -> OrdinaryAgeProjection {
    let reference_date = add_age(birth_date, config.reference_age);
    let projected_months =
        worked_months.saturating_add(whole_months_between(today, reference_date));

    let ordinary_age = if projected_months as i64 >= config.full_age_threshold_months as i64 {
        config.reduced_age
    } else {
        config.extended_age
    };

    debug!(
        %reference_date,
        projected_months,
        threshold = config.full_age_threshold_months,
        %ordinary_age,
        "projected ordinary retirement age"
    );

    OrdinaryAgeProjection {
        projected_months,
        ordinary_age,
    }
}
