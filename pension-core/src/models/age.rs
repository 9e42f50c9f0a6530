use std::fmt;

use serde::{Deserialize, Serialize};

/// A span of whole years and months, used both for ages and for contribution time.
///
/// `months` is kept in `[0, 11]` by every constructor in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct AgeSpan {
    pub years: i32,
    pub months: i32,
}

impl AgeSpan {
    pub const ZERO: AgeSpan = AgeSpan {
        years: 0,
        months: 0,
    };

    pub const fn new(
        years: i32,
        months: i32,
    ) -> Self {
        Self { years, months }
    }

    /// Builds a span from a month count, flooring so that `months` stays in
    /// `[0, 11]` even when `total` is negative.
    ///
    /// ```
    /// use pension_core::AgeSpan;
    ///
    /// assert_eq!(AgeSpan::from_total_months(782), AgeSpan::new(65, 2));
    /// assert_eq!(AgeSpan::from_total_months(-1), AgeSpan::new(-1, 11));
    /// ```
    pub fn from_total_months(total: i32) -> Self {
        Self {
            years: total.div_euclid(12),
            months: total.rem_euclid(12),
        }
    }

    /// Saturates at the `i32` bounds.
    pub fn total_months(&self) -> i32 {
        self.years.saturating_mul(12).saturating_add(self.months)
    }

    /// Shifts the span by `delta` months (negative to subtract), saturating
    /// instead of overflowing.
    pub fn add_months(
        &self,
        delta: i32,
    ) -> Self {
        Self::from_total_months(self.total_months().saturating_add(delta))
    }

    pub fn add_years(
        &self,
        delta: i32,
    ) -> Self {
        self.add_months(delta.saturating_mul(12))
    }
}

impl fmt::Display for AgeSpan {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} years {} months", self.years, self.months)
    }
}

/// Time left until the retirement date.
///
/// All components are non-negative; a retirement date in the past yields zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        years: 0,
        months: 0,
        days: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Whole months, ignoring the day component.
    pub fn whole_months(&self) -> i32 {
        self.years.saturating_mul(12).saturating_add(self.months)
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} years {} months {} days",
            self.years, self.months, self.days
        )
    }
}
