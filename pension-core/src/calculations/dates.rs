//! Calendar arithmetic for retirement dates and the countdown to them.
//!
//! Month addition uses chrono's calendar rules: adding months past the end of
//! a shorter month lands on its last day (a 29 February birthday reaches
//! 28 February in common years).

use chrono::{Datelike, Months, NaiveDate};

use crate::{AgeSpan, TimeRemaining};

/// Date on which someone born on `birth_date` reaches `age`.
///
/// Negative ages are treated as zero.
pub fn add_age(
    birth_date: NaiveDate,
    age: AgeSpan,
) -> NaiveDate {
    let months = age.total_months().max(0) as u32;
    birth_date
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Number of days in the calendar month containing `year`/`month`.
pub fn days_in_month(
    year: i32,
    month: u32,
) -> u32 {
    let (next_year, next_month) = if month >= 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Decomposes `target - today` into years, months and days.
///
/// A negative day difference borrows a month sized by the calendar month
/// before `target`; a negative month difference borrows a year. Every
/// component is floored at zero, so past dates yield [`TimeRemaining::ZERO`].
pub fn time_remaining(
    today: NaiveDate,
    target: NaiveDate,
) -> TimeRemaining {
    if target <= today {
        return TimeRemaining::ZERO;
    }

    let mut years = target.year() - today.year();
    let mut months = target.month() as i32 - today.month() as i32;
    let mut days = target.day() as i32 - today.day() as i32;

    if days < 0 {
        months -= 1;
        let (prior_year, prior_month) = if target.month() == 1 {
            (target.year() - 1, 12)
        } else {
            (target.year(), target.month() - 1)
        };
        days += days_in_month(prior_year, prior_month) as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    TimeRemaining {
        years: years.max(0),
        months: months.max(0),
        days: days.max(0),
    }
}

/// Whole calendar months elapsed from `from` to `to`, zero if `to` is not later.
pub fn whole_months_between(
    from: NaiveDate,
    to: NaiveDate,
) -> i32 {
    time_remaining(from, to).whole_months()
}
