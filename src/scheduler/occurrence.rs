//! Next occurrence of a yearly birthday.

use crate::domain::BirthdayDate;
use chrono::{Datelike, NaiveDate};

/// The birthday moved into `year`.
///
/// A 29 February birthday is observed on 28 February in common years.
fn in_year(birthday: BirthdayDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
}

/// The first occurrence of `birthday` on or after `today`.
///
/// The birthday is first placed in the current year; if that date is
/// already behind `today` it is placed in the following year instead.
/// Returns `None` only when the resulting year is outside chrono's range.
pub fn next_occurrence(birthday: BirthdayDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = in_year(birthday, today.year())?;
    if this_year < today {
        in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Whole days from `today` to `date`; zero when they are the same day.
pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    (date - today).num_days()
}
