//! Weekday-of-month rules ("last Sunday of March", "second Sunday of May").
//!
//! Months are 1-indexed and weekdays are `chrono::Weekday` throughout, so
//! numbering follows ISO 8601 (`Weekday::num_days_from_monday`).

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::holiday::holidayerror::HolidayError;
use crate::time::utility::{check_month, check_year};

#[inline]
fn days_back_to(from: Weekday, target: Weekday) -> u64 {
    ((from.num_days_from_monday() + 7 - target.num_days_from_monday()) % 7) as u64
}

/// Latest date on or before `d` that falls on `weekday`.
pub fn weekday_on_or_before(d: NaiveDate, weekday: Weekday) -> NaiveDate {
    d - Days::new(days_back_to(d.weekday(), weekday))
}

pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Result<NaiveDate, HolidayError> {
    let year = check_year(year)?;
    let month = check_month(month)?;

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next_month = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or(HolidayError::InvalidDate { year: next_year, month: next_month, day: 1 })?;

    let last_of_month = first_of_next_month - Days::new(1);
    Ok(weekday_on_or_before(last_of_month, weekday))
}

/// The `n`-th (1-indexed) `weekday` of the month.
///
/// Fails with [`HolidayError::OutOfRange`] when the month has fewer than `n`
/// occurrences of `weekday`, e.g. a sixth Sunday.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> Result<NaiveDate, HolidayError> {
    let year = check_year(year)?;
    let month = check_month(month)?;

    let out_of_range = HolidayError::OutOfRange { year, month, weekday, n };
    if n == 0 {
        return Err(out_of_range);
    }

    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
        .ok_or(out_of_range)
}

#[inline]
pub fn first_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Result<NaiveDate, HolidayError> {
    nth_weekday_of_month(year, month, weekday, 1)
}

/// `weekday` of ISO week `week` in ISO week-year `year`.
pub fn weekday_of_iso_week(year: i32, week: u32, weekday: Weekday) -> Result<NaiveDate, HolidayError> {
    let year = check_year(year)?;
    NaiveDate::from_isoywd_opt(year, week, weekday)
        .ok_or(HolidayError::InvalidIsoWeek { year, week })
}
