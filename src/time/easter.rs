use chrono::NaiveDate;

use crate::holiday::holidayerror::HolidayError;
use crate::time::utility::check_year;

/// Gregorian Easter Sunday (anonymous Gregorian / Meeus-Jones-Butcher algorithm).
///
/// All divisions are floor divisions on non-negative operands, so `/` and `%`
/// on `i32` give the same result as the textbook formulation.
pub fn compute_easter(year: i32) -> Result<NaiveDate, HolidayError> {
    let year = check_year(year)?;

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;

    let n = h + l - 7 * m + 114;
    let month = (n / 31) as u32;
    let day = (n % 31 + 1) as u32;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(HolidayError::InvalidDate { year, month, day })
}
