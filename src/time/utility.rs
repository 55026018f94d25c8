use crate::holiday::holidayerror::HolidayError;

/// First year the Gregorian Easter computation is defined for.
pub const MIN_YEAR: i32 = 1583;
pub const MAX_YEAR: i32 = 9999;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Number of days in `month` (1-indexed). Returns 0 for a month outside 1..=12.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month > 12 {
        return 0;
    }

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

#[inline]
pub fn check_year (year: i32) -> Result<i32, HolidayError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(HolidayError::InvalidYear(year))
    }
}

#[inline]
pub fn check_month (month: u32) -> Result<u32, HolidayError> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(HolidayError::InvalidMonth(month))
    }
}
