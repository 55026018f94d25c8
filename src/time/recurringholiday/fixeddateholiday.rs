use chrono::NaiveDate;

use crate::holiday::holidayerror::HolidayError;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::utility::{check_month, check_year, days_of_month};

#[derive(Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    year_offset: i32
}

impl FixedDateHoliday {
    /// Fails for a month/day that never exists (Feb 30, Apr 31, ...).
    pub fn new(month: u32, day: u32) -> Result<FixedDateHoliday, HolidayError> {
        let month = check_month(month)?;
        // 2000 is a leap year, so Feb 29 is accepted here
        if day == 0 || day > days_of_month(2000, month) {
            return Err(HolidayError::InvalidRule(format!("{month:02}-{day:02} is not a day of any year")));
        }
        Ok(FixedDateHoliday { month, day, year_offset: 0 })
    }

    /// Same month/day, but taken from `year + year_offset`.
    ///
    /// Only the previous-year carryover needs this, so the offset is limited
    /// to `-1..=0` and is not exposed to configuration.
    pub(crate) fn with_year_offset(month: u32, day: u32, year_offset: i32) -> Result<FixedDateHoliday, HolidayError> {
        if !(-1..=0).contains(&year_offset) {
            return Err(HolidayError::InvalidRule(format!("year offset {year_offset} is outside -1..=0")));
        }
        let mut holiday = FixedDateHoliday::new(month, day)?;
        holiday.year_offset = year_offset;
        Ok(holiday)
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year_offset(&self) -> i32 {
        self.year_offset
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        let year = check_year(year)?
            .checked_add(self.year_offset)
            .ok_or(HolidayError::InvalidYear(year))?;
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or(HolidayError::InvalidDate { year, month: self.month, day: self.day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_year() {
        let juledag = FixedDateHoliday::new(12, 25).unwrap();
        assert_eq!(juledag.get_holiday(2024).unwrap(), NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert!(juledag.is_holiday(&NaiveDate::from_ymd_opt(1999, 12, 25).unwrap()));
        assert!(!juledag.is_holiday(&NaiveDate::from_ymd_opt(1999, 12, 24).unwrap()));
    }

    #[test]
    fn rejects_dates_that_never_exist() {
        assert!(FixedDateHoliday::new(2, 30).is_err());
        assert!(FixedDateHoliday::new(4, 31).is_err());
        assert!(FixedDateHoliday::new(13, 1).is_err());
        assert!(FixedDateHoliday::new(1, 0).is_err());
    }

    #[test]
    fn leap_day_only_resolves_in_leap_years() {
        let leap_day = FixedDateHoliday::new(2, 29).unwrap();
        assert!(leap_day.get_holiday(2024).is_ok());
        assert_eq!(
            leap_day.get_holiday(2100),
            Err(HolidayError::InvalidDate { year: 2100, month: 2, day: 29 })
        );
    }

    #[test]
    fn year_offset_moves_to_previous_year() {
        let eve = FixedDateHoliday::with_year_offset(12, 31, -1).unwrap();
        assert_eq!(eve.get_holiday(2025).unwrap(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn year_offset_is_limited_to_previous_year() {
        assert!(FixedDateHoliday::with_year_offset(12, 31, 0).is_ok());
        for offset in [1, -2, i32::MAX, i32::MIN] {
            assert!(matches!(
                FixedDateHoliday::with_year_offset(12, 31, offset),
                Err(HolidayError::InvalidRule(_))
            ));
        }
    }
}
