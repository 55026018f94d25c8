use chrono::{NaiveDate, Weekday};

use crate::holiday::holidayerror::HolidayError;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::utility::check_month;
use crate::time::weekdayresolver::nth_weekday_of_month;

#[derive(Clone)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    /// `n` is limited to 1..=4 so that the rule resolves in every year.
    /// A fifth occurrence is better expressed as a last-weekday rule.
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Result<NthWeekdayHoliday, HolidayError> {
        let month = check_month(month)?;
        if !(1..=4).contains(&n) {
            return Err(HolidayError::InvalidRule(format!("occurrence {n} of {weekday} does not exist in every month")));
        }
        Ok(NthWeekdayHoliday { month, n, weekday })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        nth_weekday_of_month(year, self.month, self.weekday, self.n)
    }
}
