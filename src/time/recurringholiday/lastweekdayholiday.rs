use chrono::{NaiveDate, Weekday};

use crate::holiday::holidayerror::HolidayError;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::utility::check_month;
use crate::time::weekdayresolver::last_weekday_of_month;

#[derive(Clone)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub fn new(month: u32, weekday: Weekday) -> Result<LastWeekdayHoliday, HolidayError> {
        let month = check_month(month)?;
        Ok(LastWeekdayHoliday { month, weekday })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for LastWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        last_weekday_of_month(year, self.month, self.weekday)
    }
}
