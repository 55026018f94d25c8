use chrono::{Datelike, NaiveDate};

use crate::holiday::holidayerror::HolidayError;

/// A rule producing exactly one date per year.
pub trait RecurringHoliday: Send + Sync {

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year())
            .is_ok_and(|holiday| holiday == *d)
    }
}
