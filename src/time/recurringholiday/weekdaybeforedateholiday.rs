use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::holiday::holidayerror::HolidayError;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::weekdayresolver::weekday_on_or_before;

/// `weekday` on or before a fixed anchor date, moved back `weeks_before` weeks.
///
/// The Sundays of Advent are all expressed this way: the fourth is the Sunday
/// on or before December 24 and the first lies three weeks earlier.
#[derive(Clone)]
pub struct WeekdayBeforeDateHoliday {
    anchor: FixedDateHoliday,
    weekday: Weekday,
    weeks_before: u32
}

impl WeekdayBeforeDateHoliday {
    pub fn new(month: u32, day: u32, weekday: Weekday, weeks_before: u32) -> Result<WeekdayBeforeDateHoliday, HolidayError> {
        let anchor = FixedDateHoliday::new(month, day)?;
        // the result lies up to 6 + 7 * weeks_before days before the anchor
        // and must not reach the previous year
        let reach = 6 + 7 * u64::from(weeks_before);
        if reach >= earliest_ordinal(month, day)? {
            return Err(HolidayError::InvalidRule(format!("{weeks_before} weeks before {month:02}-{day:02} may leave the year")));
        }
        Ok(WeekdayBeforeDateHoliday { anchor, weekday, weeks_before })
    }

    pub fn anchor(&self) -> &FixedDateHoliday {
        &self.anchor
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn weeks_before(&self) -> u32 {
        self.weeks_before
    }
}

/// Smallest day-of-year `month`/`day` takes in any year.
fn earliest_ordinal(month: u32, day: u32) -> Result<u64, HolidayError> {
    // 2000 is a leap year; after February a common year is one day earlier
    let leap_ordinal = NaiveDate::from_ymd_opt(2000, month, day)
        .ok_or(HolidayError::InvalidDate { year: 2000, month, day })?
        .ordinal();
    Ok(u64::from(if month > 2 { leap_ordinal - 1 } else { leap_ordinal }))
}

impl RecurringHoliday for WeekdayBeforeDateHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        let anchor = self.anchor.get_holiday(year)?;
        let on_or_before = weekday_on_or_before(anchor, self.weekday);
        Ok(on_or_before - Days::new(7 * self.weeks_before as u64))
    }
}
