use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDate};

use crate::holiday::holidayerror::HolidayError;
use crate::time::easter::compute_easter;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// Shifts that land in Easter's own year for every Easter date.
///
/// Easter is never earlier than March 22 (day 81 of a common year) nor later
/// than April 25 (250 days before December 31).
pub const EASTER_SHIFT_RANGE: RangeInclusive<i64> = -80..=250;

/// Holiday at a fixed day offset from (Western) Easter Sunday.
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i64) -> Result<EasterRelatedHoliday, HolidayError> {
        if !EASTER_SHIFT_RANGE.contains(&shift_days) {
            return Err(HolidayError::InvalidRule(format!(
                "easter shift of {shift_days} days may leave the year (allowed {}..={})",
                EASTER_SHIFT_RANGE.start(),
                EASTER_SHIFT_RANGE.end()
            )));
        }
        Ok(EasterRelatedHoliday { shift_days })
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        let easter_day = compute_easter(year)?;
        easter_day
            .checked_add_signed(Duration::days(self.shift_days))
            .ok_or_else(|| HolidayError::InvalidRule(format!("easter {year} shifted by {} days", self.shift_days)))
    }
}
