use chrono::{NaiveDate, Weekday};

use crate::holiday::holidayerror::HolidayError;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::weekdayresolver::weekday_of_iso_week;

/// A weekday of a numbered ISO week, e.g. the Monday school vacations start on.
///
/// Weeks 1 and 52/53 can straddle the turn of the year and are rejected.
#[derive(Clone)]
pub struct IsoWeekHoliday {
    week: u32,
    weekday: Weekday
}

impl IsoWeekHoliday {
    pub fn new(week: u32, weekday: Weekday) -> Result<IsoWeekHoliday, HolidayError> {
        if !(2..=51).contains(&week) {
            return Err(HolidayError::InvalidRule(format!("ISO week {week} may fall outside its calendar year")));
        }
        Ok(IsoWeekHoliday { week, weekday })
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringHoliday for IsoWeekHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate, HolidayError> {
        weekday_of_iso_week(year, self.week, self.weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vinterferie_starts_monday_of_week_seven() {
        let vinterferie = IsoWeekHoliday::new(7, Weekday::Mon).unwrap();
        assert_eq!(vinterferie.get_holiday(2026).unwrap(), NaiveDate::from_ymd_opt(2026, 2, 9).unwrap());
    }

    #[test]
    fn rejects_boundary_weeks() {
        assert!(IsoWeekHoliday::new(1, Weekday::Mon).is_err());
        assert!(IsoWeekHoliday::new(52, Weekday::Mon).is_err());
        assert!(IsoWeekHoliday::new(51, Weekday::Sun).is_ok());
    }
}
