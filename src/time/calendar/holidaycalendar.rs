use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use crate::holiday::holidayerror::HolidayError;
use crate::time::utility::{check_month, days_of_month};

const ONE_DAY: Days = Days::new(1);

/// Business-day arithmetic over a set of non-working days.
///
/// Every query may need a year's holidays, which can fail for years outside
/// the supported range, so all methods return `Result`.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> Result<bool, HolidayError>;

    /// All non-working days of `year`, weekends included.
    fn get_holiday_set(&self, year: i32) -> Result<HashSet<NaiveDate>, HolidayError>;

    fn is_business_day(&self, d: NaiveDate) -> Result<bool, HolidayError> {
        Ok(!self.is_holiday(d)?)
    }

    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Result<NaiveDate, HolidayError> {
        let shift_one_day: fn(NaiveDate) -> NaiveDate = if n >= 0 {
            |d: NaiveDate| d + ONE_DAY
        } else {
            |d: NaiveDate| d - ONE_DAY
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d);
            m -= self.is_business_day(d)? as u32;
        }
        Ok(d)
    }

    fn next_business_day(&self, d: NaiveDate) -> Result<NaiveDate, HolidayError> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate, HolidayError> {
        self.shift_n_business_day(d, -1)
    }

    fn last_business_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate, HolidayError> {
        let month = check_month(month)?;
        let day = days_of_month(year, month);
        let mut eom = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(HolidayError::InvalidDate { year, month, day })?;
        while self.is_holiday(eom)? {
            eom = eom - ONE_DAY;
        }
        Ok(eom)
    }

    fn first_business_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate, HolidayError> {
        let month = check_month(month)?;
        let mut fom = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(HolidayError::InvalidDate { year, month, day: 1 })?;
        while self.is_holiday(fom)? {
            fom = fom + ONE_DAY;
        }
        Ok(fom)
    }
}
