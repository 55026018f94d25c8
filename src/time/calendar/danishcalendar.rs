use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::holiday::holidayengine::HolidayEngine;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayyearcache::HolidayYearCache;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::utility::check_year;

const SEVEN_DAYS: Days = Days::new(7);

/// Danish working-day calendar: Saturdays, Sundays and every `holiday`
/// category record are days off. Observances, birthdays and vacations are not.
pub struct DanishCalendar {
    engine: HolidayEngine,
    cache: HolidayYearCache
}

impl DanishCalendar {
    pub fn new(engine: HolidayEngine) -> DanishCalendar {
        DanishCalendar { engine, cache: HolidayYearCache::new() }
    }

    pub fn engine(&self) -> &HolidayEngine {
        &self.engine
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_official_holiday(&self, d: NaiveDate) -> Result<bool, HolidayError> {
        let records = self.cache.get_or_compute(&self.engine, d.year())?;
        Ok(records
            .iter()
            .any(|record| record.date() == d && record.is_day_off()))
    }
}

impl HolidayCalendar for DanishCalendar {
    fn is_holiday(&self, d: NaiveDate) -> Result<bool, HolidayError> {
        if self.is_weekend(d) {
            return Ok(true);
        }
        self.is_official_holiday(d)
    }

    fn get_holiday_set(&self, year: i32) -> Result<HashSet<NaiveDate>, HolidayError> {
        let year = check_year(year)?;
        let mut holiday_set = HashSet::with_capacity(120);

        let year_end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or(HolidayError::InvalidDate { year, month: 12, day: 31 })?;
        for target_weekday in [Weekday::Sat, Weekday::Sun] {
            let mut current = NaiveDate::from_weekday_of_month_opt(year, 1, target_weekday, 1)
                .ok_or(HolidayError::OutOfRange { year, month: 1, weekday: target_weekday, n: 1 })?;
            while current <= year_end {
                holiday_set.insert(current);
                current = current + SEVEN_DAYS;
            }
        }

        let records = self.cache.get_or_compute(&self.engine, year)?;
        holiday_set.extend(
            records
                .iter()
                .filter(|record| record.is_day_off() && record.date().year() == year)
                .map(|record| record.date())
        );
        Ok(holiday_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::danishholidays::NewYearsEveConvention;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> DanishCalendar {
        DanishCalendar::new(HolidayEngine::danish(NewYearsEveConvention::CurrentYear).unwrap())
    }

    #[test]
    fn easter_week_business_days() {
        let calendar = calendar();
        // Skærtorsdag 2025-04-17 through 2. Påskedag 2025-04-21
        assert!(calendar.is_business_day(ymd(2025, 4, 16)).unwrap());
        assert!(calendar.is_holiday(ymd(2025, 4, 17)).unwrap());
        assert_eq!(calendar.next_business_day(ymd(2025, 4, 16)).unwrap(), ymd(2025, 4, 22));
        assert_eq!(calendar.previous_business_day(ymd(2025, 4, 22)).unwrap(), ymd(2025, 4, 16));
    }

    #[test]
    fn store_bededag_stops_being_a_day_off_in_2024() {
        let calendar = calendar();
        assert!(calendar.is_holiday(ymd(2023, 5, 5)).unwrap());
        assert!(calendar.is_business_day(ymd(2025, 5, 16)).unwrap());
    }

    #[test]
    fn mors_dag_is_not_a_day_off_but_a_sunday_is() {
        let calendar = calendar();
        assert!(!calendar.is_official_holiday(ymd(2024, 5, 12)).unwrap());
        assert!(calendar.is_holiday(ymd(2024, 5, 12)).unwrap());
    }

    #[test]
    fn month_edges_skip_christmas_and_new_year() {
        let calendar = calendar();
        assert_eq!(calendar.last_business_day_of_month(2024, 12).unwrap(), ymd(2024, 12, 30));
        assert_eq!(calendar.first_business_day_of_month(2025, 1).unwrap(), ymd(2025, 1, 2));
        assert_eq!(calendar.last_business_day_of_month(2024, 13), Err(HolidayError::InvalidMonth(13)));
    }

    #[test]
    fn shift_counts_only_business_days() {
        let calendar = calendar();
        assert_eq!(calendar.shift_n_business_day(ymd(2024, 12, 20), 2).unwrap(), ymd(2024, 12, 27));
        assert_eq!(calendar.shift_n_business_day(ymd(2024, 12, 27), -2).unwrap(), ymd(2024, 12, 20));
        assert_eq!(calendar.shift_n_business_day(ymd(2024, 12, 27), 0).unwrap(), ymd(2024, 12, 27));
    }

    #[test]
    fn holiday_set_contains_weekends_and_days_off() {
        let calendar = calendar();
        let set = calendar.get_holiday_set(2024).unwrap();
        // 2024 has 52 Saturdays and 52 Sundays
        assert!(set.len() > 104);
        assert!(set.contains(&ymd(2024, 1, 1)));
        assert!(set.contains(&ymd(2024, 5, 9))); // Kristi Himmelfartsdag
        assert!(!set.contains(&ymd(2024, 2, 14)));
        assert!(set.iter().all(|d| d.year() == 2024));
    }

    #[test]
    fn out_of_range_year_is_an_error() {
        assert_eq!(calendar().is_holiday(ymd(1500, 1, 2)), Err(HolidayError::InvalidYear(1500)));
    }
}
