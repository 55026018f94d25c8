use std::collections::{HashSet, BTreeSet};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::holiday::danishholidays::{NewYearsEveConvention, danish_holiday_definitions};
use crate::holiday::holidaydefinition::HolidayDefinition;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayrecord::{HolidayCategory, HolidayRecord};
use crate::time::utility::check_year;

/// Turns a list of holiday definitions into the records of a given year.
///
/// The engine holds no mutable state and performs no I/O, so it can be
/// shared freely; callers that want per-year memoization wrap it in a
/// [`HolidayYearCache`](crate::holiday::holidayyearcache::HolidayYearCache).
#[derive(Clone)]
pub struct HolidayEngine {
    definitions: Vec<HolidayDefinition>,
    categories: Option<HashSet<HolidayCategory>>
}

impl HolidayEngine {
    pub fn new(definitions: Vec<HolidayDefinition>) -> HolidayEngine {
        HolidayEngine { definitions, categories: None }
    }

    pub fn danish(new_years_eve: NewYearsEveConvention) -> Result<HolidayEngine, HolidayError> {
        Ok(HolidayEngine::new(danish_holiday_definitions(new_years_eve)?))
    }

    /// Keeps only records of the given categories. `None` keeps everything.
    pub fn with_categories(mut self, categories: Option<HashSet<HolidayCategory>>) -> HolidayEngine {
        self.categories = categories;
        self
    }

    pub fn definitions(&self) -> &[HolidayDefinition] {
        &self.definitions
    }

    pub fn categories(&self) -> Option<&HashSet<HolidayCategory>> {
        self.categories.as_ref()
    }

    fn includes(&self, category: HolidayCategory) -> bool {
        self.categories
            .as_ref()
            .is_none_or(|categories| categories.contains(&category))
    }

    /// All holidays of `year`, sorted by date.
    ///
    /// Records sharing a date keep definition order. When two active
    /// definitions produce the same id the first one wins. Any rule failing
    /// fails the whole year; no partial result is returned.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn compute_holidays(&self, year: i32) -> Result<Vec<HolidayRecord>, HolidayError> {
        let year = check_year(year)?;

        let mut seen_ids: HashSet<String> = HashSet::with_capacity(self.definitions.len());
        let mut records = Vec::with_capacity(self.definitions.len());

        for definition in self.definitions.iter() {
            if !definition.is_active(year) || !self.includes(definition.category()) {
                continue;
            }
            let record = definition.record(year)?;
            if seen_ids.insert(record.id().to_owned()) {
                trace!(id = record.id(), date = %record.date(), "resolved holiday");
                records.push(record);
            } else {
                debug!(id = record.id(), "duplicate holiday id skipped");
            }
        }

        records.sort_by_key(|record| record.date());
        debug!(count = records.len(), "computed holidays");
        Ok(records)
    }

    /// Record for one definition key in `year`, if that key is active.
    pub fn holiday(&self, key: &str, year: i32) -> Result<Option<HolidayRecord>, HolidayError> {
        let id = format!("{key}-{year}");
        Ok(self.compute_holidays(year)?
            .into_iter()
            .find(|record| record.id() == id))
    }

    /// Holidays falling on `d`. Only `d`'s own year is evaluated, so a
    /// previous-year carryover record is never returned here.
    pub fn holidays_on(&self, d: NaiveDate) -> Result<Vec<HolidayRecord>, HolidayError> {
        Ok(self.compute_holidays(d.year())?
            .into_iter()
            .filter(|record| record.date() == d)
            .collect())
    }

    /// Holidays in `start..=end`, possibly spanning several years.
    ///
    /// Each year contributes only records dated inside it, matching
    /// [`holidays_on`](Self::holidays_on): a previous-year carryover never
    /// duplicates the eve it mirrors.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<HolidayRecord>, HolidayError> {
        let mut records = Vec::new();
        if end < start {
            return Ok(records);
        }
        for year in start.year()..=end.year() {
            records.extend(
                self.compute_holidays(year)?
                    .into_iter()
                    .filter(|record| record.date().year() == year && (start..=end).contains(&record.date()))
            );
        }
        records.sort_by_key(|record| record.date());
        Ok(records)
    }

    /// Dates of the official days off (category `holiday`) in `year`.
    pub fn days_off(&self, year: i32) -> Result<BTreeSet<NaiveDate>, HolidayError> {
        Ok(self.compute_holidays(year)?
            .iter()
            .filter(|record| record.is_day_off())
            .map(|record| record.date())
            .collect())
    }
}

/// `HolidayEngine::danish(NewYearsEveConvention::CurrentYear)?.compute_holidays(year)`.
pub fn compute_holidays(year: i32) -> Result<Vec<HolidayRecord>, HolidayError> {
    HolidayEngine::danish(NewYearsEveConvention::default())?.compute_holidays(year)
}
