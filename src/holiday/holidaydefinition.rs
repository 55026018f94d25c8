use std::sync::Arc;

use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayrecord::{HolidayCategory, HolidayRecord};
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

/// A named holiday rule together with its display metadata.
///
/// `key` is the year-independent part of the record id; the record for a
/// given year gets the id `"{key}-{year}"`. Two definitions may share a key
/// as long as their validity windows do not overlap.
#[derive(Clone)]
pub struct HolidayDefinition {
    key: String,
    title: String,
    category: HolidayCategory,
    color: String,
    rule: Arc<dyn RecurringHoliday>,
    valid_from: Option<i32>,
    valid_until: Option<i32>
}

impl HolidayDefinition {
    pub fn new(key: impl Into<String>,
               title: impl Into<String>,
               category: HolidayCategory,
               rule: Arc<dyn RecurringHoliday>) -> HolidayDefinition {
        HolidayDefinition {
            key: key.into(),
            title: title.into(),
            category,
            color: category.default_color().to_owned(),
            rule,
            valid_from: None,
            valid_until: None
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> HolidayDefinition {
        self.color = color.into();
        self
    }

    /// Restricts the definition to `valid_from..=valid_until` (either end open).
    pub fn with_validity(mut self, valid_from: Option<i32>, valid_until: Option<i32>) -> HolidayDefinition {
        self.valid_from = valid_from;
        self.valid_until = valid_until;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn rule(&self) -> &Arc<dyn RecurringHoliday> {
        &self.rule
    }

    pub fn valid_from(&self) -> Option<i32> {
        self.valid_from
    }

    pub fn valid_until(&self) -> Option<i32> {
        self.valid_until
    }

    pub fn is_active(&self, year: i32) -> bool {
        self.valid_from.is_none_or(|from| year >= from)
            && self.valid_until.is_none_or(|until| year <= until)
    }

    pub fn id_for(&self, year: i32) -> String {
        format!("{}-{}", self.key, year)
    }

    pub fn record(&self, year: i32) -> Result<HolidayRecord, HolidayError> {
        let date = self.rule.get_holiday(year)?;
        Ok(HolidayRecord::new(
            self.id_for(year),
            self.title.clone(),
            date,
            self.category,
            self.color.clone()
        ))
    }
}
