use std::sync::Arc;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::holiday::fixeddatetable::FIXED_DATE_TABLE;
use crate::holiday::holidaydefinition::HolidayDefinition;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayrecord::HolidayCategory;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::isoweekholiday::IsoWeekHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::weekdaybeforedateholiday::WeekdayBeforeDateHoliday;

/// Last year Store Bededag was an official day off.
pub const STORE_BEDEDAG_LAST_HOLIDAY_YEAR: i32 = 2023;

/// Key of the previous-year New Year's Eve record.
pub const NEW_YEARS_EVE_CARRYOVER_KEY: &str = "nytaar";

/// How New Year's Eve shows up in a year's holidays.
///
/// `CurrentYear` lists only "Nytårsaften" on December 31 of the year itself.
/// `PreviousYearCarryover` additionally lists "Nytår" on December 31 of the
/// *previous* year, so the eve leading into the year is visible on that
/// year's calendar. It is the only record allowed outside the requested year.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum NewYearsEveConvention {
    #[default]
    CurrentYear,
    PreviousYearCarryover
}

const EASTER_RELATED: &[(&str, &str, i64, HolidayCategory)] = &[
    ("fastelavn",             "Fastelavn",             -49, HolidayCategory::Special),
    ("palmesoendag",          "Palmesøndag",            -7, HolidayCategory::Holiday),
    ("skaertorsdag",          "Skærtorsdag",            -3, HolidayCategory::Holiday),
    ("langfredag",            "Langfredag",             -2, HolidayCategory::Holiday),
    ("paaskedag",             "Påskedag",                0, HolidayCategory::Holiday),
    ("anden-paaskedag",       "2. Påskedag",             1, HolidayCategory::Holiday),
    ("kristi-himmelfartsdag", "Kristi Himmelfartsdag",  39, HolidayCategory::Holiday),
    ("pinsedag",              "Pinsedag",               49, HolidayCategory::Holiday),
    ("anden-pinsedag",        "2. Pinsedag",            50, HolidayCategory::Holiday),
];

const STORE_BEDEDAG_SHIFT: i64 = 26;

fn fixed_date_definitions() -> Result<Vec<HolidayDefinition>, HolidayError> {
    FIXED_DATE_TABLE
        .iter()
        .map(|entry| -> Result<HolidayDefinition, HolidayError> {
            let rule = FixedDateHoliday::new(entry.month, entry.day)?;
            Ok(HolidayDefinition::new(entry.key, entry.title, entry.category, Arc::new(rule))
                .with_color(entry.color))
        })
        .collect()
}

fn easter_related_definitions() -> Result<Vec<HolidayDefinition>, HolidayError> {
    let mut definitions = EASTER_RELATED
        .iter()
        .map(|&(key, title, shift_days, category)| -> Result<HolidayDefinition, HolidayError> {
            let rule = EasterRelatedHoliday::new(shift_days)?;
            Ok(HolidayDefinition::new(key, title, category, Arc::new(rule)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Abolished as a day off from 2024 but still marked in the calendar.
    let store_bededag = Arc::new(EasterRelatedHoliday::new(STORE_BEDEDAG_SHIFT)?);
    definitions.push(
        HolidayDefinition::new("store-bededag", "Store Bededag", HolidayCategory::Holiday, store_bededag.clone())
            .with_validity(None, Some(STORE_BEDEDAG_LAST_HOLIDAY_YEAR))
    );
    definitions.push(
        HolidayDefinition::new("store-bededag", "Store Bededag", HolidayCategory::Observance, store_bededag)
            .with_validity(Some(STORE_BEDEDAG_LAST_HOLIDAY_YEAR + 1), None)
    );
    Ok(definitions)
}

fn weekday_rule_definitions() -> Result<Vec<HolidayDefinition>, HolidayError> {
    let mut definitions = vec![
        HolidayDefinition::new("sommertid", "Sommertid starter", HolidayCategory::Special,
                               Arc::new(LastWeekdayHoliday::new(3, Weekday::Sun)?)),
        HolidayDefinition::new("mors-dag", "Mors dag", HolidayCategory::Special,
                               Arc::new(NthWeekdayHoliday::new(5, 2, Weekday::Sun)?)),
        HolidayDefinition::new("vintertid", "Vintertid starter", HolidayCategory::Special,
                               Arc::new(LastWeekdayHoliday::new(10, Weekday::Sun)?)),
        HolidayDefinition::new("j-dag", "J-dag", HolidayCategory::Special,
                               Arc::new(NthWeekdayHoliday::new(11, 1, Weekday::Fri)?)),
        HolidayDefinition::new("alle-helgens-dag", "Alle helgens dag", HolidayCategory::Observance,
                               Arc::new(NthWeekdayHoliday::new(11, 1, Weekday::Sun)?)),
        HolidayDefinition::new("vinterferie", "Vinterferie", HolidayCategory::Vacation,
                               Arc::new(IsoWeekHoliday::new(7, Weekday::Mon)?)),
        HolidayDefinition::new("efteraarsferie", "Efterårsferie", HolidayCategory::Vacation,
                               Arc::new(IsoWeekHoliday::new(42, Weekday::Mon)?)),
    ];

    for (ordinal, weeks_before) in [(1, 3), (2, 2), (3, 1), (4, 0)] {
        let rule = WeekdayBeforeDateHoliday::new(12, 24, Weekday::Sun, weeks_before)?;
        definitions.push(
            HolidayDefinition::new(
                format!("advent-{ordinal}"),
                format!("{ordinal}. søndag i advent"),
                HolidayCategory::Observance,
                Arc::new(rule)
            )
            .with_color("#7c3aed")
        );
    }
    Ok(definitions)
}

/// The built-in Danish holidays and special days.
///
/// Order matters only for ties on the same date: fixed-date entries first,
/// then Easter-relative holidays, then weekday rules.
pub fn danish_holiday_definitions(new_years_eve: NewYearsEveConvention) -> Result<Vec<HolidayDefinition>, HolidayError> {
    let mut definitions = Vec::with_capacity(FIXED_DATE_TABLE.len() + EASTER_RELATED.len() + 16);

    if new_years_eve == NewYearsEveConvention::PreviousYearCarryover {
        let carryover = FixedDateHoliday::with_year_offset(12, 31, -1)?;
        definitions.push(HolidayDefinition::new(
            NEW_YEARS_EVE_CARRYOVER_KEY,
            "Nytår",
            HolidayCategory::Special,
            Arc::new(carryover)
        ));
    }

    definitions.extend(fixed_date_definitions()?);
    definitions.extend(easter_related_definitions()?);
    definitions.extend(weekday_rule_definitions()?);
    Ok(definitions)
}
