use std::io::Write;

use chrono::{Datelike, NaiveDate};
use tempfile::NamedTempFile;

use danishholidays::configuration::Configuration;
use danishholidays::manager::managererror::ManagerError;
use danishholidays::time::calendar::danishcalendar::DanishCalendar;
use danishholidays::time::calendar::holidaycalendar::HolidayCalendar;
use danishholidays::{HolidayCategory, HolidayError, NewYearsEveConvention};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_configuration_file() {
    let file = write_config(r##"{
        "new_years_eve": "PreviousYearCarryover",
        "disabled_holidays": ["halloween"],
        "extra_holidays": [
            {
                "name": "firmafest",
                "title": "Firmafest",
                "category": "holiday",
                "color": "#000000",
                "valid_from": 2025,
                "holiday_type": "LastWeekday",
                "month": 8,
                "weekday": "Fri"
            }
        ]
    }"##);

    let configuration = Configuration::from_reader(file.path()).expect("load configuration");
    assert_eq!(configuration.new_years_eve(), NewYearsEveConvention::PreviousYearCarryover);

    let engine = configuration.holiday_engine().expect("engine");
    let records = engine.compute_holidays(2025).expect("2025");
    assert!(records.iter().all(|r| r.id() != "halloween-2025"));

    let firmafest = engine.holiday("firmafest", 2025).expect("2025").expect("firmafest");
    assert_eq!(firmafest.date(), NaiveDate::from_ymd_opt(2025, 8, 29).unwrap());
    assert_eq!(firmafest.category(), HolidayCategory::Holiday);
    assert_eq!(firmafest.color(), "#000000");
    assert!(engine.holiday("firmafest", 2024).expect("2024").is_none());

    // a configured day off is honoured by the business-day calendar
    let calendar = DanishCalendar::new(engine);
    assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 8, 29).unwrap()).unwrap());
    assert!(calendar.is_business_day(NaiveDate::from_ymd_opt(2024, 8, 30).unwrap()).unwrap());
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = write_config("{ not json");
    assert!(matches!(Configuration::from_reader(file.path()), Err(ManagerError::JsonParseError(_))));
}

#[test]
fn errors_render_readable_messages() {
    let file = write_config(r#"{
        "extra_holidays": [
            { "name": "x", "title": "X", "category": "special",
              "holiday_type": "FixedDate", "month": 2, "day": 30 }
        ]
    }"#);
    let err = Configuration::from_reader(file.path()).err().expect("invalid date");
    assert_eq!(err.to_string(), "invalid holiday rule: 02-30 is not a day of any year");
}

#[test]
fn extras_that_leave_the_year_are_rejected_at_load() {
    let extras = [
        r#"{ "holiday_type": "WeekdayBeforeDate", "month": 1, "day": 2, "weekday": "Sun", "weeks_before": 2 }"#,
        r#"{ "holiday_type": "EasterRelated", "shift_days": 320 }"#,
        r#"{ "holiday_type": "EasterRelated", "shift_days": 9000000000000000000 }"#,
        r#"{ "holiday_type": "FixedDate", "month": 6, "day": 1, "year_offset": 5 }"#,
        r#"{ "holiday_type": "FixedDate", "month": 6, "day": 1, "year_offset": 2147483647 }"#,
    ];
    for rule in extras {
        let rule = rule.trim_start_matches('{');
        let file = write_config(&format!(
            r#"{{ "extra_holidays": [ {{ "name": "x", "title": "X", "category": "special", {rule} ] }}"#
        ));
        let result = Configuration::from_reader(file.path());
        assert!(
            matches!(result, Err(ManagerError::HolidayError(HolidayError::InvalidRule(_)))),
            "accepted {rule}"
        );
    }
}

#[test]
fn configured_extras_stay_in_the_requested_year() {
    let file = write_config(r#"{
        "extra_holidays": [
            { "name": "a", "title": "A", "category": "special",
              "holiday_type": "WeekdayBeforeDate", "month": 1, "day": 7, "weekday": "Sun" },
            { "name": "b", "title": "B", "category": "special",
              "holiday_type": "EasterRelated", "shift_days": 250 },
            { "name": "c", "title": "C", "category": "special",
              "holiday_type": "EasterRelated", "shift_days": -80 }
        ]
    }"#);
    let engine = Configuration::from_reader(file.path())
        .expect("load configuration")
        .holiday_engine()
        .expect("engine");
    for year in [1583, 2024, 2025, 2038, 2285, 9999] {
        let records = engine.compute_holidays(year).expect("holidays");
        assert!(records.iter().all(|r| r.date().year() == year), "{year}");
    }
}
