use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;

use crate::holiday::holidayerror::HolidayError;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::lastweekdayholiday::LastWeekdayHoliday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::isoweekholiday::IsoWeekHoliday;
use crate::time::recurringholiday::weekdaybeforedateholiday::WeekdayBeforeDateHoliday;

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    shift_days: i64
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EasterRelatedHoliday::new(json_prop.shift_days)?))
}

#[derive(Deserialize)]
struct NthWeekdayHolidayJsonProp {
    month: u32,
    n: u8,
    weekday: Weekday,
}

fn nth_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: NthWeekdayHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(NthWeekdayHoliday::new(json_prop.month, json_prop.n, json_prop.weekday)?))
}

#[derive(Deserialize)]
struct LastWeekdayHolidayJsonProp {
    month: u32,
    weekday: Weekday,
}

fn last_weekday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: LastWeekdayHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(LastWeekdayHoliday::new(json_prop.month, json_prop.weekday)?))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32,
    #[serde(default)]
    year_offset: Option<serde_json::Value>
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    // configured holidays always resolve inside the requested year
    if json_prop.year_offset.is_some() {
        return Err(HolidayError::InvalidRule("year_offset cannot be configured".to_owned()).into());
    }
    Ok(Arc::new(FixedDateHoliday::new(json_prop.month, json_prop.day)?))
}

#[derive(Deserialize)]
struct IsoWeekHolidayJsonProp {
    week: u32,
    weekday: Weekday
}

fn iso_week_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: IsoWeekHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(IsoWeekHoliday::new(json_prop.week, json_prop.weekday)?))
}

#[derive(Deserialize)]
struct WeekdayBeforeDateHolidayJsonProp {
    month: u32,
    day: u32,
    weekday: Weekday,
    #[serde(default)]
    weeks_before: u32
}

fn weekday_before_date_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: WeekdayBeforeDateHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(WeekdayBeforeDateHoliday::new(
        json_prop.month,
        json_prop.day,
        json_prop.weekday,
        json_prop.weeks_before
    )?))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LastWeekday,
    IsoWeek,
    WeekdayBeforeDate
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

/// Builds a rule from a JSON object dispatched on its `holiday_type` field.
pub fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::EasterRelated     => easter_related_holiday_from_json(json),
        HolidayType::FixedDate         => fixed_date_holiday_from_json(json),
        HolidayType::LastWeekday       => last_weekday_from_json(json),
        HolidayType::NthWeekday        => nth_weekday_from_json(json),
        HolidayType::IsoWeek           => iso_week_holiday_from_json(json),
        HolidayType::WeekdayBeforeDate => weekday_before_date_from_json(json)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dispatches_on_holiday_type() {
        let fastelavn = get_recurring_holiday_from_json(json!({
            "holiday_type": "EasterRelated",
            "shift_days": -49
        })).unwrap();
        assert_eq!(fastelavn.get_holiday(2024).unwrap(), ymd(2024, 2, 11));

        let j_dag = get_recurring_holiday_from_json(json!({
            "holiday_type": "NthWeekday",
            "month": 11,
            "n": 1,
            "weekday": "Fri"
        })).unwrap();
        assert_eq!(j_dag.get_holiday(2024).unwrap(), ymd(2024, 11, 1));

        let sommertid = get_recurring_holiday_from_json(json!({
            "holiday_type": "LastWeekday",
            "month": 3,
            "weekday": "Sunday"
        })).unwrap();
        assert_eq!(sommertid.get_holiday(2024).unwrap(), ymd(2024, 3, 31));

        let efteraarsferie = get_recurring_holiday_from_json(json!({
            "holiday_type": "IsoWeek",
            "week": 42,
            "weekday": "Mon"
        })).unwrap();
        assert_eq!(efteraarsferie.get_holiday(2024).unwrap(), ymd(2024, 10, 14));

        let advent = get_recurring_holiday_from_json(json!({
            "holiday_type": "WeekdayBeforeDate",
            "month": 12,
            "day": 24,
            "weekday": "Sun",
            "weeks_before": 3
        })).unwrap();
        assert_eq!(advent.get_holiday(2024).unwrap(), ymd(2024, 12, 1));

        let valentinsdag = get_recurring_holiday_from_json(json!({
            "holiday_type": "FixedDate",
            "month": 2,
            "day": 14
        })).unwrap();
        assert_eq!(valentinsdag.get_holiday(2024).unwrap(), ymd(2024, 2, 14));
    }

    #[test]
    fn rules_leaving_the_year_are_rejected() {
        let configs = [
            json!({ "holiday_type": "EasterRelated", "shift_days": 9_000_000_000_000_000_000i64 }),
            json!({ "holiday_type": "EasterRelated", "shift_days": -100 }),
            json!({ "holiday_type": "EasterRelated", "shift_days": 400 }),
            json!({ "holiday_type": "FixedDate", "month": 12, "day": 31, "year_offset": -1 }),
            json!({ "holiday_type": "FixedDate", "month": 6, "day": 1, "year_offset": i32::MAX }),
            json!({ "holiday_type": "WeekdayBeforeDate", "month": 1, "day": 3, "weekday": "Sun" }),
        ];
        for config in configs {
            let result = get_recurring_holiday_from_json(config.clone());
            assert!(
                matches!(result, Err(ManagerError::HolidayError(HolidayError::InvalidRule(_)))),
                "accepted {config}"
            );
        }
    }

    #[test]
    fn invalid_rule_surfaces_holiday_error() {
        let result = get_recurring_holiday_from_json(json!({
            "holiday_type": "FixedDate",
            "month": 2,
            "day": 30
        }));
        assert!(matches!(result, Err(ManagerError::HolidayError(HolidayError::InvalidRule(_)))));
    }

    #[test]
    fn unknown_type_is_a_parse_error() {
        let result = get_recurring_holiday_from_json(json!({ "holiday_type": "Lunar" }));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
