use serde::Deserialize;

use crate::holiday::holidaydefinition::HolidayDefinition;
use crate::holiday::holidayrecord::HolidayCategory;
use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::recurringholiday::recurringholidayloader::get_recurring_holiday_from_json;

#[derive(Deserialize)]
struct HolidayDefinitionJsonProp {
    name: String,
    title: String,
    category: HolidayCategory,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    valid_from: Option<i32>,
    #[serde(default)]
    valid_until: Option<i32>
}

/// Builds a definition from `{"name", "title", "category", ...}` plus the
/// fields of one recurring-holiday rule tagged by `holiday_type`.
pub fn get_holiday_definition_from_json(json_value: serde_json::Value) -> Result<HolidayDefinition, ManagerError> {
    let prop: HolidayDefinitionJsonProp = parse_json_value(json_value.clone())?;
    let rule = get_recurring_holiday_from_json(json_value)?;

    let definition = HolidayDefinition::new(prop.name, prop.title, prop.category, rule)
        .with_validity(prop.valid_from, prop.valid_until);

    Ok(match prop.color {
        Some(color) => definition.with_color(color),
        None => definition
    })
}

pub struct HolidayDefinitionManager;

impl HolidayDefinitionManager {
    pub fn new() -> Manager<HolidayDefinition> {
        Manager::new(get_holiday_definition_from_json)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::manager::manager::IManager;

    #[test]
    fn loads_definition_with_rule() {
        let manager = HolidayDefinitionManager::new();
        manager.insert_obj_from_json(json!({
            "name": "skolestart",
            "title": "Skolestart",
            "category": "special",
            "valid_from": 2020,
            "holiday_type": "NthWeekday",
            "month": 8,
            "n": 2,
            "weekday": "Mon"
        })).unwrap();

        let definition = manager.get("skolestart").unwrap();
        assert_eq!(definition.category(), HolidayCategory::Special);
        assert_eq!(definition.color(), HolidayCategory::Special.default_color());
        assert!(!definition.is_active(2019));

        let record = definition.record(2024).unwrap();
        assert_eq!(record.id(), "skolestart-2024");
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 8, 12).unwrap());
    }

    #[test]
    fn custom_color() {
        let definition = get_holiday_definition_from_json(json!({
            "name": "bryllupsdag",
            "title": "Bryllupsdag",
            "category": "observance",
            "color": "#123456",
            "holiday_type": "FixedDate",
            "month": 9,
            "day": 14
        })).unwrap();
        assert_eq!(definition.color(), "#123456");
    }

    #[test]
    fn missing_title_is_a_parse_error() {
        let result = get_holiday_definition_from_json(json!({
            "name": "x",
            "category": "special",
            "holiday_type": "FixedDate",
            "month": 1,
            "day": 2
        }));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
