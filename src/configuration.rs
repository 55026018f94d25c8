use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::holiday::danishholidays::{NewYearsEveConvention, danish_holiday_definitions};
use crate::holiday::holidaydefinition::HolidayDefinition;
use crate::holiday::holidaydefinitionmanager::HolidayDefinitionManager;
use crate::holiday::holidayengine::HolidayEngine;
use crate::holiday::holidayrecord::HolidayCategory;
use crate::manager::manager::{IManager, Manager};
use crate::manager::managererror::{ManagerError, parse_json_value};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    new_years_eve: NewYearsEveConvention,
    #[serde(default)]
    categories: Option<HashSet<HolidayCategory>>,
    #[serde(default)]
    disabled_holidays: Vec<String>,
    #[serde(default)]
    extra_holidays: Vec<serde_json::Value>
}

/// Engine settings read from JSON:
///
/// ```json
/// {
///   "new_years_eve": "PreviousYearCarryover",
///   "categories": ["holiday", "special"],
///   "disabled_holidays": ["halloween"],
///   "extra_holidays": [
///     { "name": "skolestart", "title": "Skolestart", "category": "special",
///       "holiday_type": "NthWeekday", "month": 8, "n": 2, "weekday": "Mon" }
///   ]
/// }
/// ```
///
/// Every field is optional. An extra holiday whose `name` equals a built-in
/// key replaces the built-in definition.
pub struct Configuration {
    new_years_eve: NewYearsEveConvention,
    categories: Option<HashSet<HolidayCategory>>,
    disabled_holidays: HashSet<String>,
    extra_holiday_manager: Manager<HolidayDefinition>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            new_years_eve: NewYearsEveConvention::default(),
            categories: None,
            disabled_holidays: HashSet::new(),
            extra_holiday_manager: HolidayDefinitionManager::new()
        }
    }

    pub fn new_years_eve(&self) -> NewYearsEveConvention {
        self.new_years_eve
    }

    pub fn categories(&self) -> Option<&HashSet<HolidayCategory>> {
        self.categories.as_ref()
    }

    pub fn disabled_holidays(&self) -> &HashSet<String> {
        &self.disabled_holidays
    }

    pub fn extra_holiday_manager(&self) -> &Manager<HolidayDefinition> {
        &self.extra_holiday_manager
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json_value)?;
        let configuration = Configuration {
            new_years_eve: json_prop.new_years_eve,
            categories: json_prop.categories,
            disabled_holidays: json_prop.disabled_holidays.into_iter().collect(),
            extra_holiday_manager: HolidayDefinitionManager::new()
        };
        configuration.extra_holiday_manager.insert_obj_from_json_vec(&json_prop.extra_holidays)?;
        debug!(
            new_years_eve = ?configuration.new_years_eve,
            disabled = configuration.disabled_holidays.len(),
            extra = configuration.extra_holiday_manager.len(),
            "parsed configuration"
        );
        Ok(configuration)
    }

    #[tracing::instrument(skip_all, fields(path = %file_path.as_ref().display()))]
    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        info!("loading holiday configuration");
        Configuration::from_json_value(json_value)
    }

    /// Built-in definitions, minus disabled keys, with extra holidays
    /// replacing or appended to them.
    pub fn holiday_definitions(&self) -> Result<Vec<HolidayDefinition>, ManagerError> {
        let extras = self.extra_holiday_manager.values();
        let overridden: HashSet<&str> = extras.iter().map(|d| d.key()).collect();

        let mut definitions: Vec<HolidayDefinition> = danish_holiday_definitions(self.new_years_eve)?
            .into_iter()
            .filter(|d| !overridden.contains(d.key()))
            .collect();
        definitions.extend(extras.iter().cloned());
        definitions.retain(|d| !self.disabled_holidays.contains(d.key()));
        Ok(definitions)
    }

    pub fn holiday_engine(&self) -> Result<HolidayEngine, ManagerError> {
        Ok(HolidayEngine::new(self.holiday_definitions()?)
            .with_categories(self.categories.clone()))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
