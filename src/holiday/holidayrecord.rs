use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayCategory {
    /// Official non-working day (helligdag).
    Holiday,
    /// Cultural or commercial day.
    Special,
    /// Mærkedag: recognised but not a day off.
    Observance,
    /// Royal family birthday.
    Birthday,
    /// School vacation.
    Vacation
}

impl HolidayCategory {
    pub const ALL: [HolidayCategory; 5] = [
        HolidayCategory::Holiday,
        HolidayCategory::Special,
        HolidayCategory::Observance,
        HolidayCategory::Birthday,
        HolidayCategory::Vacation
    ];

    pub fn default_color(&self) -> &'static str {
        match self {
            HolidayCategory::Holiday    => "#dc2626",
            HolidayCategory::Special    => "#f59e0b",
            HolidayCategory::Observance => "#0ea5e9",
            HolidayCategory::Birthday   => "#ec4899",
            HolidayCategory::Vacation   => "#16a34a"
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HolidayCategory::Holiday    => "helligdag",
            HolidayCategory::Special    => "særlig dag",
            HolidayCategory::Observance => "mærkedag",
            HolidayCategory::Birthday   => "fødselsdag",
            HolidayCategory::Vacation   => "ferie"
        }
    }
}

impl fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One holiday occurrence in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    id: String,
    title: String,
    date: NaiveDate,
    category: HolidayCategory,
    color: String
}

impl HolidayRecord {
    pub fn new(id: String, title: String, date: NaiveDate, category: HolidayCategory, color: String) -> HolidayRecord {
        HolidayRecord { id, title, date, category, color }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    #[inline]
    pub fn is_day_off(&self) -> bool {
        self.category == HolidayCategory::Holiday
    }
}
