use chrono::Weekday;
use thiserror::Error;

use crate::time::utility::{MAX_YEAR, MIN_YEAR};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayError {
    #[error("year {0} is outside the supported range {min}..={max}", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    #[error("{year}-{month:02} has no occurrence #{n} of {weekday}")]
    OutOfRange {
        year: i32,
        month: u32,
        weekday: Weekday,
        n: u8
    },

    #[error("month {0} is not in 1..=12")]
    InvalidMonth(u32),

    #[error("{month:02}-{day:02} is not a valid date in {year}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32
    },

    #[error("invalid holiday rule: {0}")]
    InvalidRule(String),

    #[error("ISO week {week} does not exist in {year}")]
    InvalidIsoWeek {
        year: i32,
        week: u32
    }
}
