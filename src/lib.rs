pub mod configuration;

pub mod holiday {
    pub mod holidayerror;
    pub mod holidayrecord;
    pub mod holidaydefinition;
    pub mod holidaydefinitionmanager;
    pub mod fixeddatetable;
    pub mod danishholidays;
    pub mod holidayengine;
    pub mod holidayyearcache;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod easter;
    pub mod weekdayresolver;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
        pub mod isoweekholiday;
        pub mod weekdaybeforedateholiday;
        pub mod recurringholidayloader;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod danishcalendar;
    }
}

pub use holiday::danishholidays::NewYearsEveConvention;
pub use holiday::holidayengine::{HolidayEngine, compute_holidays};
pub use holiday::holidayerror::HolidayError;
pub use holiday::holidayrecord::{HolidayCategory, HolidayRecord};
pub use time::easter::compute_easter;
pub use time::weekdayresolver::{first_weekday_of_month, last_weekday_of_month, nth_weekday_of_month};
