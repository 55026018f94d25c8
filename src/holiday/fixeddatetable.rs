use crate::holiday::holidayrecord::HolidayCategory;
use crate::holiday::holidayrecord::HolidayCategory::{Birthday, Holiday, Observance, Special};

/// A holiday whose month and day never change.
pub struct FixedDateEntry {
    pub key: &'static str,
    pub month: u32,
    pub day: u32,
    pub title: &'static str,
    pub category: HolidayCategory,
    pub color: &'static str
}

const fn entry(key: &'static str,
               month: u32,
               day: u32,
               title: &'static str,
               category: HolidayCategory,
               color: &'static str) -> FixedDateEntry {
    FixedDateEntry { key, month, day, title, category, color }
}

// Grundlovsdag precedes Fars dag so the June 5 tie keeps this order.
pub const FIXED_DATE_TABLE: &[FixedDateEntry] = &[
    entry("nytaarsdag",               1,  1, "Nytårsdag",                          Holiday,    "#dc2626"),
    entry("helligtrekonger",          1,  6, "Helligtrekonger",                    Observance, "#0ea5e9"),
    entry("prins-vincent-josephine",  1,  8, "Prins Vincent og Prinsesse Josephines fødselsdag", Birthday, "#ec4899"),
    entry("dronning-mary",            2,  5, "Dronning Marys fødselsdag",          Birthday,   "#ec4899"),
    entry("valentinsdag",             2, 14, "Valentinsdag",                       Special,    "#e11d48"),
    entry("kvindernes-kampdag",       3,  8, "Kvindernes internationale kampdag",  Observance, "#0ea5e9"),
    entry("dronning-margrethe",       4, 16, "Dronning Margrethes fødselsdag",     Birthday,   "#ec4899"),
    entry("prinsesse-isabella",       4, 21, "Prinsesse Isabellas fødselsdag",     Birthday,   "#ec4899"),
    entry("arbejdernes-kampdag",      5,  1, "Arbejdernes internationale kampdag", Observance, "#0ea5e9"),
    entry("befrielsesdag",            5,  5, "Danmarks befrielse",                 Observance, "#0ea5e9"),
    entry("kong-frederik",            5, 26, "Kong Frederiks fødselsdag",          Birthday,   "#ec4899"),
    entry("grundlovsdag",             6,  5, "Grundlovsdag",                       Holiday,    "#dc2626"),
    entry("fars-dag",                 6,  5, "Fars dag",                           Special,    "#f59e0b"),
    entry("valdemarsdag",             6, 15, "Valdemarsdag",                       Observance, "#0ea5e9"),
    entry("sankthansaften",           6, 23, "Sankthansaften",                     Observance, "#f97316"),
    entry("kronprins-christian",     10, 15, "Kronprins Christians fødselsdag",    Birthday,   "#ec4899"),
    entry("halloween",               10, 31, "Halloween",                          Special,    "#ea580c"),
    entry("mortensaften",            11, 10, "Mortensaften",                       Observance, "#0ea5e9"),
    entry("luciadag",                12, 13, "Luciadag",                           Observance, "#0ea5e9"),
    entry("juleaften",               12, 24, "Juleaften",                          Holiday,    "#b91c1c"),
    entry("juledag",                 12, 25, "Juledag",                            Holiday,    "#dc2626"),
    entry("anden-juledag",           12, 26, "2. Juledag",                         Holiday,    "#dc2626"),
    entry("nytaarsaften",            12, 31, "Nytårsaften",                        Holiday,    "#dc2626"),
];
