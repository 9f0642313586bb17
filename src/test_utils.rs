//! Shorthand constructors for unit tests.

use crate::{DateRange, LunarDate, SolarDate};

pub fn date(year: u16, month: u8, day: u8) -> SolarDate {
    SolarDate::new(year, month, day).expect("valid solar date in test")
}

pub fn range(s: &str) -> DateRange {
    s.parse().expect("valid date range in test")
}

pub fn lunar(year: u16, month: u8, is_leap_month: bool, day: u8) -> LunarDate {
    LunarDate::new(year, month, is_leap_month, day).expect("valid lunar date in test")
}
