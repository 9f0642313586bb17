//! Calendar date engine for a month-view calendar.
//!
//! Two independent pieces that a UI composes per cell:
//!
//! - the month grid builder ([`get_month_grid`], [`add_months`],
//!   [`month_title`]), pure Gregorian arithmetic over [`SolarDate`];
//! - the lunisolar converter ([`solar_to_lunar`], [`short_label`]), backed
//!   by a compiled table of Korean lunar years.
//!
//! ```
//! use lunisolar_grid::{get_month_grid, short_label, ymd};
//!
//! let cells = get_month_grid(2024, 1);
//! assert_eq!(cells.len(), 35);
//! assert_eq!(ymd(&cells[0]), "2024-01-28");
//!
//! let seollal = "2024-02-10".parse().unwrap();
//! assert_eq!(short_label(seollal), "1.1");
//! ```

mod consts;
mod grid;
mod lunar;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use grid::{
    DayCell, GridOptions, WeekStart, YearMonth, add_months, get_month_grid, get_month_grid_with,
    grid_range, month_title,
};
pub use lunar::{
    LunarDate, LunarError, LunarMonth, LunarYearRecord, TABLE_VERSION, lunar_short_from_ymd,
    lunar_to_solar, short_label, solar_to_lunar, supported_range, year_record, year_records,
};
pub use range::{DateRange, RangeError};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// Julian day numbers of 0001-01-01 and 9999-12-31.
const FIRST_DAY_NUMBER: i64 = 1_721_426;
const LAST_DAY_NUMBER: i64 = 5_373_484;

/// A Gregorian calendar date with no time-of-day or zone attached.
///
/// Every value names a real day: the components are validated newtypes and
/// the only public constructors check the day against the month length.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct SolarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Anything that sits on a single solar day.
///
/// Lets [`ymd`] and [`is_same_ymd`] take grid cells and bare dates alike.
pub trait AsSolarDate {
    fn solar_date(&self) -> SolarDate;
}

impl AsSolarDate for SolarDate {
    fn solar_date(&self) -> SolarDate {
        *self
    }
}

impl SolarDate {
    /// Creates a date from its numeric components.
    ///
    /// # Errors
    /// Returns the `ParseError` variant of the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Components as `(year, month, day)`.
    pub const fn parts(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Julian day number (days since noon, 1 January 4713 BC, Julian).
    pub fn day_number(&self) -> i64 {
        civil_to_day_number(self.year(), self.month(), self.day())
    }

    /// Inverse of [`SolarDate::day_number`].
    ///
    /// Returns `None` when the day falls outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_day_number(jdn: i64) -> Option<Self> {
        if !(FIRST_DAY_NUMBER..=LAST_DAY_NUMBER).contains(&jdn) {
            return None;
        }
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        Self::new(
            u16::try_from(year).ok()?,
            u8::try_from(month).ok()?,
            u8::try_from(day).ok()?,
        )
        .ok()
    }

    /// Shifts by `days` (negative moves backwards).
    ///
    /// Returns `None` if the result leaves `MIN_YEAR..=MAX_YEAR`.
    pub fn add_days(self, days: i64) -> Option<Self> {
        Self::from_day_number(self.day_number().checked_add(days)?)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number())
    }

    pub const fn first_of_year(year: Year) -> Self {
        Self {
            year,
            month: Month::JANUARY,
            day: Day::FIRST,
        }
    }

    pub const fn last_of_year(year: Year) -> Self {
        Self {
            year,
            month: Month::DECEMBER,
            day: Day::MAX,
        }
    }

    pub const fn first_of_month(&self) -> Self {
        Self {
            day: Day::FIRST,
            ..*self
        }
    }

    pub fn last_of_month(&self) -> Self {
        let last = days_in_month(self.year(), self.month());
        Day::new(last, self.year(), self.month()).map_or(*self, |day| Self { day, ..*self })
    }

    /// Canonical `YYYY-MM-DD` key.
    pub fn ymd(&self) -> String {
        self.to_string()
    }
}

/// Julian day number of a Gregorian `(year, month, day)`. Does not validate.
pub(crate) const fn civil_to_day_number(year: u16, month: u8, day: u8) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

/// Canonical `YYYY-MM-DD` serialization used as the key between grid cells
/// and records fetched by date range.
pub fn ymd(date: &impl AsSolarDate) -> String {
    date.solar_date().to_string()
}

/// Parses a `YYYY-MM-DD` key produced by [`ymd`].
///
/// # Errors
/// Returns `ParseError` for anything other than a zero-padded real date.
pub fn parse_ymd(s: &str) -> Result<SolarDate, ParseError> {
    s.parse()
}

/// True iff both sit on the same calendar day.
pub fn is_same_ymd(a: &impl AsSolarDate, b: &impl AsSolarDate) -> bool {
    a.solar_date() == b.solar_date()
}

impl FromStr for SolarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let widths_ok = matches!(parts.as_slice(), [y, m, d] if y.len() == 4 && m.len() == 2 && d.len() == 2);
        if !widths_ok || !parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())) {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let year = Self::parse_component::<u16>(parts[0])?;
        let month = Self::parse_component::<u8>(parts[1])?;
        let day = Self::parse_component::<u8>(parts[2])?;
        Self::new(year, month, day)
    }
}

impl SolarDate {
    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(u16, u8, u8)> for SolarDate {
    type Error = ParseError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl serde::Serialize for SolarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for SolarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_parse_iso_date() {
        let d = "1991-08-15".parse::<SolarDate>().unwrap();
        assert_eq!(d.parts(), (1991, 8, 15));
        assert_eq!(d.year_typed(), Year::new(1991).unwrap());
        assert_eq!(d.month_typed(), Month::new(8).unwrap());
        assert_eq!(d.day_typed().get(), 15);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_ymd("  2024-02-29\n").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase { input: "2024-2-10", description: "unpadded month" },
            TestCase { input: "2024-02-1", description: "unpadded day" },
            TestCase { input: "24-02-10", description: "two-digit year" },
            TestCase { input: "2024/02/10", description: "wrong separator" },
            TestCase { input: "2024-02", description: "missing day" },
            TestCase { input: "2024-02-10-01", description: "extra component" },
            TestCase { input: "2024-+2-10", description: "sign in month" },
            TestCase { input: "abcd-ef-gh", description: "not numeric" },
        ];

        for case in &cases {
            assert!(
                matches!(parse_ymd(case.input), Err(ParseError::InvalidFormat(_))),
                "expected InvalidFormat for {} ({})",
                case.input,
                case.description
            );
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert_eq!(parse_ymd(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_ymd("0000-01-01"), Err(ParseError::InvalidYear(0)));
        assert_eq!(parse_ymd("2024-13-01"), Err(ParseError::InvalidMonth(13)));
        assert_eq!(parse_ymd("2024-00-01"), Err(ParseError::InvalidMonth(0)));
        assert_eq!(
            parse_ymd("2023-02-29"),
            Err(ParseError::InvalidDay {
                year:  2023,
                month: 2,
                day:   29,
            })
        );
        assert!(parse_ymd("2024-04-31").is_err());
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(date(2024, 2, 1).to_string(), "2024-02-01");
        assert_eq!(date(987, 12, 31).to_string(), "0987-12-31");
        assert_eq!(ymd(&date(2024, 12, 9)), "2024-12-09");
        assert_eq!(date(2024, 12, 9).ymd(), "2024-12-09");
    }

    #[test]
    fn test_ymd_round_trip() {
        for d in [date(1, 1, 1), date(2000, 2, 29), date(2024, 11, 30), date(9999, 12, 31)] {
            assert_eq!(parse_ymd(&ymd(&d)).unwrap(), d);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ParseError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            ParseError::InvalidDay { year: 2023, month: 2, day: 29 }.to_string(),
            "Invalid day 29 for month 2023-02"
        );
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2024, 2, 1) < date(2024, 2, 2));
    }

    #[test]
    fn test_day_number_reference_points() {
        assert_eq!(date(2000, 1, 1).day_number(), 2_451_545);
        assert_eq!(date(1970, 1, 1).day_number(), 2_440_588);
        assert_eq!(SolarDate::from_day_number(2_459_466), Some(date(2021, 9, 8)));
    }

    #[test]
    fn test_from_day_number_limits() {
        let first = date(1, 1, 1);
        let last = date(9999, 12, 31);
        assert_eq!(SolarDate::from_day_number(first.day_number()), Some(first));
        assert_eq!(SolarDate::from_day_number(last.day_number()), Some(last));
        assert_eq!(SolarDate::from_day_number(first.day_number() - 1), None);
        assert_eq!(SolarDate::from_day_number(last.day_number() + 1), None);
    }

    #[test]
    fn test_add_days_crosses_boundaries() {
        assert_eq!(date(2024, 2, 28).add_days(1), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 2, 28).add_days(1), Some(date(2023, 3, 1)));
        assert_eq!(date(2024, 12, 31).add_days(1), Some(date(2025, 1, 1)));
        assert_eq!(date(2025, 1, 1).add_days(-1), Some(date(2024, 12, 31)));
        assert_eq!(date(2024, 1, 15).add_days(30), Some(date(2024, 2, 14)));
        assert_eq!(date(9999, 12, 31).add_days(1), None);
        assert_eq!(date(2024, 1, 1).add_days(i64::MAX), None);
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date(2024, 1, 1).days_until(&date(2025, 1, 1)), 366);
        assert_eq!(date(2025, 1, 1).days_until(&date(2024, 1, 1)), -366);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 2, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2024, 2, 10).weekday(), Weekday::Saturday);
        assert_eq!(date(2000, 1, 2).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_month_edges() {
        assert_eq!(date(2024, 2, 17).first_of_month(), date(2024, 2, 1));
        assert_eq!(date(2024, 2, 17).last_of_month(), date(2024, 2, 29));
        assert_eq!(date(2023, 2, 17).last_of_month(), date(2023, 2, 28));
        assert_eq!(date(2023, 12, 1).last_of_month(), date(2023, 12, 31));
    }

    #[test]
    fn test_is_same_ymd() {
        assert!(is_same_ymd(&date(2024, 2, 10), &date(2024, 2, 10)));
        assert!(!is_same_ymd(&date(2024, 2, 10), &date(2024, 3, 10)));
        assert!(!is_same_ymd(&date(2024, 2, 10), &date(2023, 2, 10)));
    }

    #[test]
    fn test_try_from_tuple() {
        assert_eq!(SolarDate::try_from((2024, 2, 10)).unwrap(), date(2024, 2, 10));
        assert!(SolarDate::try_from((2024, 2, 30)).is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2024, 2, 10);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2024-02-10""#);
        assert_eq!(serde_json::from_str::<SolarDate>(&json).unwrap(), d);
        assert!(serde_json::from_str::<SolarDate>(r#""2024-02-30""#).is_err());
    }
}
