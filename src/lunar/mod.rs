//! Korean lunisolar calendar (음력) lookups.
//!
//! Conversion is a table walk: find the lunar year whose new-year day is the
//! latest one not after the query, then step through that year's months. The
//! table lives in [`table`] and covers lunar years 1900 to 2100, which spans
//! every day of solar years [`LUNAR_MIN_YEAR`]..=[`LUNAR_MAX_YEAR`].

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    DAY_SUFFIX, DateRange, LEAP_MONTH_MARKER, LUNAR_MAX_YEAR, LUNAR_MIN_YEAR, LUNAR_PLACEHOLDER,
    MONTH_SUFFIX, SolarDate, YEAR_SUFFIX, Year, civil_to_day_number, parse_ymd,
};

mod table;

pub use table::TABLE_VERSION;
use table::{END_NEW_YEAR, LUNAR_YEARS};

/// Errors from lunar conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LunarError {
    /// The date (or lunar year) is not covered by the table.
    #[error("year {year} is outside the supported lunar range {}-{}", LUNAR_MIN_YEAR, LUNAR_MAX_YEAR)]
    OutOfRange { year: u16 },

    /// The lunar year has no such month, typically a leap month that
    /// was not inserted that year.
    #[error("lunar year {year} has no {}month {month}", leap_prefix(.is_leap_month))]
    NoSuchMonth {
        year:          u16,
        month:         u8,
        is_leap_month: bool,
    },

    /// The day is past the end of a 29 or 30 day month.
    #[error("lunar {}month {year}-{month:02} has {max} days, got day {day}", leap_prefix(.is_leap_month))]
    InvalidDay {
        year:          u16,
        month:         u8,
        is_leap_month: bool,
        day:           u8,
        max:           u8,
    },
}

const fn leap_prefix(is_leap_month: &bool) -> &'static str {
    if *is_leap_month { "leap " } else { "" }
}

/// Metadata for one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarYearRecord {
    year:       u16,
    new_year:   (u16, u8, u8),
    leap_month: Option<u8>,
    month_days: &'static [u8],
}

/// One month of a lunar year as laid out in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarMonth {
    month:         u8,
    is_leap_month: bool,
    days:          u8,
}

impl LunarMonth {
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// 29 or 30.
    pub const fn days(&self) -> u8 {
        self.days
    }
}

impl LunarYearRecord {
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Solar date of lunar 1/1 (설날).
    pub fn new_year(&self) -> Option<SolarDate> {
        SolarDate::try_from(self.new_year).ok()
    }

    /// Number of the month that is repeated as a leap month, if any.
    /// The leap month directly follows the regular month of that number.
    pub const fn leap_month(&self) -> Option<u8> {
        self.leap_month
    }

    /// Month lengths in calendar order, the leap month included.
    pub const fn month_days(&self) -> &'static [u8] {
        self.month_days
    }

    pub const fn month_count(&self) -> usize {
        self.month_days.len()
    }

    pub fn total_days(&self) -> u32 {
        self.month_days.iter().map(|&d| u32::from(d)).sum()
    }

    /// Months in calendar order with their numbers and leap flags resolved.
    pub fn months(&self) -> impl Iterator<Item = LunarMonth> + use<> {
        let leap = self.leap_month;
        (1u8..).zip(self.month_days.iter().copied()).map(move |(position, days)| {
            let (month, is_leap_month) = match leap {
                Some(n) if position == n + 1 => (n, true),
                Some(n) if position > n + 1 => (position - 1, false),
                _ => (position, false),
            };
            LunarMonth {
                month,
                is_leap_month,
                days,
            }
        })
    }

    pub fn month(&self, month: u8, is_leap_month: bool) -> Option<LunarMonth> {
        self.months()
            .find(|m| m.month == month && m.is_leap_month == is_leap_month)
    }

    fn new_year_day_number(&self) -> i64 {
        let (y, m, d) = self.new_year;
        civil_to_day_number(y, m, d)
    }
}

/// New-year day numbers of every record, plus the day after the last
/// record ends.
struct CompiledTable {
    starts: Vec<i64>,
    end:    i64,
}

static COMPILED: LazyLock<CompiledTable> = LazyLock::new(|| {
    let starts: Vec<i64> = LUNAR_YEARS.iter().map(LunarYearRecord::new_year_day_number).collect();
    let (y, m, d) = END_NEW_YEAR;
    trace!(records = starts.len(), version = TABLE_VERSION, "compiled lunar table");
    CompiledTable {
        starts,
        end: civil_to_day_number(y, m, d),
    }
});

/// Every record in the table, oldest first.
pub fn year_records() -> &'static [LunarYearRecord] {
    &LUNAR_YEARS
}

/// Record for lunar `year`, if the table has one.
pub fn year_record(year: u16) -> Option<&'static LunarYearRecord> {
    let first = LUNAR_YEARS.first()?.year;
    let idx = usize::from(year.checked_sub(first)?);
    LUNAR_YEARS.get(idx).filter(|r| r.year == year)
}

/// Solar days that [`solar_to_lunar`] accepts.
pub fn supported_range() -> DateRange {
    let first = SolarDate::first_of_year(Year::clamped(LUNAR_MIN_YEAR));
    let last = SolarDate::last_of_year(Year::clamped(LUNAR_MAX_YEAR));
    DateRange::new(first, last).unwrap_or(DateRange::day(first))
}

/// A date in the Korean lunisolar calendar.
///
/// Only constructible for months and days the table knows, so
/// [`LunarDate::to_solar`] never meets an impossible date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LunarDate {
    year:          u16,
    month:         u8,
    is_leap_month: bool,
    day:           u8,
}

impl LunarDate {
    /// # Errors
    /// `OutOfRange` if the table has no lunar `year`, `NoSuchMonth` if the
    /// month (or leap month) does not occur in it, `InvalidDay` if `day` is
    /// zero or past the month's length.
    pub fn new(year: u16, month: u8, is_leap_month: bool, day: u8) -> Result<Self, LunarError> {
        let record = year_record(year).ok_or(LunarError::OutOfRange { year })?;
        let found = record
            .month(month, is_leap_month)
            .ok_or(LunarError::NoSuchMonth {
                year,
                month,
                is_leap_month,
            })?;
        if day == 0 || day > found.days {
            return Err(LunarError::InvalidDay {
                year,
                month,
                is_leap_month,
                day,
                max: found.days,
            });
        }
        Ok(Self {
            year,
            month,
            is_leap_month,
            day,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Compact cell label: `1.1`, or `윤2.15` inside a leap month.
    pub fn label(&self) -> String {
        let marker = if self.is_leap_month { LEAP_MONTH_MARKER } else { "" };
        format!("{marker}{}.{}", self.month, self.day)
    }

    /// Solar date of this lunar day.
    ///
    /// # Errors
    /// `OutOfRange` if the solar date falls outside the supported years, as
    /// the first weeks of lunar 1900 do.
    pub fn to_solar(&self) -> Result<SolarDate, LunarError> {
        let out_of_range = LunarError::OutOfRange { year: self.year };
        let record = year_record(self.year).ok_or(out_of_range)?;
        let before: i64 = record
            .months()
            .take_while(|m| (m.month, m.is_leap_month) != (self.month, self.is_leap_month))
            .map(|m| i64::from(m.days))
            .sum();
        let jdn = record.new_year_day_number() + before + i64::from(self.day) - 1;
        let solar = SolarDate::from_day_number(jdn).ok_or(out_of_range)?;
        if !(LUNAR_MIN_YEAR..=LUNAR_MAX_YEAR).contains(&solar.year()) {
            return Err(LunarError::OutOfRange { year: solar.year() });
        }
        Ok(solar)
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_leap_month { LEAP_MONTH_MARKER } else { "" };
        write!(
            f,
            "{}{YEAR_SUFFIX} {marker}{}{MONTH_SUFFIX} {}{DAY_SUFFIX}",
            self.year, self.month, self.day
        )
    }
}

/// Converts a solar date to its lunar date.
///
/// # Errors
/// Returns `LunarError::OutOfRange` when `date.year()` is outside
/// `LUNAR_MIN_YEAR..=LUNAR_MAX_YEAR`.
pub fn solar_to_lunar(date: SolarDate) -> Result<LunarDate, LunarError> {
    let year = date.year();
    let out_of_range = LunarError::OutOfRange { year };
    if !(LUNAR_MIN_YEAR..=LUNAR_MAX_YEAR).contains(&year) {
        return Err(out_of_range);
    }

    let table = &*COMPILED;
    let jdn = date.day_number();
    if jdn >= table.end {
        return Err(out_of_range);
    }
    // latest new year not after the query
    let idx = table
        .starts
        .partition_point(|&start| start <= jdn)
        .checked_sub(1)
        .ok_or(out_of_range)?;
    let record = LUNAR_YEARS.get(idx).ok_or(out_of_range)?;

    let mut offset = jdn - table.starts[idx];
    for month in record.months() {
        let days = i64::from(month.days);
        if offset < days {
            let day = u8::try_from(offset + 1).map_err(|_| out_of_range)?;
            return Ok(LunarDate {
                year: record.year,
                month: month.month,
                is_leap_month: month.is_leap_month,
                day,
            });
        }
        offset -= days;
    }
    Err(out_of_range)
}

/// Inverse of [`solar_to_lunar`].
///
/// # Errors
/// See [`LunarDate::to_solar`].
pub fn lunar_to_solar(lunar: &LunarDate) -> Result<SolarDate, LunarError> {
    lunar.to_solar()
}

/// Lunar label for a grid cell, or [`LUNAR_PLACEHOLDER`] when the date is
/// outside the table. Never fails.
pub fn short_label(date: SolarDate) -> String {
    match solar_to_lunar(date) {
        Ok(lunar) => lunar.label(),
        Err(err) => {
            debug!(%date, %err, "no lunar label for date");
            LUNAR_PLACEHOLDER.to_owned()
        },
    }
}

/// [`short_label`] keyed by a `YYYY-MM-DD` string. Keys that do not parse
/// get the placeholder too.
pub fn lunar_short_from_ymd(key: &str) -> String {
    match parse_ymd(key) {
        Ok(date) => short_label(date),
        Err(err) => {
            debug!(key, %err, "unparseable date key");
            LUNAR_PLACEHOLDER.to_owned()
        },
    }
}
