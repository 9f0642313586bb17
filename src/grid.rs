//! Month grid builder.
//!
//! Everything here is Gregorian arithmetic on [`SolarDate`]; lunar labels are
//! looked up per cell by the caller.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    AsSolarDate, DAYS_PER_WEEK, DateRange, MAX_YEAR, MIN_DAY, MIN_YEAR, MONTH_SUFFIX,
    MONTHS_PER_YEAR, SolarDate, Weekday, YEAR_SUFFIX,
};

/// A normalized `(year, month0)` pair, `month0` in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year:   i32,
    pub month0: u8,
}

/// Earliest and latest months whose full-week grid stays inside
/// 0001-01-01..=9999-12-31 (0001-01-01 is a Monday).
const FIRST_GRID_MONTH: YearMonth = YearMonth {
    year:   MIN_YEAR as i32,
    month0: 1,
};
const LAST_GRID_MONTH: YearMonth = YearMonth {
    year:   MAX_YEAR as i32,
    month0: 10,
};

impl YearMonth {
    /// Normalizes any `month0` by carrying whole years, so `(2024, 12)` is
    /// January 2025 and `(2024, -1)` is December 2023.
    pub fn new(year: i32, month0: i32) -> Self {
        add_months(year, month0, 0)
    }

    pub const fn of(date: SolarDate) -> Self {
        Self {
            year:   date.year() as i32,
            month0: date.month() - 1,
        }
    }

    pub fn plus(self, delta: i32) -> Self {
        add_months(self.year, i32::from(self.month0), delta)
    }

    /// One-based month number.
    pub const fn month(self) -> u8 {
        self.month0 + 1
    }

    /// The month's first day, if the year is representable.
    pub fn first_day(self) -> Option<SolarDate> {
        let year = u16::try_from(self.year).ok()?;
        SolarDate::new(year, self.month(), MIN_DAY).ok()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{YEAR_SUFFIX} {}{MONTH_SUFFIX}", self.year, self.month())
    }
}

/// Moves `delta` months from `(year, month0)` in one step.
///
/// Any `month0` is accepted and carried into the year. Years past the `i32`
/// range saturate.
pub fn add_months(year: i32, month0: i32, delta: i32) -> YearMonth {
    let per_year = i64::from(MONTHS_PER_YEAR);
    let index = i64::from(year) * per_year + i64::from(month0) + i64::from(delta);
    let year = index.div_euclid(per_year);
    YearMonth {
        year:   i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX }),
        month0: u8::try_from(index.rem_euclid(per_year)).unwrap_or_default(),
    }
}

/// Heading for a month view, e.g. `2024년 2월`.
pub fn month_title(year: i32, month0: i32) -> String {
    YearMonth::new(year, month0).to_string()
}

/// First column of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Korean and US calendars.
    #[default]
    Sunday,
    /// ISO 8601 weeks.
    Monday,
}

impl WeekStart {
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sunday,
            Self::Monday => Weekday::Monday,
        }
    }

    /// Weekdays in column order, for header rows.
    pub fn columns(self) -> impl Iterator<Item = Weekday> {
        let start = self.weekday();
        let sunday_jdn = 2_451_546; // 2000-01-02
        (0..i64::from(DAYS_PER_WEEK))
            .map(move |col| Weekday::from_day_number(sunday_jdn + i64::from(start.index()) + col))
    }
}

/// Options for [`get_month_grid_with`].
///
/// Deserializable so a host application can keep it in its own config file:
///
/// ```
/// use lunisolar_grid::{GridOptions, WeekStart};
///
/// let opts: GridOptions = serde_json::from_str(r#"{ "week_start": "monday" }"#).unwrap();
/// assert_eq!(opts.week_start(), WeekStart::Monday);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    week_start: WeekStart,
}

impl GridOptions {
    /// Defaults: weeks start on Sunday.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }
}

/// One square of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DayCell {
    date:             SolarDate,
    is_current_month: bool,
    key:              String,
}

impl DayCell {
    fn new(date: SolarDate, is_current_month: bool) -> Self {
        Self {
            date,
            is_current_month,
            key: date.ymd(),
        }
    }

    pub const fn date(&self) -> SolarDate {
        self.date
    }

    /// False for the days borrowed from the previous and next months.
    pub const fn is_current_month(&self) -> bool {
        self.is_current_month
    }

    /// Stable identifier for the cell, unique within a grid. Equal to the
    /// cell's `ymd` key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl AsSolarDate for DayCell {
    fn solar_date(&self) -> SolarDate {
        self.date
    }
}

/// Cells for `(year, month0)` with weeks starting on Sunday.
pub fn get_month_grid(year: i32, month0: i32) -> Vec<DayCell> {
    get_month_grid_with(year, month0, &GridOptions::default())
}

/// Cells for `(year, month0)`: whole weeks from the week containing the 1st
/// through the week containing the last day, in date order.
///
/// `month0` is normalized like [`add_months`]. Months before 0001-02 or after
/// 9999-11 are clamped to those, since their grids would need days outside
/// the representable years.
pub fn get_month_grid_with(year: i32, month0: i32, options: &GridOptions) -> Vec<DayCell> {
    let requested = YearMonth::new(year, month0);
    let target = requested.clamp(FIRST_GRID_MONTH, LAST_GRID_MONTH);
    if target != requested {
        debug!(
            year,
            month0,
            clamped_year = target.year,
            clamped_month0 = target.month0,
            "month outside grid range, clamped"
        );
    }

    let Some(first) = target.first_day() else {
        return Vec::new();
    };
    let last = first.last_of_month();
    let start = options.week_start().weekday();

    let lead = i64::from(first.weekday().days_since(start));
    let trail = i64::from(DAYS_PER_WEEK - 1 - last.weekday().days_since(start));

    let cells: Vec<DayCell> = (first.day_number() - lead..=last.day_number() + trail)
        .filter_map(SolarDate::from_day_number)
        .map(|date| {
            let current = date.year() == first.year() && date.month() == first.month();
            DayCell::new(date, current)
        })
        .collect();

    trace!(year = target.year, month = target.month(), cells = cells.len(), "built month grid");
    cells
}

/// Inclusive date range covered by `cells`, suitable for a range query.
/// `None` for an empty slice.
pub fn grid_range(cells: &[DayCell]) -> Option<DateRange> {
    let first = cells.first()?;
    let last = cells.last()?;
    DateRange::new(first.date, last.date).ok()
}
