use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseError, RANGE_SEPARATOR, SolarDate, prelude::*};

/// An inclusive span of solar days, `start..=end`.
///
/// This is the shape of every range query the calendar issues: the visible
/// grid, or the task list's "next 30 days" window. Its text form is the ISO
/// 8601 interval `YYYY-MM-DD/YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: SolarDate,
    end:   SolarDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: SolarDate, end: SolarDate },

    /// Error parsing a date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: SolarDate, end: SolarDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The single-day range `date..=date`.
    pub const fn day(date: SolarDate) -> Self {
        Self {
            start: date,
            end:   date,
        }
    }

    /// `start` plus the `days` days after it. Returns `None` if the end would
    /// fall past 9999-12-31.
    pub fn following(start: SolarDate, days: u32) -> Option<Self> {
        let end = start.add_days(i64::from(days))?;
        Some(Self { start, end })
    }

    pub const fn start(&self) -> SolarDate {
        self.start
    }

    pub const fn end(&self) -> SolarDate {
        self.end
    }

    /// `(start, end)` as the `YYYY-MM-DD` strings a range query takes.
    pub fn ymd_bounds(&self) -> (String, String) {
        (self.start.ymd(), self.end.ymd())
    }

    pub fn contains(&self, date: &SolarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of days covered, counting both ends.
    pub fn len_days(&self) -> u64 {
        self.start.days_until(&self.end).unsigned_abs() + 1
    }

    /// Every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = SolarDate> + use<> {
        let first = self.start.day_number();
        let last = self.end.day_number();
        (first..=last).filter_map(SolarDate::from_day_number)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let mut pieces = trimmed.split(RANGE_SEPARATOR);
        match (pieces.next(), pieces.next(), pieces.next()) {
            (Some(start), Some(end), None) => {
                let start = start.trim().parse::<SolarDate>()?;
                let end = end.trim().parse::<SolarDate>()?;
                Self::new(start, end)
            },
            (_, None, _) => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {}",
                trimmed.matches(RANGE_SEPARATOR).count()
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
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
    use crate::test_utils::{date, range};

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start:          SolarDate,
            end:            SolarDate,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          date(2024, 1, 28),
                end:            date(2024, 3, 2),
                should_succeed: true,
                description:    "valid range (start < end)",
            },
            TestCase {
                start:          date(2024, 3, 2),
                end:            date(2024, 1, 28),
                should_succeed: false,
                description:    "invalid range (start > end)",
            },
            TestCase {
                start:          date(2024, 2, 10),
                end:            date(2024, 2, 10),
                should_succeed: true,
                description:    "equal dates (start == end)",
            },
        ];

        for case in &cases {
            let result = DateRange::new(case.start, case.end);
            assert_eq!(result.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_invalid_range_message() {
        let err = DateRange::new(date(2024, 3, 2), date(2024, 1, 28)).expect_err("start after end must fail");
        assert_eq!(
            err.to_string(),
            "Invalid date range: start (2024-03-02) is after end (2024-01-28)"
        );
    }

    #[test]
    fn test_following_builds_task_window() {
        let window = DateRange::following(date(2024, 12, 15), 30).expect("window inside supported years");
        assert_eq!(window.start(), date(2024, 12, 15));
        assert_eq!(window.end(), date(2025, 1, 14));
        assert_eq!(window.len_days(), 31);
        assert!(DateRange::following(date(9999, 12, 20), 30).is_none());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = range("2024-01-28/2024-03-02");
        assert!(r.contains(&date(2024, 1, 28)));
        assert!(r.contains(&date(2024, 2, 29)));
        assert!(r.contains(&date(2024, 3, 2)));
        assert!(!r.contains(&date(2024, 1, 27)));
        assert!(!r.contains(&date(2024, 3, 3)));
    }

    #[test]
    fn test_overlaps_and_within() {
        let feb_grid = range("2024-01-28/2024-03-02");
        let mar_grid = range("2024-02-25/2024-04-06");
        let april = range("2024-04-07/2024-04-30");

        assert!(feb_grid.overlaps(&mar_grid));
        assert!(mar_grid.overlaps(&feb_grid));
        assert!(!feb_grid.overlaps(&april));

        let week = range("2024-02-04/2024-02-10");
        assert!(week.is_within(&feb_grid));
        assert!(!feb_grid.is_within(&week));
    }

    #[test]
    fn test_days_iterates_in_order() {
        let days: Vec<_> = range("2024-02-27/2024-03-02").days().map(|d| d.ymd()).collect();
        assert_eq!(
            days,
            ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]
        );
        assert_eq!(DateRange::day(date(2024, 2, 10)).days().count(), 1);
    }

    #[test]
    fn test_ymd_bounds() {
        let (start, end) = range("2024-01-28/2024-03-02").ymd_bounds();
        assert_eq!(start, "2024-01-28");
        assert_eq!(end, "2024-03-02");
    }

    #[test]
    fn test_display_round_trip() {
        let r = DateRange::new(date(2024, 1, 28), date(2024, 3, 2)).expect("ordered range");
        assert_eq!(r.to_string(), "2024-01-28/2024-03-02");
        assert_eq!(r.to_string().parse::<DateRange>().expect("round trip"), r);
    }

    #[test]
    fn test_from_str_errors() {
        let err = "2024-01-28".parse::<DateRange>().expect_err("missing separator");
        assert!(err.to_string().contains("No range separator found"));

        let err = "2024-01-01/2024-01-02/2024-01-03"
            .parse::<DateRange>()
            .expect_err("too many separators");
        assert!(err.to_string().contains("expected 1, found 2"));

        let err = "2024-01-01/2024-02-30".parse::<DateRange>().expect_err("bad end date");
        assert!(matches!(err, RangeError::ParseError(ParseError::InvalidDay { .. })));

        assert!(matches!(
            "2024-03-01/2024-02-01".parse::<DateRange>(),
            Err(RangeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let r = range("2024-01-28/2024-03-02");
        let json = serde_json::to_string(&r).expect("serialize range");
        assert_eq!(json, r#""2024-01-28/2024-03-02""#);
        let parsed: DateRange = serde_json::from_str(&json).expect("deserialize range");
        assert_eq!(parsed, r);
    }
}
