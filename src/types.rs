use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// A solar year in `MIN_YEAR..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// # Errors
    /// Returns `ParseError::InvalidYear` outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(value));
        }
        NonZeroU16::new(value).map(Self).ok_or(ParseError::InvalidYear(value))
    }

    /// Clamps `value` into `MIN_YEAR..=MAX_YEAR`.
    pub const fn clamped(value: u16) -> Self {
        let value = if value < MIN_YEAR {
            MIN_YEAR
        } else if value > MAX_YEAR {
            MAX_YEAR
        } else {
            value
        };
        Self(NonZeroU16::MIN.saturating_add(value - 1))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A one-based month, January = 1.
///
/// Grid APIs speak zero-based months (`month0`) because that is what the
/// calendar views pass around; [`Month::from_zero_based`] and
/// [`Month::zero_based`] convert at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);
    pub const DECEMBER: Self = Self(NonZeroU8::MIN.saturating_add(MAX_MONTH - 1));

    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        NonZeroU8::new(value).map(Self).ok_or(ParseError::InvalidMonth(value))
    }

    /// # Errors
    /// Returns `ParseError::InvalidMonth` if `month0` is not in `0..12`.
    pub fn from_zero_based(month0: u8) -> Result<Self, ParseError> {
        Self::new(month0.saturating_add(1))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    #[inline]
    pub const fn zero_based(self) -> u8 {
        self.get() - 1
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A day of month. Only [`Day::new`] knows the month it belongs to, so it is
/// the constructor every date path goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    pub const FIRST: Self = Self(NonZeroU8::MIN);
    /// 31, the last day of the longest months.
    pub const MAX: Self = Self(NonZeroU8::MIN.saturating_add(DAYS_IN_MONTH[1] - 1));

    /// Validates `value` against the length of `year`-`month`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year,
            month,
            day: value,
        };
        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    /// Context-free check: only rejects values no month can hold.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let invalid = ParseError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        };
        if value > DAYS_IN_MONTH[1] {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// Day of week, numbered from Sunday as the Korean calendar header is (일 월 화 수 목 금 토).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; DAYS_PER_WEEK as usize] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday of a Julian day number. JDN 0 fell on a Monday.
    pub(crate) fn from_day_number(jdn: i64) -> Self {
        let idx = (jdn + 1).rem_euclid(i64::from(DAYS_PER_WEEK));
        // rem_euclid keeps idx in 0..7
        Self::ALL[usize::try_from(idx).unwrap_or_default()]
    }

    /// Zero for Sunday through six for Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Number of days from the most recent `start` weekday to `self`, i.e. the
    /// column of `self` in a week that begins on `start`.
    pub const fn days_since(self, start: Self) -> u8 {
        (self.index() + DAYS_PER_WEEK - start.index()) % DAYS_PER_WEEK
    }

    /// Korean one-character name, as in calendar column headers.
    pub const fn short_name_ko(self) -> &'static str {
        match self {
            Self::Sunday => "일",
            Self::Monday => "월",
            Self::Tuesday => "화",
            Self::Wednesday => "수",
            Self::Thursday => "목",
            Self::Friday => "금",
            Self::Saturday => "토",
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(Year::new(10000), Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_clamped() {
        assert_eq!(Year::clamped(0).get(), 1);
        assert_eq!(Year::clamped(1901).get(), 1901);
        assert_eq!(Year::clamped(u16::MAX).get(), 9999);
    }

    #[test]
    fn test_month_and_day_consts() {
        assert_eq!(Month::JANUARY.get(), 1);
        assert_eq!(Month::DECEMBER.get(), 12);
        assert_eq!(Day::FIRST.get(), 1);
        assert_eq!(Day::MAX.get(), 31);
    }

    #[test]
    fn test_year_display_is_four_digits() {
        assert_eq!(Year::new(2024).unwrap().to_string(), "2024");
        assert_eq!(Year::new(987).unwrap().to_string(), "0987");
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");
        assert_eq!(serde_json::from_str::<Year>(&json).unwrap(), year);
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_zero_based() {
        let december = Month::from_zero_based(11).unwrap();
        assert_eq!(december.get(), 12);
        assert_eq!(december.zero_based(), 11);
        assert_eq!(Month::from_zero_based(0).unwrap().get(), 1);
        assert!(Month::from_zero_based(12).is_err());
        assert!(Month::from_zero_based(255).is_err());
    }

    #[test]
    fn test_month_display_is_padded() {
        assert_eq!(Month::new(8).unwrap().to_string(), "08");
    }

    #[test]
    fn test_day_new_respects_month_length() {
        assert!(Day::new(31, 2024, 1).is_ok());
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(ParseError::InvalidDay {
                year: 2024,
                month: 1,
                day: 32
            })
        ));
        assert!(Day::new(0, 2024, 1).is_err());
        assert!(Day::new(1, 2024, 0).is_err());
        assert!(Day::new(1, 2024, 13).is_err());
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);
        assert!(Day::try_from(0).is_err());
        assert!(Day::try_from(32).is_err());
    }

    #[test]
    fn test_weekday_from_day_number() {
        // 2000-01-01 was a Saturday, 1970-01-01 a Thursday
        assert_eq!(Weekday::from_day_number(2_451_545), Weekday::Saturday);
        assert_eq!(Weekday::from_day_number(2_440_588), Weekday::Thursday);
        assert_eq!(Weekday::from_day_number(2_451_546), Weekday::Sunday);
    }

    #[test]
    fn test_weekday_days_since() {
        assert_eq!(Weekday::Thursday.days_since(Weekday::Sunday), 4);
        assert_eq!(Weekday::Thursday.days_since(Weekday::Monday), 3);
        assert_eq!(Weekday::Sunday.days_since(Weekday::Monday), 6);
        assert_eq!(Weekday::Monday.days_since(Weekday::Monday), 0);
    }

    #[test]
    fn test_weekday_korean_names() {
        let names: Vec<_> = Weekday::ALL.iter().map(|d| d.short_name_ko()).collect();
        assert_eq!(names, ["일", "월", "화", "수", "목", "금", "토"]);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:    u16,
            is_leap: bool,
        }

        let cases = [
            TestCase { year: 2024, is_leap: true },
            TestCase { year: 2023, is_leap: false },
            TestCase { year: 1900, is_leap: false },
            TestCase { year: 2100, is_leap: false },
            TestCase { year: 2000, is_leap: true },
            TestCase { year: 2400, is_leap: true },
        ];

        for case in &cases {
            assert_eq!(is_leap_year(case.year), case.is_leap, "year {}", case.year);
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u8 {
            assert_eq!(days_in_month(2023, month), expected[month as usize]);
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }
}
