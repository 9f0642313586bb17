/// Smallest representable solar year
pub const MIN_YEAR: u16 = 1;

/// Largest representable solar year (keeps `YYYY` four digits wide)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub const MONTHS_PER_YEAR: u8 = 12;
pub const DAYS_PER_WEEK: u8 = 7;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// First solar year `solar_to_lunar` accepts (inclusive)
pub const LUNAR_MIN_YEAR: u16 = 1901;
/// Last solar year `solar_to_lunar` accepts (inclusive)
pub const LUNAR_MAX_YEAR: u16 = 2100;

/// Label rendered for dates the lunar table cannot resolve
pub const LUNAR_PLACEHOLDER: &str = "-";
/// Prefix marking a leap month (윤달)
pub const LEAP_MONTH_MARKER: &str = "윤";

/// Suffixes used by Korean date headings
pub const YEAR_SUFFIX: &str = "년";
pub const MONTH_SUFFIX: &str = "월";
pub const DAY_SUFFIX: &str = "일";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 interval)
pub const RANGE_SEPARATOR: char = '/';
