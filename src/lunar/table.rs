//! Lunisolar month table, one record per lunar year.
//!
//! Generated by `scripts/gen_lunar_table.mjs` from the ICU 78.2 Dangi
//! calendar. Do not edit by hand.

use super::LunarYearRecord;

/// Identifies the data set compiled into this build.
pub const TABLE_VERSION: &str = "icu-dangi-78.2";

/// Gregorian date of the new year following the last record.
pub(crate) const END_NEW_YEAR: (u16, u8, u8) = (2101, 1, 29);

const fn record(
    year: u16,
    new_year_year: u16,
    new_year_month: u8,
    new_year_day: u8,
    leap_month: Option<u8>,
    month_days: &'static [u8],
) -> LunarYearRecord {
    LunarYearRecord {
        year,
        new_year: (new_year_year, new_year_month, new_year_day),
        leap_month,
        month_days,
    }
}

#[rustfmt::skip]
pub(crate) static LUNAR_YEARS: [LunarYearRecord; 201] = [
    record(1900, 1900, 1, 31, Some(8), &[29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30]),
    record(1901, 1901, 2, 19, None, &[29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29]),
    record(1902, 1902, 2, 8, None, &[30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30]),
    record(1903, 1903, 1, 29, Some(5), &[29, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30]),
    record(1904, 1904, 2, 16, None, &[30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29]),
    record(1905, 1905, 2, 4, None, &[30, 30, 29, 30, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(1906, 1906, 1, 25, Some(4), &[29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30]),
    record(1907, 1907, 2, 13, None, &[29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29]),
    record(1908, 1908, 2, 2, None, &[30, 29, 29, 30, 30, 29, 30, 29, 30, 30, 29, 30]),
    record(1909, 1909, 1, 22, Some(2), &[29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29, 30]),
    record(1910, 1910, 2, 10, None, &[29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29]),
    record(1911, 1911, 1, 30, Some(6), &[30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30]),
    record(1912, 1912, 2, 18, None, &[30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30]),
    record(1913, 1913, 2, 6, None, &[30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30]),
    record(1914, 1914, 1, 26, Some(5), &[30, 30, 29, 30, 30, 29, 29, 30, 29, 30, 29, 29, 30]),
    record(1915, 1915, 2, 14, None, &[30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30]),
    record(1916, 1916, 2, 4, None, &[29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29]),
    record(1917, 1917, 1, 23, Some(2), &[30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29]),
    record(1918, 1918, 2, 11, None, &[30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29, 30]),
    record(1919, 1919, 2, 1, Some(7), &[29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30]),
    record(1920, 1920, 2, 20, None, &[29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30]),
    record(1921, 1921, 2, 8, None, &[30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30]),
    record(1922, 1922, 1, 28, Some(5), &[30, 29, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30]),
    record(1923, 1923, 2, 16, None, &[29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30]),
    record(1924, 1924, 2, 5, None, &[30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 29]),
    record(1925, 1925, 1, 24, Some(4), &[30, 29, 30, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30]),
    record(1926, 1926, 2, 13, None, &[29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29]),
    record(1927, 1927, 2, 2, None, &[30, 29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30]),
    record(1928, 1928, 1, 23, Some(2), &[29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30, 30]),
    record(1929, 1929, 2, 10, None, &[29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30]),
    record(1930, 1930, 1, 30, Some(6), &[29, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29]),
    record(1931, 1931, 2, 17, None, &[30, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 29]),
    record(1932, 1932, 2, 6, None, &[30, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30]),
    record(1933, 1933, 1, 26, Some(5), &[29, 30, 30, 29, 30, 30, 29, 30, 29, 30, 29, 29, 30]),
    record(1934, 1934, 2, 14, None, &[29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30]),
    record(1935, 1935, 2, 4, None, &[29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29]),
    record(1936, 1936, 1, 24, Some(3), &[30, 29, 29, 30, 29, 30, 29, 30, 29, 30, 30, 30, 29]),
    record(1937, 1937, 2, 11, None, &[30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29]),
    record(1938, 1938, 1, 31, Some(7), &[30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30]),
    record(1939, 1939, 2, 19, None, &[30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(1940, 1940, 2, 8, None, &[30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29]),
    record(1941, 1941, 1, 27, Some(6), &[30, 30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29]),
    record(1942, 1942, 2, 15, None, &[30, 29, 30, 30, 29, 30, 30, 29, 30, 29, 29, 30]),
    record(1943, 1943, 2, 5, None, &[29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30]),
    record(1944, 1944, 1, 26, Some(4), &[29, 29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30]),
    record(1945, 1945, 2, 13, None, &[29, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29, 30]),
    record(1946, 1946, 2, 2, None, &[30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30]),
    record(1947, 1947, 1, 22, Some(2), &[30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30]),
    record(1948, 1948, 2, 10, None, &[30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(1949, 1949, 1, 29, Some(7), &[30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(1950, 1950, 2, 17, None, &[30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29]),
    record(1951, 1951, 2, 6, None, &[30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30]),
    record(1952, 1952, 1, 27, Some(5), &[29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30]),
    record(1953, 1953, 2, 14, None, &[29, 30, 29, 29, 30, 30, 29, 30, 30, 29, 30, 30]),
    record(1954, 1954, 2, 4, None, &[29, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30]),
    record(1955, 1955, 1, 24, Some(3), &[30, 29, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30]),
    record(1956, 1956, 2, 12, None, &[29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30]),
    record(1957, 1957, 1, 31, Some(8), &[30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30]),
    record(1958, 1958, 2, 19, None, &[29, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(1959, 1959, 2, 8, None, &[29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]),
    record(1960, 1960, 1, 28, Some(6), &[30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29]),
    record(1961, 1961, 2, 15, None, &[30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30]),
    record(1962, 1962, 2, 5, None, &[29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29]),
    record(1963, 1963, 1, 25, Some(4), &[30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29]),
    record(1964, 1964, 2, 13, None, &[30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30]),
    record(1965, 1965, 2, 2, None, &[29, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 30]),
    record(1966, 1966, 1, 22, Some(3), &[29, 30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29]),
    record(1967, 1967, 2, 9, None, &[30, 30, 29, 30, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(1968, 1968, 1, 30, Some(7), &[29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30]),
    record(1969, 1969, 2, 17, None, &[29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29]),
    record(1970, 1970, 2, 6, None, &[30, 29, 29, 30, 30, 29, 30, 29, 30, 30, 29, 30]),
    record(1971, 1971, 1, 27, Some(5), &[29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29, 30]),
    record(1972, 1972, 2, 15, None, &[29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29]),
    record(1973, 1973, 2, 3, None, &[30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 30, 29]),
    record(1974, 1974, 1, 23, Some(4), &[30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30]),
    record(1975, 1975, 2, 11, None, &[30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30]),
    record(1976, 1976, 1, 31, Some(8), &[30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30]),
    record(1977, 1977, 2, 18, None, &[30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 29]),
    record(1978, 1978, 2, 7, None, &[30, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29]),
    record(1979, 1979, 1, 28, Some(6), &[30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29]),
    record(1980, 1980, 2, 16, None, &[30, 29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30]),
    record(1981, 1981, 2, 5, None, &[29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30]),
    record(1982, 1982, 1, 25, Some(4), &[30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30]),
    record(1983, 1983, 2, 13, None, &[30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30]),
    record(1984, 1984, 2, 2, Some(10), &[30, 29, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30]),
    record(1985, 1985, 2, 20, None, &[29, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30]),
    record(1986, 1986, 2, 9, None, &[29, 30, 30, 29, 30, 30, 29, 30, 29, 30, 29, 29]),
    record(1987, 1987, 1, 29, Some(6), &[30, 29, 30, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30]),
    record(1988, 1988, 2, 18, None, &[29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29]),
    record(1989, 1989, 2, 6, None, &[30, 29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30]),
    record(1990, 1990, 1, 27, Some(5), &[29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30, 30]),
    record(1991, 1991, 2, 15, None, &[29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30]),
    record(1992, 1992, 2, 4, None, &[29, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30]),
    record(1993, 1993, 1, 23, Some(3), &[29, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29]),
    record(1994, 1994, 2, 10, None, &[30, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30]),
    record(1995, 1995, 1, 31, Some(8), &[29, 30, 30, 29, 30, 30, 29, 30, 29, 30, 29, 29, 30]),
    record(1996, 1996, 2, 19, None, &[29, 30, 29, 30, 30, 29, 30, 29, 30, 30, 29, 30]),
    record(1997, 1997, 2, 8, None, &[29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29]),
    record(1998, 1998, 1, 28, Some(5), &[30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30, 30, 29]),
    record(1999, 1999, 2, 16, None, &[30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29]),
    record(2000, 2000, 2, 5, None, &[30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29]),
    record(2001, 2001, 1, 24, Some(4), &[30, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(2002, 2002, 2, 12, None, &[30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29]),
    record(2003, 2003, 2, 1, None, &[30, 30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30]),
    record(2004, 2004, 1, 22, Some(2), &[29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30]),
    record(2005, 2005, 2, 9, None, &[29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29, 29]),
    record(2006, 2006, 1, 29, Some(7), &[30, 29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30]),
    record(2007, 2007, 2, 18, None, &[29, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29, 30]),
    record(2008, 2008, 2, 7, None, &[30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30]),
    record(2009, 2009, 1, 26, Some(5), &[30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30]),
    record(2010, 2010, 2, 14, None, &[30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(2011, 2011, 2, 3, None, &[30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29]),
    record(2012, 2012, 1, 23, Some(3), &[30, 29, 30, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29]),
    record(2013, 2013, 2, 10, None, &[30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30]),
    record(2014, 2014, 1, 31, Some(9), &[29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30]),
    record(2015, 2015, 2, 19, None, &[29, 30, 29, 29, 30, 29, 30, 30, 30, 29, 30, 29]),
    record(2016, 2016, 2, 8, None, &[30, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30]),
    record(2017, 2017, 1, 28, Some(5), &[30, 29, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30]),
    record(2018, 2018, 2, 16, None, &[29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30]),
    record(2019, 2019, 2, 5, None, &[30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(2020, 2020, 1, 25, Some(4), &[30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(2021, 2021, 2, 12, None, &[29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]),
    record(2022, 2022, 2, 1, None, &[30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30]),
    record(2023, 2023, 1, 22, Some(2), &[29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30]),
    record(2024, 2024, 2, 10, None, &[29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29]),
    record(2025, 2025, 1, 29, Some(6), &[30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29]),
    record(2026, 2026, 2, 17, None, &[30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30]),
    record(2027, 2027, 2, 7, None, &[29, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 30]),
    record(2028, 2028, 1, 27, Some(5), &[29, 30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29]),
    record(2029, 2029, 2, 13, None, &[30, 30, 29, 30, 30, 29, 29, 30, 29, 29, 30, 30]),
    record(2030, 2030, 2, 3, None, &[29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29]),
    record(2031, 2031, 1, 23, Some(3), &[30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29]),
    record(2032, 2032, 2, 11, None, &[30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30]),
    record(2033, 2033, 1, 31, Some(11), &[29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29, 30]),
    record(2034, 2034, 2, 19, None, &[29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29]),
    record(2035, 2035, 2, 8, None, &[30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30]),
    record(2036, 2036, 1, 28, Some(6), &[30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30]),
    record(2037, 2037, 2, 15, None, &[30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30]),
    record(2038, 2038, 2, 4, None, &[30, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30, 29]),
    record(2039, 2039, 1, 24, Some(5), &[30, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 29]),
    record(2040, 2040, 2, 12, None, &[30, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30, 29]),
    record(2041, 2041, 2, 1, None, &[30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30]),
    record(2042, 2042, 1, 22, Some(2), &[29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30]),
    record(2043, 2043, 2, 10, None, &[29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30]),
    record(2044, 2044, 1, 30, Some(7), &[30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30]),
    record(2045, 2045, 2, 17, None, &[30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30]),
    record(2046, 2046, 2, 6, None, &[30, 29, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30]),
    record(2047, 2047, 1, 26, Some(5), &[30, 29, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30]),
    record(2048, 2048, 2, 14, None, &[29, 30, 30, 29, 30, 30, 29, 30, 29, 30, 29, 29]),
    record(2049, 2049, 2, 2, None, &[30, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29]),
    record(2050, 2050, 1, 23, Some(3), &[30, 29, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29]),
    record(2051, 2051, 2, 11, None, &[30, 29, 29, 30, 29, 29, 30, 30, 30, 29, 30, 30]),
    record(2052, 2052, 2, 1, Some(8), &[29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30, 30]),
    record(2053, 2053, 2, 19, None, &[29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30]),
    record(2054, 2054, 2, 8, None, &[29, 30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30]),
    record(2055, 2055, 1, 28, Some(6), &[29, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29]),
    record(2056, 2056, 2, 15, None, &[30, 30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30]),
    record(2057, 2057, 2, 4, None, &[29, 30, 30, 29, 30, 29, 30, 30, 29, 29, 30, 29]),
    record(2058, 2058, 1, 24, Some(4), &[30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 30, 29, 29]),
    record(2059, 2059, 2, 12, None, &[30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 30, 29]),
    record(2060, 2060, 2, 2, None, &[30, 29, 29, 30, 29, 29, 30, 30, 29, 30, 30, 30]),
    record(2061, 2061, 1, 22, Some(3), &[29, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29]),
    record(2062, 2062, 2, 9, None, &[30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29]),
    record(2063, 2063, 1, 29, Some(7), &[30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(2064, 2064, 2, 17, None, &[30, 30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29]),
    record(2065, 2065, 2, 5, None, &[30, 30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30]),
    record(2066, 2066, 1, 26, Some(5), &[29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30]),
    record(2067, 2067, 2, 14, None, &[29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29]),
    record(2068, 2068, 2, 3, None, &[30, 29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30]),
    record(2069, 2069, 1, 23, Some(4), &[30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29, 30]),
    record(2070, 2070, 2, 11, None, &[30, 29, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30]),
    record(2071, 2071, 1, 31, Some(8), &[30, 30, 29, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30]),
    record(2072, 2072, 2, 19, None, &[30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(2073, 2073, 2, 7, None, &[30, 29, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29]),
    record(2074, 2074, 1, 27, Some(6), &[30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]),
    record(2075, 2075, 2, 15, None, &[30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30]),
    record(2076, 2076, 2, 5, None, &[29, 30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29]),
    record(2077, 2077, 1, 24, Some(4), &[30, 29, 30, 29, 29, 30, 29, 30, 30, 30, 29, 30, 29]),
    record(2078, 2078, 2, 12, None, &[30, 29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30]),
    record(2079, 2079, 2, 2, None, &[29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30]),
    record(2080, 2080, 1, 22, Some(3), &[30, 29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30]),
    record(2081, 2081, 2, 9, None, &[30, 29, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30]),
    record(2082, 2082, 1, 29, Some(7), &[29, 30, 30, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30]),
    record(2083, 2083, 2, 17, None, &[29, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]),
    record(2084, 2084, 2, 6, None, &[30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30]),
    record(2085, 2085, 1, 26, Some(5), &[29, 30, 29, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30]),
    record(2086, 2086, 2, 14, None, &[29, 30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29]),
    record(2087, 2087, 2, 3, None, &[30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30]),
    record(2088, 2088, 1, 24, Some(4), &[29, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 30, 30]),
    record(2089, 2089, 2, 11, None, &[29, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29]),
    record(2090, 2090, 1, 30, Some(8), &[30, 30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29]),
    record(2091, 2091, 2, 18, None, &[30, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30, 30]),
    record(2092, 2092, 2, 8, None, &[29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29]),
    record(2093, 2093, 1, 27, Some(6), &[30, 29, 30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29]),
    record(2094, 2094, 2, 15, None, &[30, 29, 29, 30, 29, 30, 30, 29, 30, 30, 29, 30]),
    record(2095, 2095, 2, 5, None, &[29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29]),
    record(2096, 2096, 1, 25, Some(4), &[30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30, 29]),
    record(2097, 2097, 2, 12, None, &[30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29, 30]),
    record(2098, 2098, 2, 1, None, &[30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 30, 29]),
    record(2099, 2099, 1, 21, Some(3), &[30, 30, 30, 29, 30, 29, 29, 30, 29, 29, 30, 29, 30]),
    record(2100, 2100, 2, 9, None, &[30, 30, 29, 30, 29, 30, 29, 30, 29, 29, 30, 29]),
];
