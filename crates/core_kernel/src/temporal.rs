//! Canonical date codec
//!
//! This module converts between the date representations the form layer
//! passes around:
//! - Calendar date: `chrono::NaiveDate`
//! - Compact numeric: `YYYYMMDD` as a `u32` (e.g. `19850315`)
//! - ISO string: `YYYY-MM-DD`
//! - Display string: `1985年3月15日`, or the era form `昭和60年3月15日`
//!
//! All conversions are total. Invalid input produces a sentinel (`0`, `""`
//! or `None`) instead of an error. Callers check the sentinel before use.
//!
//! Compact numbers are only emitted for years 1000..=9999 so that every value
//! the codec writes is exactly eight digits, which keeps numeric order equal
//! to calendar order and keeps the round trip lossless.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Smallest eight-digit compact value (year 1000)
const MIN_COMPACT: u32 = 10_000_000;
/// Largest eight-digit compact value
const MAX_COMPACT: u32 = 99_999_999;

/// Length of `YYYY-MM-DD`
pub const ISO_DATE_LEN: usize = 10;

/// Errors related to constructing date ranges
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid range: start {start} must not be after end {end}")]
    InvalidRange {
        start: String,
        end: String,
    },

    #[error("Year {0} cannot be represented as a calendar date")]
    UnrepresentableYear(i32),
}

/// Converts a calendar date to its compact `YYYYMMDD` form
///
/// Returns `0` when no date is given or the year falls outside 1000..=9999.
pub fn date_to_compact(date: Option<NaiveDate>) -> u32 {
    let Some(date) = date else {
        return 0;
    };

    let year = date.year();
    if !(1000..=9999).contains(&year) {
        trace!(year, "date outside compact range");
        return 0;
    }

    year as u32 * 10_000 + date.month() * 100 + date.day()
}

/// Converts a compact `YYYYMMDD` number back to a calendar date
///
/// Returns `None` for `0`, for anything that is not exactly eight digits,
/// and for impossible dates such as `20230231`. Those are rejected rather
/// than rolled over into the following month.
pub fn compact_to_date(n: u32) -> Option<NaiveDate> {
    if !(MIN_COMPACT..=MAX_COMPACT).contains(&n) {
        if n != 0 {
            trace!(n, "compact date is not eight digits");
        }
        return None;
    }

    let year = (n / 10_000) as i32;
    let month = n / 100 % 100;
    let day = n % 100;

    let date = NaiveDate::from_ymd_opt(year, month, day);
    if date.is_none() {
        trace!(n, "compact date is not a calendar date");
    }
    date
}

/// Parses a strict `YYYY-MM-DD` string into a calendar date
///
/// Unlike `NaiveDate::parse_from_str`, single-digit months or days and any
/// surrounding whitespace are rejected.
pub fn parse_iso(s: &str) -> Option<NaiveDate> {
    if !has_iso_shape(s) {
        return None;
    }

    let year = s[0..4].parse().ok()?;
    let month = s[5..7].parse().ok()?;
    let day = s[8..10].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Returns true if `s` has the `YYYY-MM-DD` shape, without checking the calendar
pub fn has_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == ISO_DATE_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Converts an ISO `YYYY-MM-DD` string to its compact form, or `0`
pub fn iso_to_compact(s: &str) -> u32 {
    date_to_compact(parse_iso(s))
}

/// Converts a compact number to an ISO `YYYY-MM-DD` string, or `""`
///
/// The string is rendered from the validated date rather than sliced from
/// the digits, so only real dates ever come out.
pub fn compact_to_iso(n: u32) -> String {
    compact_to_date(n)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Renders a date in long Japanese form, e.g. `1985年3月15日`
///
/// Returns `placeholder` when no date is given.
pub fn format_for_display(date: Option<NaiveDate>, placeholder: &str) -> String {
    match date {
        Some(date) => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        None => placeholder.to_string(),
    }
}

/// Inclusive range test on compact numbers
///
/// `0` is never in range. The test is purely numeric, which is sound because
/// every compact value the codec emits has the same eight-digit width.
pub fn is_compact_in_range(n: u32, min: u32, max: u32) -> bool {
    n != 0 && min <= n && n <= max
}

/// Japanese imperial eras from Meiji onward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    Meiji,
    Taisho,
    Showa,
    Heisei,
    Reiwa,
}

impl Era {
    /// Newest first, so the first era whose start is not after a date wins
    const DESCENDING: [Era; 5] = [Era::Reiwa, Era::Heisei, Era::Showa, Era::Taisho, Era::Meiji];

    /// First day of the era as (year, month, day)
    pub fn start(&self) -> (i32, u32, u32) {
        match self {
            Era::Meiji => (1868, 10, 23),
            Era::Taisho => (1912, 7, 30),
            Era::Showa => (1926, 12, 25),
            Era::Heisei => (1989, 1, 8),
            Era::Reiwa => (2019, 5, 1),
        }
    }

    /// Era name in kanji
    pub fn name(&self) -> &'static str {
        match self {
            Era::Meiji => "明治",
            Era::Taisho => "大正",
            Era::Showa => "昭和",
            Era::Heisei => "平成",
            Era::Reiwa => "令和",
        }
    }

    /// Returns the era a date falls in, or `None` before Meiji
    pub fn of(date: NaiveDate) -> Option<Era> {
        let ymd = (date.year(), date.month(), date.day());
        Self::DESCENDING.into_iter().find(|era| era.start() <= ymd)
    }

    /// Year within the era, where the first year is 1
    pub fn year_of(&self, date: NaiveDate) -> i32 {
        date.year() - self.start().0 + 1
    }
}

/// Renders a date in era form, e.g. `昭和60年3月15日`
///
/// The first year of an era is written `元年`. Returns `None` for dates
/// before the Meiji era.
pub fn format_wareki(date: NaiveDate) -> Option<String> {
    let era = Era::of(date)?;
    let year = match era.year_of(date) {
        1 => "元".to_string(),
        n => n.to_string(),
    };
    Some(format!("{}{}年{}月{}日", era.name(), year, date.month(), date.day()))
}

/// Inclusive calendar date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Range from January 1 of `first_year` through December 31 of `last_year`
    pub fn from_years(first_year: i32, last_year: i32) -> Result<Self, TemporalError> {
        let start = NaiveDate::from_ymd_opt(first_year, 1, 1)
            .ok_or(TemporalError::UnrepresentableYear(first_year))?;
        let end = NaiveDate::from_ymd_opt(last_year, 12, 31)
            .ok_or(TemporalError::UnrepresentableYear(last_year))?;
        Self::new(start, end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Range test on a compact number; rejected compact values are outside
    pub fn contains_compact(&self, n: u32) -> bool {
        compact_to_date(n).is_some_and(|date| self.contains(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_compact_round_trip() {
        let d = date(1985, 3, 15);
        assert_eq!(date_to_compact(Some(d)), 19850315);
        assert_eq!(compact_to_date(19850315), Some(d));
    }

    #[test]
    fn test_impossible_day_rejected() {
        assert_eq!(compact_to_date(20230231), None);
        assert_eq!(compact_to_date(20230431), None);
        assert_eq!(compact_to_date(20231301), None);
    }

    #[test]
    fn test_iso_shape_is_strict() {
        assert_eq!(parse_iso("2024-1-05"), None);
        assert_eq!(parse_iso(" 2024-01-05"), None);
        assert_eq!(parse_iso("2024/01/05"), None);
        assert_eq!(parse_iso("2024-01-05"), Some(date(2024, 1, 5)));
    }

    #[test]
    fn test_era_boundaries() {
        assert_eq!(Era::of(date(1989, 1, 7)), Some(Era::Showa));
        assert_eq!(Era::of(date(1989, 1, 8)), Some(Era::Heisei));
        assert_eq!(Era::of(date(1868, 10, 22)), None);
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        let result = DateRange::new(date(2025, 1, 1), date(2024, 1, 1));
        assert!(matches!(result, Err(TemporalError::InvalidRange { .. })));
    }
}
