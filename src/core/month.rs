//! Payment month parsing and formatting helpers.
//!
//! Payment dates are stored as `YYYY-MM` strings. Lexicographic order on that
//! form is chronological order because both components are zero-padded, which
//! the rollup and activity modules rely on when sorting. For calendar math the
//! helpers below convert to the first day of the month.

use chrono::{Datelike, NaiveDate};

/// Full English month names, indexed by month number - 1.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parses a `YYYY-MM` payment month into the first day of that month.
/// Returns `None` for anything that is not a real calendar month.
#[must_use]
pub fn month_start(payment_date: &str) -> Option<NaiveDate> {
    let (year, month) = split_period(payment_date)?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Splits a `YYYY-MM` string into numeric (year, month), validating that the
/// month is in 01-12.
#[must_use]
pub fn split_period(payment_date: &str) -> Option<(i32, u32)> {
    let (year_str, month_str) = payment_date.split_once('-')?;
    let year: i32 = year_str.parse().ok()?;
    let month: u32 = month_str.parse().ok()?;
    if (1..=12).contains(&month) {
        Some((year, month))
    } else {
        None
    }
}

/// Formats numeric (year, month) back into the canonical zero-padded
/// `YYYY-MM` form.
#[must_use]
pub fn format_period(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// Full English name for a month number (1-12).
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// The `YYYY-MM` period immediately after the given date's month.
#[must_use]
pub fn next_month_period(today: NaiveDate) -> String {
    if today.month() == 12 {
        format_period(today.year() + 1, 1)
    } else {
        format_period(today.year(), today.month() + 1)
    }
}

/// Calendar quarter (1-4) for a month number (1-12).
#[must_use]
pub fn quarter_of(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_month_start_valid() {
        assert_eq!(
            month_start("2025-03"),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert_eq!(
            month_start("2026-12"),
            NaiveDate::from_ymd_opt(2026, 12, 1)
        );
    }

    #[test]
    fn test_month_start_rejects_bad_months() {
        assert_eq!(month_start("2025-13"), None);
        assert_eq!(month_start("2025-00"), None);
        assert_eq!(month_start("2025"), None);
        assert_eq!(month_start("garbage"), None);
        assert_eq!(month_start(""), None);
    }

    #[test]
    fn test_split_and_format_round_trip() {
        let (year, month) = split_period("2027-09").unwrap();
        assert_eq!((year, month), (2027, 9));
        assert_eq!(format_period(year, month), "2027-09");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(8), Some("August"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_next_month_period_rolls_over_year() {
        let mid_year = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(next_month_period(mid_year), "2025-07");

        let december = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(next_month_period(december), "2026-01");
    }

    #[test]
    fn test_quarter_of() {
        assert_eq!(quarter_of(1), 1);
        assert_eq!(quarter_of(3), 1);
        assert_eq!(quarter_of(4), 2);
        assert_eq!(quarter_of(12), 4);
    }
}
