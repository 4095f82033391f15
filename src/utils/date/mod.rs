// Date utility functions
// UTC calendar-date parsing and week/month boundary arithmetic

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{HeatmapError, HeatmapResult};

/// Fixed English day-of-week labels, Sunday first.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a strict `yyyy-mm-dd` calendar date.
///
/// Anything that is not exactly ten characters in that shape, or that names a
/// day that does not exist (e.g. `2023-02-29`), is rejected.
pub fn parse_utc_date(input: &str) -> HeatmapResult<NaiveDate> {
    let invalid = || HeatmapError::InvalidDateInput {
        input: input.to_string(),
    };

    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Weekday offset with Sunday = 0 .. Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Zero-based month number (January = 0).
pub fn month_index(date: NaiveDate) -> u32 {
    date.month0()
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(weekday_index(date) as i64)
}

/// Saturday on or after `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    date + Duration::days(6 - weekday_index(date) as i64)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Duration::days(days_in_month(date.year(), date.month()) as i64 - 1)
}

pub fn first_of_year(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.ordinal0() as i64)
}

pub fn last_of_year(date: NaiveDate) -> NaiveDate {
    let days = if is_leap_year(date.year()) { 366 } else { 365 };
    first_of_year(date) + Duration::days(days - 1)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Three-letter English name for a zero-based month number.
pub fn month_label(month0: u32) -> &'static str {
    MONTH_LABELS[(month0 % 12) as usize]
}
