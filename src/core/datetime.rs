//! Relative date resolution.
//!
//! Due and scheduled tags carry short date expressions (`today`, `tom`, `fri`,
//! `nextmon`, `2024-12-15`). This module resolves them against a reference
//! date into canonical `YYYY-MM-DD` form.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;

/// Canonical date format used in todo files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error returned when an expression is neither relative nor canonical.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("date {0:?} is not a relative date or YYYY-MM-DD")]
pub struct DateError(pub String);

/// Resolve a date expression against `today`.
///
/// Supports:
/// - `today`, `tod`
/// - `tomorrow`, `tom`
/// - weekday names and abbreviations (the next occurrence strictly after `today`)
/// - a `next` prefix, which resolves the remainder a week later
/// - canonical `YYYY-MM-DD`
///
/// # Errors
///
/// Returns `DateError` if the expression matches none of the above.
pub fn resolve(today: NaiveDate, expr: &str) -> Result<NaiveDate, DateError> {
    if let Some(date) = parse_canonical(expr) {
        return Ok(date);
    }
    resolve_relative(today, &expr.trim().to_lowercase())
        .ok_or_else(|| DateError(expr.to_string()))
}

/// Resolve an expression to canonical form, leaving it untouched if it cannot
/// be resolved.
#[must_use]
pub fn normalize(today: NaiveDate, expr: &str) -> String {
    resolve(today, expr).map_or_else(|_| expr.to_string(), format_date)
}

/// Format a date in canonical form.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a strictly canonical `YYYY-MM-DD` date.
#[must_use]
pub fn parse_canonical(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

fn resolve_relative(today: NaiveDate, input: &str) -> Option<NaiveDate> {
    let mut base = today;
    let mut rest = input;
    while let Some(tail) = rest.strip_prefix("next") {
        rest = tail.trim_start_matches(|c: char| c.is_whitespace() || c == '-' || c == '_');
        base = base.checked_add_signed(Duration::days(7))?;
    }

    match rest {
        "today" | "tod" => Some(base),
        "tomorrow" | "tom" => base.checked_add_signed(Duration::days(1)),
        _ => {
            let weekday = parse_weekday(rest)?;
            base.checked_add_signed(Duration::days(days_until(base, weekday)))
        },
    }
}

/// Parse weekday names.
fn parse_weekday(input: &str) -> Option<Weekday> {
    let weekday = match input {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// The first date strictly after `today` that falls on `weekday`.
#[must_use]
pub fn next_weekday(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    today + Duration::days(days_until(today, weekday))
}

/// Days from `today` to the next `weekday`, in `1..=7`.
fn days_until(today: NaiveDate, weekday: Weekday) -> i64 {
    let days = (i64::from(weekday.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday())
        + 7)
        % 7;
    if days == 0 {
        7
    } else {
        days
    }
}
