//! # Date Utilities
//!
//! All date math in docwatch happens on [`NaiveDate`], i.e. local calendar days
//! with no time component. Day differences are whole-day calendar subtraction,
//! so daylight-saving transitions can never shift a result by one.
//!
//! The string-based helpers (`add_days`, `format_compact_date`) take and return
//! ISO `YYYY-MM-DD` strings because that is the shape dates have at the edges:
//! form input, the persisted blob and the calendar export.

use crate::error::{DocwatchError, Result};
use chrono::{Days, Local, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";
const COMPACT_FORMAT: &str = "%Y%m%d";

/// Today's local calendar date.
///
/// Not cached: callers re-derive it on every status computation.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `YYYY-MM-DD` string.
///
/// An empty (or all-whitespace) input yields `Ok(None)`: the field simply has not
/// been filled in yet. Anything else that is not a valid calendar date is an
/// [`DocwatchError::InvalidDateFormat`].
pub fn parse_date(iso: &str) -> Result<Option<NaiveDate>> {
    let trimmed = iso.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    // chrono accepts signed years and single-digit months and days, the ISO
    // form does not
    let bytes = trimmed.as_bytes();
    let digits_at = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    if bytes.len() != 10
        || bytes[4] != b'-'
        || bytes[7] != b'-'
        || !digits_at(0..4)
        || !digits_at(5..7)
        || !digits_at(8..10)
    {
        return Err(DocwatchError::InvalidDateFormat(trimmed.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
        .map(Some)
        .map_err(|_| DocwatchError::InvalidDateFormat(trimmed.to_string()))
}

/// Like [`parse_date`], but an empty input is an error too.
pub fn require_date(iso: &str) -> Result<NaiveDate> {
    parse_date(iso)?.ok_or_else(|| DocwatchError::InvalidDateFormat(iso.to_string()))
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Whole days from `a` to `b`. Negative when `b` is before `a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// Shifts a date by `delta` days in either direction.
///
/// Returns `None` when the result falls outside chrono's representable range.
pub fn shift_days(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

/// Returns the ISO date `delta` days away from `iso`.
pub fn add_days(iso: &str, delta: i64) -> Result<String> {
    let date = require_date(iso)?;
    let shifted = shift_days(date, delta).ok_or_else(|| {
        DocwatchError::InvalidDateFormat(format!("{} shifted by {} days", iso, delta))
    })?;
    Ok(format_iso(shifted))
}

/// `"1 day"`, `"12 days"`.
pub fn day_count(days: u64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// `YYYYMMDD`, the form used for all-day `DTSTART`/`DTEND` values.
pub fn compact(date: NaiveDate) -> String {
    date.format(COMPACT_FORMAT).to_string()
}

pub fn format_compact_date(iso: &str) -> Result<String> {
    require_date(iso).map(compact)
}
