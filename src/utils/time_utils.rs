use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a raw record timestamp into epoch milliseconds.
///
/// Accepted forms, tried in order:
/// - already-numeric epoch milliseconds (passes through unchanged)
/// - `%Y-%m-%d` calendar date (midnight UTC)
/// - RFC 3339 datetime
pub fn parse_timestamp_ms(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(epoch_ms) = raw.parse::<i64>() {
        return Some(epoch_ms);
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, STANDARD_DATE_FORMAT) {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(midnight.and_utc().timestamp_millis());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    None
}

/// Display form used for tooltips and the detail dialog.
pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(STANDARD_DATE_FORMAT).to_string(),
        // Axis formatters can ask for arbitrary x values when zoomed far out
        None => String::new(),
    }
}

/// Week-of-month ordinal: days 1-7 are week 1, 8-14 week 2, and so on.
pub fn week_of_month(epoch_ms: i64) -> Option<u32> {
    let dt = DateTime::<Utc>::from_timestamp_millis(epoch_ms)?;
    Some(dt.day().div_ceil(7))
}

/// Three-letter month abbreviation ("Jan", "Feb", ...).
pub fn month_abbrev(epoch_ms: i64) -> Option<String> {
    let dt = DateTime::<Utc>::from_timestamp_millis(epoch_ms)?;
    Some(dt.format("%b").to_string())
}

/// "Mon YYYY" form for the monthly timeframe.
pub fn month_year_string(epoch_ms: i64) -> Option<String> {
    let dt = DateTime::<Utc>::from_timestamp_millis(epoch_ms)?;
    Some(dt.format("%b %Y").to_string())
}
