use chrono::{DateTime, NaiveDate, Utc};
use common::{Error, Result};

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Parses a record timestamp.
///
/// Accepts RFC 3339 instants or bare `YYYY-MM-DD` dates, which resolve to
/// midnight UTC.
pub fn parse_instant(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidDate {
            field,
            value: value.to_string(),
        })
}

/// Whole days elapsed from `date` to `now`, floored.
///
/// Future dates yield negative counts; callers decide how to treat them.
pub fn days_since(date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - date).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Day, abbreviated month and year, e.g. `8 Feb 2025`.
pub fn short_date(date: DateTime<Utc>) -> String {
    date.format("%-d %b %Y").to_string()
}
