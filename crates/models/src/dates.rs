//! Calendar-day normalisation for the string dates clients send.
//!
//! Accepts `yyyy-mm-dd`, RFC 3339 timestamps (reduced to their UTC day),
//! naive `yyyy-mm-ddTHH:MM:SS` / `yyyy-mm-dd HH:MM:SS` stamps and US-style
//! `mm/dd/yyyy`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::ModelError;

const DAY_FORMAT: &str = "%Y-%m-%d";

pub fn parse_calendar_day(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, DAY_FORMAT) {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}

/// Normalise to the `yyyy-mm-dd` prefix used for date matching.
pub fn day_prefix(input: &str) -> Result<String, ModelError> {
    parse_calendar_day(input)
        .map(|d| d.format(DAY_FORMAT).to_string())
        .ok_or_else(|| ModelError::Validation(format!("invalid date: {input:?}")))
}

/// Parse a mandatory date field of an input payload.
pub(crate) fn required_day(value: Option<String>, field: &str) -> Result<NaiveDate, ModelError> {
    let raw = crate::coerce::required(value, field)?;
    parse_calendar_day(&raw).ok_or_else(|| ModelError::Validation(format!("{field} is not a valid date")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_day_is_kept() {
        assert_eq!(day_prefix("2024-05-01").unwrap(), "2024-05-01");
    }

    #[test]
    fn utc_timestamp_is_truncated() {
        assert_eq!(day_prefix("2024-05-01T10:00:00Z").unwrap(), "2024-05-01");
        assert_eq!(day_prefix("2024-05-01T23:59:59.999Z").unwrap(), "2024-05-01");
    }

    #[test]
    fn offset_timestamp_is_reduced_to_utc_day() {
        // 01:30 at +06:00 is still the previous day in UTC
        assert_eq!(day_prefix("2024-05-02T01:30:00+06:00").unwrap(), "2024-05-01");
    }

    #[test]
    fn naive_and_us_formats() {
        assert_eq!(day_prefix("2024-05-01 08:15:00").unwrap(), "2024-05-01");
        assert_eq!(day_prefix("05/01/2024").unwrap(), "2024-05-01");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(day_prefix("").is_err());
        assert!(day_prefix("yesterday").is_err());
        assert!(day_prefix("2024-13-40").is_err());
    }
}
