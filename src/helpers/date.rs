//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a front-matter date in the ISO-8601 forms content files use
///
/// Date-only values resolve to midnight. Values with an offset are
/// normalized to UTC.
///
/// # Examples
/// ```ignore
/// parse_date("2025-09-15") // -> 2025-09-15T00:00:00
/// ```
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y/%m/%d %H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}

/// Format a date the way pages display it (like "September 15, 2025")
pub fn long_date(date: &NaiveDateTime) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format just the calendar date (like "2025-09-15")
pub fn short_date(date: &NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = parse_date("2025-09-15").unwrap();
        assert_eq!(short_date(&dt), "2025-09-15");
        assert_eq!(dt.format("%H:%M:%S").to_string(), "00:00:00");
    }

    #[test]
    fn test_parse_datetime_forms() {
        let a = parse_date("2024-01-15 10:30:00").unwrap();
        let b = parse_date("2024-01-15T10:30:00").unwrap();
        let c = parse_date("2024-01-15T12:30:00+02:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_date("last tuesday"), None);
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_long_date() {
        let dt = parse_date("2025-09-05").unwrap();
        assert_eq!(long_date(&dt), "September 5, 2025");
    }
}
