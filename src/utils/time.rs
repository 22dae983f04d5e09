//! Time utilities: parsing user-typed timestamps.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a timestamp typed by the user.
///
/// Accepts RFC 3339 (any offset, converted to UTC), `YYYY-MM-DD HH:MM[:SS]`
/// with a space or a `T`, and a bare `YYYY-MM-DD` (midnight). Naive forms are
/// read as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

pub fn require_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_supported_forms() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 20, 15, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2025-03-20T15:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-20T17:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-20 15:30"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-20T15:30"), Some(expected));
        assert_eq!(parse_timestamp(" 2025-03-20 15:30:00 "), Some(expected));
        assert_eq!(
            parse_timestamp("2025-03-20"),
            Some(Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp("tomorrow"), None);
        assert_eq!(parse_timestamp("2025-13-01"), None);
        assert!(matches!(
            require_timestamp("15:30"),
            Err(AppError::InvalidTimestamp(_))
        ));
    }
}
