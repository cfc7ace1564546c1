//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Sort key for posts whose `added` is missing or unparsable.
///
/// It is the earliest representable instant, so such posts land after
/// every dated post in a newest-first listing.
pub const UNDATED: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Parse an `added` timestamp
///
/// Accepts RFC 3339 and the common ISO 8601 shapes found in frontmatter.
/// Values without an offset are read as UTC so builds do not depend on the
/// machine's timezone.
pub fn parse_added(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let offset_formats = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
    for fmt in offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    let naive_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
    ];
    for fmt in naive_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Format an `added` value for listings, `-` when undated
pub fn display_added(added: Option<&DateTime<Utc>>) -> String {
    added
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_only() {
        let dt = parse_added("2020-01-01").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(parse_added("2020/01/01"), Some(dt));
    }

    #[test]
    fn test_parse_rfc3339_normalizes_offset() {
        let dt = parse_added("2021-06-01T10:00:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2021, 6, 1, 8, 0, 0).unwrap());
        let z = parse_added("2021-06-01T08:00:00.000Z").unwrap();
        assert_eq!(z, dt);
    }

    #[test]
    fn test_parse_naive_datetime() {
        let dt = parse_added("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
        assert!(parse_added("2024-01-15T10:30").is_some());
    }

    #[test]
    fn test_unparsable() {
        assert_eq!(parse_added(""), None);
        assert_eq!(parse_added("yesterday"), None);
        assert_eq!(parse_added("2020-13-45"), None);
    }

    #[test]
    fn test_undated_sorts_first_ascending() {
        let dt = parse_added("0001-01-01").unwrap();
        assert!(UNDATED < dt);
        assert_eq!(display_added(None), "-");
        assert_eq!(display_added(Some(&dt)), "0001-01-01");
    }
}
