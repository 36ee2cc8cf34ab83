use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Datetime layouts the CMS has been observed to emit, tried in order
/// after the plain ISO date and RFC 3339 forms.
const DATETIME_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];
const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];

/// Reduce a raw upload-date value to the calendar day it belongs to.
///
/// Parsing is permissive (ISO dates, RFC 3339 timestamps, bare datetimes,
/// day-first and US numeric forms). Timestamps that carry a zone are
/// converted to the machine's local zone before the date is taken, so a
/// photo uploaded just before midnight groups under the day the author saw,
/// not the UTC day.
///
/// Absent or unparseable input degrades to today's local date rather than
/// erroring; the gallery must render with whatever the CMS holds.
pub fn normalize_date(input: Option<&str>) -> NaiveDate {
    let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return Local::now().date_naive();
    };

    for layout in DATE_LAYOUTS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, layout) {
            return d;
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).date_naive();
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, layout) {
            return dt.date();
        }
    }

    debug!(raw, "unparseable upload date, grouping under today");
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(normalize_date(Some("2025-08-05")), d("2025-08-05"));
    }

    #[test]
    fn parses_timestamps_and_numeric_forms() {
        assert_eq!(normalize_date(Some("2025-08-05 14:30:00")), d("2025-08-05"));
        assert_eq!(normalize_date(Some("2025-08-05T14:30:00.250")), d("2025-08-05"));
        assert_eq!(normalize_date(Some("05.08.2025")), d("2025-08-05"));
        assert_eq!(normalize_date(Some("8/5/2025")), d("2025-08-05"));
    }

    #[test]
    fn missing_input_degrades_to_today() {
        let today = Local::now().date_naive();
        assert_eq!(normalize_date(None), today);
        assert_eq!(normalize_date(Some("")), today);
        assert_eq!(normalize_date(Some("   ")), today);
    }

    #[test]
    fn malformed_input_degrades_to_today() {
        let today = Local::now().date_naive();
        assert_eq!(normalize_date(Some("not-a-date")), today);
        assert_eq!(normalize_date(Some("2025-13-45")), today);
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["2025-08-05", "2025-08-05T23:59:59+03:00", "garbage"] {
            let once = normalize_date(Some(raw));
            let twice = normalize_date(Some(&once.format("%Y-%m-%d").to_string()));
            assert_eq!(twice, once, "input {raw}");
        }
    }
}
