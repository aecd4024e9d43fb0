//! Lenient parsing for store-provided date strings.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a stored date string into local wall-clock time.
///
/// Accepted shapes:
/// - `YYYY-MM-DD` (midnight)
/// - `YYYY-MM-DDTHH:MM[:SS[.fff]]` and the space-separated variant
/// - RFC 3339 with offset, converted to the machine's local zone
///
/// The result shares its time base with [`crate::temporal::SystemClock`].
/// Returns `None` for blank or unrecognized input.
pub fn parse_instant(value: &str) -> Option<NaiveDateTime> {
    parse_instant_in(value, &Local)
}

/// Same as [`parse_instant`], with offset-bearing strings converted to the
/// wall time of `zone`. Offset-less strings are taken as already in `zone`.
pub fn parse_instant_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.with_timezone(zone).naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }

    parse_due_date(trimmed).and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parses any accepted date string down to its calendar day.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    parse_instant(value).map(|instant| instant.date())
}

/// Parses a strict `YYYY-MM-DD` due date.
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DUE_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_calendar_date, parse_due_date, parse_instant, parse_instant_in};
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .expect("valid test instant")
    }

    #[test]
    fn plain_date_parses_to_midnight() {
        assert_eq!(
            parse_instant("2024-03-01"),
            Some(ymd_hms(2024, 3, 1, 0, 0, 0))
        );
    }

    #[test]
    fn rfc3339_is_converted_to_the_target_zone() {
        let brasilia = FixedOffset::west_opt(3 * 3600).expect("valid offset");
        assert_eq!(
            parse_instant_in("2024-03-11T00:00:00.000Z", &brasilia),
            Some(ymd_hms(2024, 3, 10, 21, 0, 0))
        );
        assert_eq!(
            parse_instant_in("2024-03-01T10:00:00-03:00", &brasilia),
            Some(ymd_hms(2024, 3, 1, 10, 0, 0))
        );
        assert_eq!(
            parse_instant_in("2024-03-01T10:00:00-03:00", &Utc),
            Some(ymd_hms(2024, 3, 1, 13, 0, 0))
        );
    }

    #[test]
    fn offset_less_shapes_ignore_the_target_zone() {
        let brasilia = FixedOffset::west_opt(3 * 3600).expect("valid offset");
        assert_eq!(
            parse_instant_in("2024-03-01T08:15", &brasilia),
            parse_instant_in("2024-03-01T08:15", &Utc)
        );
    }

    #[test]
    fn local_datetime_shapes_are_accepted() {
        assert_eq!(
            parse_instant("2024-03-01T08:15"),
            Some(ymd_hms(2024, 3, 1, 8, 15, 0))
        );
        assert_eq!(
            parse_instant(" 2024-03-01 08:15:30 "),
            Some(ymd_hms(2024, 3, 1, 8, 15, 30))
        );
    }

    #[test]
    fn garbage_and_blank_are_rejected() {
        assert_eq!(parse_instant(""), None);
        assert_eq!(parse_instant("   "), None);
        assert_eq!(parse_instant("yesterday"), None);
        assert_eq!(parse_instant("2024-13-40"), None);
    }

    #[test]
    fn calendar_date_drops_time_of_day() {
        assert_eq!(
            parse_calendar_date("2024-03-01T23:59:59"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn due_date_is_strict() {
        assert_eq!(parse_due_date("2024-03-01"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse_due_date("2024-03-01T10:00"), None);
    }
}
