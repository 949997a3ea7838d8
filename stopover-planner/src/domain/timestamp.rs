//! Parsing of the fare record's `updatedAt` timestamp.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// Offset applied to timestamps that carry none (JST, UTC+9).
const DEFAULT_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Error returned when a timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {value:?}")]
pub struct TimestampError {
    value: String,
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 date-times (`2025-03-15T09:00:00+09:00`,
/// `2025-03-15T00:00:00Z`), minute-precision date-times with an offset
/// (`2025-03-15T09:00+09:00`, `2025-03-15T09:00Z`), date-times without an
/// offset (`2025-03-15T09:00:00`, `2025-03-15T09:00`) and dates at day,
/// month or year precision (`2025-03-15`, `2025-03`, `2025`). Values
/// without an offset are read as JST.
///
/// # Examples
///
/// ```
/// use stopover_planner::domain::parse_timestamp;
///
/// let ts = parse_timestamp("2025-03-15T00:00:00+09:00").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2025-03-15T00:00:00+09:00");
///
/// assert!(parse_timestamp("2025-03-15").is_ok());
/// assert!(parse_timestamp("invalid-date").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, TimestampError> {
    let err = || TimestampError {
        value: s.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%:z"))
    {
        return Ok(dt);
    }

    if let Some(local) = s.strip_suffix('Z') {
        let naive = NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M").map_err(|_| err())?;
        return Ok(naive.and_utc().fixed_offset());
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| parse_date(s).map(|d| d.and_time(NaiveTime::MIN)))
        .ok_or_else(err)?;

    let offset = FixedOffset::east_opt(DEFAULT_OFFSET_SECS).ok_or_else(err)?;
    naive.and_local_timezone(offset).single().ok_or_else(err)
}

/// Parse a calendar date at day, month or year precision.
///
/// Missing fields default to the first of the month or year.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    let mut parts = s.split('-');
    let year = parts.next().filter(|y| is_digits(y, 4))?;
    let month = match parts.next() {
        Some(m) if is_digits(m, 2) => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_keeps_offset() {
        let ts = parse_timestamp("2025-03-15T00:00:00Z").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 0);

        let ts = parse_timestamp("2025-03-15T09:30:00.250+09:00").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), DEFAULT_OFFSET_SECS);
    }

    #[test]
    fn minute_precision_with_offset() {
        let ts = parse_timestamp("2025-03-15T09:00+09:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-03-15T09:00:00+09:00");

        let ts = parse_timestamp("2025-03-15T09:00-05:30").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-03-15T09:00:00-05:30");

        let ts = parse_timestamp("2025-03-15T09:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-03-15T09:00:00+00:00");
    }

    #[test]
    fn offsetless_values_read_as_jst() {
        let ts = parse_timestamp("2025-03-15T09:30:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-03-15T09:30:00+09:00");

        let ts = parse_timestamp("2025-03-15T09:30").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-03-15T09:30:00+09:00");

        let ts = parse_timestamp("2025-03-15").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-03-15T00:00:00+09:00");
    }

    #[test]
    fn reduced_precision_dates() {
        let ts = parse_timestamp("2025-03").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-03-01T00:00:00+09:00");

        let ts = parse_timestamp("2025").unwrap();
        assert_eq!(ts.to_rfc3339(), "2025-01-01T00:00:00+09:00");

        assert!(parse_timestamp("2025-13").is_err());
        assert!(parse_timestamp("2025-3").is_err());
        assert!(parse_timestamp("25").is_err());
        assert!(parse_timestamp("2025-03-").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("invalid-date").is_err());
        assert!(parse_timestamp("2025-02-30").is_err());
        assert!(parse_timestamp("2025-03-15T25:00:00").is_err());
        assert!(parse_timestamp("2025-03-15T25:00Z").is_err());
        assert!(parse_timestamp("2025-03-15Z").is_err());
        assert_eq!(
            parse_timestamp("yesterday").unwrap_err().to_string(),
            "invalid timestamp: \"yesterday\""
        );
    }
}
