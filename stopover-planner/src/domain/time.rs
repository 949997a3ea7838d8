//! Time-of-day handling for timetable entries.
//!
//! Timetables carry times as "HH:MM" strings on a single service day. This
//! module wraps `chrono::NaiveTime` in a validated time-of-day type that
//! supports the minute arithmetic the planner needs.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Returns the reason the time was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A time of day on the service day, at whole-minute precision.
///
/// Every `ClockTime` was either parsed from a strict zero-padded "HH:MM"
/// string or built from a minute count below 24 hours, so it always formats
/// back to a valid "HH:MM".
///
/// # Examples
///
/// ```
/// use stopover_planner::domain::ClockTime;
///
/// let time = ClockTime::parse("09:12").unwrap();
/// assert_eq!(time.minutes(), 9 * 60 + 12);
/// assert_eq!(time.to_string(), "09:12");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a time from "HH:MM" format.
    ///
    /// Hours must be two digits in `00..=23` and minutes two digits in
    /// `00..=59`. Single-digit hours are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use stopover_planner::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse("00:00").is_ok());
    /// assert!(ClockTime::parse("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse("9:10").is_err());
    /// assert!(ClockTime::parse("24:00").is_err());
    /// assert!(ClockTime::parse("12:60").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Build a time from minutes since midnight.
    ///
    /// Returns `None` for 24:00 or later.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        let minutes = u32::from(minutes);
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).map(Self)
    }

    /// Returns the underlying time of day.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Returns minutes since midnight.
    pub fn minutes(&self) -> u16 {
        // At most 23 * 60 + 59, which fits.
        (self.0.num_seconds_from_midnight() / 60) as u16
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the duration between two times on the same day.
    ///
    /// Negative if `other` is later than `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Minutes elapsed from `earlier` to `self` on the same day.
    ///
    /// Returns `None` if `earlier` is actually later than `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stopover_planner::domain::ClockTime;
    ///
    /// let dep = ClockTime::parse("09:12").unwrap();
    /// let arr = ClockTime::parse("10:08").unwrap();
    /// assert_eq!(arr.minutes_after(dep), Some(56));
    /// assert_eq!(dep.minutes_after(arr), None);
    /// ```
    pub fn minutes_after(&self, earlier: Self) -> Option<u16> {
        u16::try_from(self.signed_duration_since(earlier).num_minutes()).ok()
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
