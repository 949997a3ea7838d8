//! The fare master record.
//!
//! A `FareMaster` is the static input the whole crate works from: the fares
//! for one origin/destination pair plus the weekday timetable for both
//! directions. It mirrors the JSON fixture field for field, so time strings
//! stay unparsed here; the validators decide whether they are usable.

use std::fmt;
use std::io::Read;

use chrono::{DateTime, FixedOffset};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::{Direction, DomainError, Station, TimestampError, parse_timestamp};

/// The bundled Yasu–Osaka fare record.
pub const SAMPLE_JSON: &str = include_str!("../../data/fare_master.json");

/// Fare category the record applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FareType {
    /// Adult fare paid with an IC card.
    IcAdult,
}

/// Fares and timetable for one origin/destination pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareMaster {
    /// Origin/destination pair identifier (e.g. "yasu_osaka").
    pub od_id: String,

    pub fare_type: FareType,

    /// Through fare in yen.
    #[serde(deserialize_with = "whole_number")]
    pub direct_fare: i64,

    /// Split-ticket fares via the intermediate station.
    pub stopover: StopoverFare,

    /// ISO-8601 timestamp of the last fare revision.
    pub updated_at: String,

    pub timetable: Timetable,
}

/// The two separate fares paid when leaving the gates at the via station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopoverFare {
    pub via: Station,
    #[serde(deserialize_with = "whole_number")]
    pub leg1_fare: i64,
    #[serde(deserialize_with = "whole_number")]
    pub leg2_fare: i64,
}

/// Weekday timetable with the minimum transfer time at the via station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    /// Minimum minutes between leg-1 arrival and leg-2 departure.
    #[serde(deserialize_with = "whole_number")]
    pub transfer_min: i64,
    pub weekday: WeekdayTimetable,
}

/// Departures for each direction. Keys match [`Direction`] names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayTimetable {
    pub yasu_to_osaka: DirectionTimetable,
    pub osaka_to_yasu: DirectionTimetable,
}

impl WeekdayTimetable {
    pub fn get(&self, direction: Direction) -> &DirectionTimetable {
        match direction {
            Direction::YasuToOsaka => &self.yasu_to_osaka,
            Direction::OsakaToYasu => &self.osaka_to_yasu,
        }
    }
}

/// One of the three departure lists kept per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Direct,
    Leg1,
    Leg2,
}

impl Section {
    /// Sections in the order they are validated.
    pub const ALL: [Section; 3] = [Section::Direct, Section::Leg1, Section::Leg2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Direct => "direct",
            Section::Leg1 => "leg1",
            Section::Leg2 => "leg2",
        }
    }
}

/// Departure lists for one direction, each sorted by departure time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionTimetable {
    /// Through trains, origin to destination.
    pub direct: Vec<TimetableEntry>,
    /// Origin to the via station.
    pub leg1: Vec<TimetableEntry>,
    /// Via station to destination.
    pub leg2: Vec<TimetableEntry>,
}

impl DirectionTimetable {
    pub fn section(&self, section: Section) -> &[TimetableEntry] {
        match section {
            Section::Direct => &self.direct,
            Section::Leg1 => &self.leg1,
            Section::Leg2 => &self.leg2,
        }
    }
}

/// A single scheduled train.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub train_id: String,
    /// Departure, "HH:MM".
    pub depart_at: String,
    /// Arrival, "HH:MM".
    pub arrive_at: String,
}

impl TimetableEntry {
    pub fn new(
        train_id: impl Into<String>,
        depart_at: impl Into<String>,
        arrive_at: impl Into<String>,
    ) -> Self {
        Self {
            train_id: train_id.into(),
            depart_at: depart_at.into(),
            arrive_at: arrive_at.into(),
        }
    }
}

/// Deserialize a JSON number with an integer value.
///
/// `1170` and `1170.0` both load; `1170.5` and out-of-range values do not.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    struct WholeNumberVisitor;

    impl Visitor<'_> for WholeNumberVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            i64::try_from(value).map_err(|_| E::custom(format!("integer {value} out of range")))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
            // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
            let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
            if value.fract() != 0.0 || !in_range {
                return Err(E::invalid_value(de::Unexpected::Float(value), &self));
            }
            Ok(value as i64)
        }
    }

    deserializer.deserialize_any(WholeNumberVisitor)
}

impl FareMaster {
    /// Deserialize a record from JSON text.
    ///
    /// Structural problems (missing fields, non-integer fares, unknown
    /// stations) are reported as [`DomainError::DataInvalid`].
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::DataInvalid(e.to_string()))
    }

    /// Deserialize a record from any reader yielding JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DomainError> {
        serde_json::from_reader(reader).map_err(|e| DomainError::DataInvalid(e.to_string()))
    }

    /// The bundled Yasu–Osaka record.
    ///
    /// # Examples
    ///
    /// ```
    /// use stopover_planner::domain::FareMaster;
    ///
    /// let master = FareMaster::sample().unwrap();
    /// assert_eq!(master.direct_fare, 1170);
    /// assert_eq!(master.stopover.leg1_fare + master.stopover.leg2_fare, 1090);
    /// ```
    pub fn sample() -> Result<Self, DomainError> {
        Self::from_json_str(SAMPLE_JSON)
    }

    /// Parse `updated_at` into a timestamp.
    pub fn parsed_updated_at(&self) -> Result<DateTime<FixedOffset>, TimestampError> {
        parse_timestamp(&self.updated_at)
    }

    /// Departure lists for one direction.
    pub fn departures(&self, direction: Direction) -> &DirectionTimetable {
        self.timetable.weekday.get(direction)
    }
}
