//! Domain types for the stopover fare planner.
//!
//! This module contains the fare record as loaded from JSON plus the small
//! validated types (times, stations, directions) the rest of the crate
//! works with. Validated types enforce their invariants at construction
//! time, so code that receives them can trust their validity.

mod error;
mod master;
mod station;
mod time;
mod timestamp;
mod validation;

pub use error::DomainError;
pub use master::{
    DirectionTimetable, FareMaster, FareType, SAMPLE_JSON, Section, StopoverFare, Timetable,
    TimetableEntry, WeekdayTimetable,
};
pub use station::{Direction, InvalidDirection, Station};
pub use time::{ClockTime, TimeError};
pub use timestamp::{TimestampError, parse_timestamp};
pub use validation::Validation;
