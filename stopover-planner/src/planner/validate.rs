//! Timetable validation.
//!
//! Validation and parsing are the same pass: a timetable is valid exactly
//! when every entry parses into a [`ScheduledTrain`]. The planner reuses the
//! parsed form so it never has to re-check a time string.

use tracing::debug;

use crate::domain::{
    ClockTime, Direction, DirectionTimetable, FareMaster, Section, TimetableEntry, Validation,
};

/// A timetable entry whose times have been parsed and checked.
///
/// # Invariants
///
/// - `depart < arrive`
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScheduledTrain<'a> {
    pub entry: &'a TimetableEntry,
    pub depart: ClockTime,
    pub arrive: ClockTime,
    /// Minutes from departure to arrival, always positive.
    pub duration_min: u16,
}

/// Parsed departure lists for one direction, in timetable order.
#[derive(Debug, Clone)]
pub(crate) struct ParsedDirection<'a> {
    pub direct: Vec<ScheduledTrain<'a>>,
    pub leg1: Vec<ScheduledTrain<'a>>,
    pub leg2: Vec<ScheduledTrain<'a>>,
}

/// A fully validated timetable.
#[derive(Debug, Clone)]
pub(crate) struct ParsedTimetable<'a> {
    pub transfer_min: u64,
    yasu_to_osaka: ParsedDirection<'a>,
    osaka_to_yasu: ParsedDirection<'a>,
}

impl<'a> ParsedTimetable<'a> {
    /// Parse and validate every section of the timetable.
    ///
    /// Sections are checked in a fixed order (`yasu_to_osaka` before
    /// `osaka_to_yasu`; `direct`, `leg1`, `leg2` within each) and the first
    /// failure is returned as a reason string.
    pub fn parse(master: &'a FareMaster) -> Result<Self, String> {
        let transfer_min = u64::try_from(master.timetable.transfer_min)
            .map_err(|_| "transferMin must be a non-negative integer".to_string())?;

        let yasu_to_osaka = parse_direction(master, Direction::YasuToOsaka)?;
        let osaka_to_yasu = parse_direction(master, Direction::OsakaToYasu)?;

        Ok(Self {
            transfer_min,
            yasu_to_osaka,
            osaka_to_yasu,
        })
    }

    pub fn get(&self, direction: Direction) -> &ParsedDirection<'a> {
        match direction {
            Direction::YasuToOsaka => &self.yasu_to_osaka,
            Direction::OsakaToYasu => &self.osaka_to_yasu,
        }
    }
}

fn parse_direction<'a>(
    master: &'a FareMaster,
    direction: Direction,
) -> Result<ParsedDirection<'a>, String> {
    let table: &'a DirectionTimetable = master.departures(direction);
    let section = |s: Section| parse_section(table.section(s), direction, s);

    Ok(ParsedDirection {
        direct: section(Section::Direct)?,
        leg1: section(Section::Leg1)?,
        leg2: section(Section::Leg2)?,
    })
}

fn parse_section<'a>(
    entries: &'a [TimetableEntry],
    direction: Direction,
    section: Section,
) -> Result<Vec<ScheduledTrain<'a>>, String> {
    let fail = |what: &str| format!("{}.{}: {}", direction, section.as_str(), what);

    let mut trains: Vec<ScheduledTrain<'a>> = Vec::with_capacity(entries.len());

    for entry in entries {
        if entry.train_id.is_empty() {
            return Err(fail("trainId is required"));
        }

        let (Ok(depart), Ok(arrive)) = (
            ClockTime::parse(&entry.depart_at),
            ClockTime::parse(&entry.arrive_at),
        ) else {
            return Err(fail("time must be HH:mm format"));
        };

        let duration_min = match arrive.minutes_after(depart) {
            Some(mins) if mins > 0 => mins,
            _ => return Err(fail("departAt must be before arriveAt")),
        };

        if trains.last().is_some_and(|prev| depart < prev.depart) {
            return Err(fail("entries must be sorted by departAt"));
        }

        trains.push(ScheduledTrain {
            entry,
            depart,
            arrive,
            duration_min,
        });
    }

    Ok(trains)
}

/// Check the timetable's transfer time and every departure list.
///
/// # Examples
///
/// ```
/// use stopover_planner::domain::FareMaster;
/// use stopover_planner::planner::validate_timetable;
///
/// let mut master = FareMaster::sample().unwrap();
/// assert!(validate_timetable(&master).is_valid());
///
/// master.timetable.weekday.yasu_to_osaka.leg1[0].arrive_at = "08:00".into();
/// assert_eq!(
///     validate_timetable(&master).reason(),
///     Some("yasu_to_osaka.leg1: departAt must be before arriveAt"),
/// );
/// ```
pub fn validate_timetable(master: &FareMaster) -> Validation {
    match ParsedTimetable::parse(master) {
        Ok(_) => Validation::Valid,
        Err(reason) => {
            debug!(%reason, "rejected timetable");
            Validation::invalid(reason)
        }
    }
}
