//! Next-departure search.
//!
//! Finds the next few direct trains and stopover connections leaving at or
//! after a requested time, in timetable order.

use serde::Serialize;
use tracing::{debug, trace};

use super::config::PlannerConfig;
use super::route::RouteOption;
use super::validate::{ParsedDirection, ParsedTimetable};
use crate::domain::{ClockTime, Direction, DomainError, FareMaster};

/// Options found for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteSearchResult {
    /// Through trains, earliest departure first.
    pub direct: Vec<RouteOption>,
    /// Stopover connections, in leg-1 timetable order.
    pub stopover: Vec<RouteOption>,
}

impl RouteSearchResult {
    /// A result with no options.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.stopover.is_empty()
    }
}

/// Route planner over a validated timetable.
///
/// The timetable is validated once in [`Planner::new`]; queries after that
/// only fail on a malformed requested time.
#[derive(Debug, Clone)]
pub struct Planner<'a> {
    timetable: ParsedTimetable<'a>,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner, validating the record's timetable.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DataInvalid`] with the timetable validator's
    /// reason if any section is malformed.
    pub fn new(master: &'a FareMaster, config: &'a PlannerConfig) -> Result<Self, DomainError> {
        let timetable = ParsedTimetable::parse(master).map_err(|reason| {
            debug!(%reason, "cannot plan over invalid timetable");
            DomainError::DataInvalid(reason)
        })?;

        Ok(Self { timetable, config })
    }

    /// Find the next options leaving at or after `departure_time` ("HH:MM").
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InputFormatInvalid`] if `departure_time` is not
    /// a zero-padded 24-hour "HH:MM" time.
    pub fn next_options(
        &self,
        direction: Direction,
        departure_time: &str,
    ) -> Result<RouteSearchResult, DomainError> {
        let after =
            ClockTime::parse(departure_time).map_err(|_| DomainError::InputFormatInvalid {
                field: "departureTime",
                value: departure_time.to_string(),
            })?;

        Ok(self.next_options_after(direction, after))
    }

    /// Find the next options leaving at or after `after`.
    pub fn next_options_after(&self, direction: Direction, after: ClockTime) -> RouteSearchResult {
        let table = self.timetable.get(direction);
        let max = self.config.max_options;

        let direct = next_direct(table, after, max);
        let stopover = next_stopovers(table, after, self.timetable.transfer_min, max);

        debug!(
            %direction,
            %after,
            direct = direct.len(),
            stopover = stopover.len(),
            "route search complete"
        );

        RouteSearchResult { direct, stopover }
    }
}

fn next_direct(table: &ParsedDirection<'_>, after: ClockTime, max: usize) -> Vec<RouteOption> {
    table
        .direct
        .iter()
        .filter(|train| train.depart >= after)
        .take(max)
        .map(RouteOption::direct)
        .collect()
}

/// Pair each qualifying leg-1 train with the first leg-2 train that leaves
/// at least `transfer_min` after it arrives.
///
/// The first feasible leg 2 is taken even if a later one would arrive
/// sooner. Leg-1 trains with no connection are skipped, and a leg-2 train
/// may serve several leg-1 trains.
fn next_stopovers(
    table: &ParsedDirection<'_>,
    after: ClockTime,
    transfer_min: u64,
    max: usize,
) -> Vec<RouteOption> {
    let mut options = Vec::new();

    for first in table.leg1.iter().filter(|train| train.depart >= after) {
        if options.len() >= max {
            break;
        }

        let connection = table.leg2.iter().find(|second| {
            second
                .depart
                .minutes_after(first.arrive)
                .is_some_and(|wait| u64::from(wait) >= transfer_min)
        });

        let Some(option) = connection.and_then(|second| RouteOption::stopover(first, second))
        else {
            trace!(train = %first.entry.train_id, "no connection at via station");
            continue;
        };

        trace!(
            first = %first.entry.train_id,
            second = %option.legs()[1].train_id,
            wait = ?option.transfer_wait_min(),
            "matched connection"
        );
        options.push(option);
    }

    options
}

/// Find up to `max_options` direct and stopover options leaving at or after
/// `departure_time`.
///
/// This is the one-shot form of [`Planner`]: it validates the timetable on
/// every call.
///
/// # Errors
///
/// - [`DomainError::DataInvalid`] if the timetable fails validation
/// - [`DomainError::InputFormatInvalid`] if `departure_time` is not "HH:MM"
///
/// # Examples
///
/// ```
/// use stopover_planner::domain::{Direction, FareMaster};
/// use stopover_planner::planner::find_next_route_options;
///
/// let master = FareMaster::sample().unwrap();
/// let result = find_next_route_options(&master, Direction::YasuToOsaka, "09:00", 3).unwrap();
///
/// assert_eq!(result.direct[0].depart_at().to_string(), "09:12");
/// assert_eq!(result.stopover[0].transfer_wait_min(), Some(7));
/// ```
pub fn find_next_route_options(
    master: &FareMaster,
    direction: Direction,
    departure_time: &str,
    max_options: usize,
) -> Result<RouteSearchResult, DomainError> {
    let config = PlannerConfig::new(max_options);
    Planner::new(master, &config)?.next_options(direction, departure_time)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_time() -> impl Strategy<Value = ClockTime> {
        (0u16..24 * 60).prop_map(|m| ClockTime::from_minutes(m).unwrap())
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::YasuToOsaka), Just(Direction::OsakaToYasu)]
    }

    proptest! {
        /// Every option respects the requested time, the cap, and its own
        /// duration and transfer arithmetic.
        #[test]
        fn options_are_consistent(
            after in any_time(),
            direction in any_direction(),
            max in 0usize..6,
        ) {
            let master = FareMaster::sample().unwrap();
            let config = PlannerConfig::new(max);
            let planner = Planner::new(&master, &config).unwrap();
            let result = planner.next_options_after(direction, after);
            let transfer = master.timetable.transfer_min;

            prop_assert!(result.direct.len() <= max);
            prop_assert!(result.stopover.len() <= max);

            for option in &result.direct {
                prop_assert!(option.depart_at() >= after);
                prop_assert_eq!(option.transfer_wait_min(), None);
                prop_assert_eq!(
                    Some(option.duration_min()),
                    option.arrive_at().minutes_after(option.depart_at())
                );
            }

            for option in &result.stopover {
                prop_assert!(option.depart_at() >= after);
                let legs = option.legs();
                prop_assert_eq!(legs.len(), 2);

                let leg1_arrive = ClockTime::parse(&legs[0].arrive_at).unwrap();
                let leg2_depart = ClockTime::parse(&legs[1].depart_at).unwrap();
                let wait = leg2_depart.minutes_after(leg1_arrive).unwrap();
                prop_assert!(i64::from(wait) >= transfer);
                prop_assert_eq!(option.transfer_wait_min(), Some(wait));
            }
        }

        /// Direct departures come out in non-decreasing order.
        #[test]
        fn direct_options_sorted(after in any_time(), direction in any_direction()) {
            let master = FareMaster::sample().unwrap();
            let result = find_next_route_options(&master, direction, &after.to_string(), 10).unwrap();
            for pair in result.direct.windows(2) {
                prop_assert!(pair[0].depart_at() <= pair[1].depart_at());
            }
        }
    }
}
