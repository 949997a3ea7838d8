//! Route options returned by the planner.

use serde::Serialize;

use super::validate::ScheduledTrain;
use crate::domain::{ClockTime, TimetableEntry};

/// How a route gets from origin to destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// One through train.
    Direct,
    /// Two trains with an exit and re-entry at the via station.
    Stopover,
}

/// One way to make the journey, derived fresh for each query.
///
/// # Invariants
///
/// - `arrive_at > depart_at`, and `duration_min` is the gap between them
/// - Direct options have one leg and no transfer wait
/// - Stopover options have two legs and a transfer wait
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    route_type: RouteKind,
    depart_at: ClockTime,
    arrive_at: ClockTime,
    duration_min: u16,
    legs: Vec<TimetableEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    transfer_wait_min: Option<u16>,
}

impl RouteOption {
    pub(crate) fn direct(train: &ScheduledTrain<'_>) -> Self {
        Self {
            route_type: RouteKind::Direct,
            depart_at: train.depart,
            arrive_at: train.arrive,
            duration_min: train.duration_min,
            legs: vec![train.entry.clone()],
            transfer_wait_min: None,
        }
    }

    /// Join two legs. Returns `None` unless `second` departs no earlier than
    /// `first` arrives.
    pub(crate) fn stopover(first: &ScheduledTrain<'_>, second: &ScheduledTrain<'_>) -> Option<Self> {
        let transfer_wait_min = second.depart.minutes_after(first.arrive)?;
        let duration_min = second.arrive.minutes_after(first.depart)?;

        Some(Self {
            route_type: RouteKind::Stopover,
            depart_at: first.depart,
            arrive_at: second.arrive,
            duration_min,
            legs: vec![first.entry.clone(), second.entry.clone()],
            transfer_wait_min: Some(transfer_wait_min),
        })
    }

    pub fn kind(&self) -> RouteKind {
        self.route_type
    }

    pub fn depart_at(&self) -> ClockTime {
        self.depart_at
    }

    pub fn arrive_at(&self) -> ClockTime {
        self.arrive_at
    }

    /// Minutes from first departure to final arrival.
    pub fn duration_min(&self) -> u16 {
        self.duration_min
    }

    /// The timetable entries used, in travel order.
    pub fn legs(&self) -> &[TimetableEntry] {
        &self.legs
    }

    /// Minutes spent at the via station. `None` for direct routes.
    pub fn transfer_wait_min(&self) -> Option<u16> {
        self.transfer_wait_min
    }
}
