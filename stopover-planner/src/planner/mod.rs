//! Timetable validation and next-departure route search.
//!
//! This module answers: "If I leave at this time, what are my next few
//! direct trains, and my next few connections with a stopover at Kyoto?"
//!
//! Direct options are the next through trains in timetable order. Stopover
//! options pair each qualifying first-leg train with the earliest second-leg
//! train that respects the minimum transfer time.

mod config;
mod route;
mod search;
mod validate;

pub use config::PlannerConfig;
pub use route::{RouteKind, RouteOption};
pub use search::{Planner, RouteSearchResult, find_next_route_options};
pub use validate::validate_timetable;
