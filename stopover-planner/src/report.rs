//! Display-ready summary of one fare and timetable query.
//!
//! A `FareReport` bundles everything a presentation layer needs to render
//! the comparison page, and degrades the same way the page does: bad fare
//! data hides everything else, bad timetable data hides only the routes,
//! and an unparsable requested time shows empty route lists.

use serde::Serialize;
use tracing::debug;

use crate::domain::{Direction, DomainError, FareMaster, Station};
use crate::fare::{ComparisonResult, compare_fare};
use crate::planner::{Planner, PlannerConfig, RouteSearchResult};

/// Everything needed to render one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FareReport {
    pub direction: Direction,
    pub origin: Station,
    pub destination: Station,
    /// Requested departure time, as given.
    pub departure_time: String,
    pub fare: FareSection,
}

/// The fare part of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FareSection {
    /// The fare record failed validation; nothing else is shown.
    Invalid { reason: String },
    Ready(FareSummary),
}

/// Fare comparison with the per-leg breakdown and timetable results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FareSummary {
    pub comparison: ComparisonResult,
    pub via: Station,
    pub leg1_fare: i64,
    pub leg2_fare: i64,
    /// Last fare revision, RFC 3339.
    pub updated_at: String,
    pub timetable: TimetableSection,
}

/// The timetable part of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TimetableSection {
    /// The timetable failed validation; no routes are shown.
    Invalid { reason: String },
    Ready(RouteSearchResult),
}

impl FareReport {
    /// Build the report for a direction and requested departure time.
    ///
    /// # Examples
    ///
    /// ```
    /// use stopover_planner::domain::{Direction, FareMaster};
    /// use stopover_planner::planner::PlannerConfig;
    /// use stopover_planner::report::{FareReport, FareSection};
    ///
    /// let master = FareMaster::sample().unwrap();
    /// let report = FareReport::build(&master, Direction::YasuToOsaka, "09:00", &PlannerConfig::default());
    ///
    /// let FareSection::Ready(summary) = &report.fare else { panic!("sample is valid") };
    /// assert_eq!(summary.comparison.diff_yen, 80);
    /// ```
    pub fn build(
        master: &FareMaster,
        direction: Direction,
        departure_time: &str,
        config: &PlannerConfig,
    ) -> Self {
        let fare = match summarize(master, direction, departure_time, config) {
            Ok(summary) => FareSection::Ready(summary),
            Err(e) => FareSection::Invalid { reason: e.reason() },
        };

        Self {
            direction,
            origin: direction.origin(),
            destination: direction.destination(),
            departure_time: departure_time.to_string(),
            fare,
        }
    }
}

fn summarize(
    master: &FareMaster,
    direction: Direction,
    departure_time: &str,
    config: &PlannerConfig,
) -> Result<FareSummary, DomainError> {
    let comparison = compare_fare(master)?;
    let updated_at = master
        .parsed_updated_at()
        .map_err(|e| DomainError::DataInvalid(e.to_string()))?
        .to_rfc3339();

    Ok(FareSummary {
        comparison,
        via: master.stopover.via,
        leg1_fare: master.stopover.leg1_fare,
        leg2_fare: master.stopover.leg2_fare,
        updated_at,
        timetable: timetable_section(master, direction, departure_time, config),
    })
}

fn timetable_section(
    master: &FareMaster,
    direction: Direction,
    departure_time: &str,
    config: &PlannerConfig,
) -> TimetableSection {
    let planner = match Planner::new(master, config) {
        Ok(planner) => planner,
        Err(e) => return TimetableSection::Invalid { reason: e.reason() },
    };

    let routes = planner
        .next_options(direction, departure_time)
        .unwrap_or_else(|e| {
            debug!(error = %e, "showing no routes");
            RouteSearchResult::empty()
        });

    TimetableSection::Ready(routes)
}
