//! Direct versus stopover fare comparison.

use std::cmp::Ordering;

use serde::Serialize;

use super::validate_fare_master;
use crate::domain::{DomainError, FareMaster};

/// Which way of buying the journey costs less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cheaper {
    Direct,
    Stopover,
    Equal,
}

/// Outcome of comparing the through fare with the two stopover fares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub direct_fare: i64,
    /// Leg 1 plus leg 2.
    pub stopover_total_fare: i64,
    /// Absolute difference between the two totals, in yen.
    pub diff_yen: i64,
    pub cheaper: Cheaper,
}

/// Compare the direct fare with the stopover total.
///
/// Re-validates the record first, so this can be called without a prior
/// [`validate_fare_master`] pass.
///
/// # Errors
///
/// Returns [`DomainError::DataInvalid`] with the validator's reason if the
/// record is invalid, or if the two leg fares overflow when summed.
///
/// # Examples
///
/// ```
/// use stopover_planner::domain::FareMaster;
/// use stopover_planner::fare::{Cheaper, compare_fare};
///
/// let master = FareMaster::sample().unwrap();
/// let result = compare_fare(&master).unwrap();
/// assert_eq!(result.stopover_total_fare, 1090);
/// assert_eq!(result.cheaper, Cheaper::Stopover);
/// assert_eq!(result.diff_yen, 80);
/// ```
pub fn compare_fare(master: &FareMaster) -> Result<ComparisonResult, DomainError> {
    validate_fare_master(master).into_result()?;

    let direct_fare = master.direct_fare;
    let stopover_total_fare = master
        .stopover
        .leg1_fare
        .checked_add(master.stopover.leg2_fare)
        .ok_or_else(|| DomainError::DataInvalid("stopover fare total overflows".into()))?;

    // Both sides are non-negative, so the difference cannot overflow.
    let diff_yen = (direct_fare - stopover_total_fare).abs();

    let cheaper = match direct_fare.cmp(&stopover_total_fare) {
        Ordering::Equal => Cheaper::Equal,
        Ordering::Less => Cheaper::Direct,
        Ordering::Greater => Cheaper::Stopover,
    };

    Ok(ComparisonResult {
        direct_fare,
        stopover_total_fare,
        diff_yen,
        cheaper,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_direct_fare(direct_fare: i64) -> FareMaster {
        let mut master = FareMaster::sample().unwrap();
        master.direct_fare = direct_fare;
        master
    }

    #[test]
    fn stopover_cheaper_for_sample() {
        let result = compare_fare(&FareMaster::sample().unwrap()).unwrap();
        assert_eq!(
            result,
            ComparisonResult {
                direct_fare: 1170,
                stopover_total_fare: 1090,
                diff_yen: 80,
                cheaper: Cheaper::Stopover,
            }
        );
    }

    #[test]
    fn direct_cheaper() {
        let result = compare_fare(&with_direct_fare(1000)).unwrap();
        assert_eq!(result.cheaper, Cheaper::Direct);
        assert_eq!(result.diff_yen, 90);
    }

    #[test]
    fn equal_fares() {
        let result = compare_fare(&with_direct_fare(1090)).unwrap();
        assert_eq!(result.cheaper, Cheaper::Equal);
        assert_eq!(result.diff_yen, 0);
    }

    #[test]
    fn negative_fare_fails_with_reason() {
        let err = compare_fare(&with_direct_fare(-10)).unwrap_err();
        assert_eq!(
            err,
            DomainError::DataInvalid("directFare must be a non-negative integer".into())
        );
    }

    #[test]
    fn invalid_timestamp_fails() {
        let mut master = FareMaster::sample().unwrap();
        master.updated_at = "invalid-date".into();
        assert!(compare_fare(&master).is_err());
    }

    #[test]
    fn leg_sum_overflow_fails() {
        let mut master = FareMaster::sample().unwrap();
        master.stopover.leg1_fare = i64::MAX;
        master.stopover.leg2_fare = 1;
        let err = compare_fare(&master).unwrap_err();
        assert_eq!(err.reason(), "stopover fare total overflows");
    }

    #[test]
    fn serializes_for_display() {
        let result = compare_fare(&FareMaster::sample().unwrap()).unwrap();
        assert_eq!(
            serde_json::to_value(result).unwrap(),
            serde_json::json!({
                "directFare": 1170,
                "stopoverTotalFare": 1090,
                "diffYen": 80,
                "cheaper": "stopover",
            })
        );
    }
}
