//! Fare record validation.

use tracing::debug;

use crate::domain::{FareMaster, Validation};

/// Check that every fare is a non-negative integer and that `updatedAt`
/// parses.
///
/// Fares are checked in record order (direct, leg 1, leg 2) and the first
/// failure is reported.
///
/// # Examples
///
/// ```
/// use stopover_planner::domain::FareMaster;
/// use stopover_planner::fare::validate_fare_master;
///
/// let mut master = FareMaster::sample().unwrap();
/// assert!(validate_fare_master(&master).is_valid());
///
/// master.updated_at = "invalid-date".into();
/// assert_eq!(
///     validate_fare_master(&master).reason(),
///     Some("updatedAt must be a valid ISO date string"),
/// );
/// ```
pub fn validate_fare_master(master: &FareMaster) -> Validation {
    let fares = [
        ("directFare", master.direct_fare),
        ("stopover.leg1Fare", master.stopover.leg1_fare),
        ("stopover.leg2Fare", master.stopover.leg2_fare),
    ];

    if let Some((field, fare)) = fares.into_iter().find(|(_, fare)| *fare < 0) {
        debug!(field, fare, "rejected fare record");
        return Validation::invalid(format!("{field} must be a non-negative integer"));
    }

    if let Err(e) = master.parsed_updated_at() {
        debug!(error = %e, "rejected fare record");
        return Validation::invalid("updatedAt must be a valid ISO date string");
    }

    Validation::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FareMaster {
        FareMaster::sample().unwrap()
    }

    #[test]
    fn sample_is_valid() {
        assert_eq!(validate_fare_master(&sample()), Validation::Valid);
    }

    #[test]
    fn zero_fares_are_valid() {
        let mut master = sample();
        master.direct_fare = 0;
        master.stopover.leg1_fare = 0;
        master.stopover.leg2_fare = 0;
        assert!(validate_fare_master(&master).is_valid());
    }

    #[test]
    fn negative_direct_fare_rejected() {
        let mut master = sample();
        master.direct_fare = -10;
        assert_eq!(
            validate_fare_master(&master).reason(),
            Some("directFare must be a non-negative integer")
        );
    }

    #[test]
    fn negative_leg_fares_rejected() {
        let mut master = sample();
        master.stopover.leg1_fare = -1;
        assert_eq!(
            validate_fare_master(&master).reason(),
            Some("stopover.leg1Fare must be a non-negative integer")
        );

        let mut master = sample();
        master.stopover.leg2_fare = i64::MIN;
        assert_eq!(
            validate_fare_master(&master).reason(),
            Some("stopover.leg2Fare must be a non-negative integer")
        );
    }

    #[test]
    fn first_bad_fare_wins() {
        let mut master = sample();
        master.stopover.leg1_fare = -1;
        master.stopover.leg2_fare = -1;
        master.updated_at = "nope".into();
        assert_eq!(
            validate_fare_master(&master).reason(),
            Some("stopover.leg1Fare must be a non-negative integer")
        );
    }

    #[test]
    fn invalid_updated_at_rejected() {
        for bad in ["invalid-date", "", "2025-13-01", "15/03/2025"] {
            let mut master = sample();
            master.updated_at = bad.into();
            assert_eq!(
                validate_fare_master(&master).reason(),
                Some("updatedAt must be a valid ISO date string"),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn other_iso_forms_accepted() {
        for good in [
            "2025-03-15T09:00+09:00",
            "2025-03-15T09:00Z",
            "2025-03",
            "2025",
        ] {
            let mut master = sample();
            master.updated_at = good.into();
            assert!(validate_fare_master(&master).is_valid(), "{good:?} should be accepted");
        }
    }

    #[test]
    fn timetable_problems_are_not_fare_problems() {
        let mut master = sample();
        master.timetable.transfer_min = -1;
        master.timetable.weekday.yasu_to_osaka.direct.clear();
        assert!(validate_fare_master(&master).is_valid());
    }
}
