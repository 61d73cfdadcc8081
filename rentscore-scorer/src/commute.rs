//! Drive time and transit access.

use rentscore_core::TransitLevel;

/// Drive-time steps as `(upper bound in minutes, points)`.
const DRIVE_STEPS: [(f64, u8); 4] = [(10.0, 70), (20.0, 55), (30.0, 40), (45.0, 25)];
const LONG_DRIVE: u8 = 10;

/// Step score for the drive plus a transit bonus.
///
/// # Examples
/// ```
/// use rentscore_core::TransitLevel;
/// use rentscore_scorer::score_commute;
///
/// assert_eq!(score_commute(5.0, TransitLevel::Nearby), 100);
/// assert_eq!(score_commute(60.0, TransitLevel::None), 10);
/// ```
#[must_use]
pub fn score_commute(drive_minutes: f64, transit: TransitLevel) -> u8 {
    let drive = DRIVE_STEPS
        .iter()
        .find(|(limit, _)| drive_minutes <= *limit)
        .map_or(LONG_DRIVE, |(_, points)| *points);
    drive + transit_bonus(transit)
}

const fn transit_bonus(transit: TransitLevel) -> u8 {
    match transit {
        TransitLevel::Nearby => 30,
        TransitLevel::Some => 15,
        TransitLevel::None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 70)]
    #[case(10.0, 70)]
    #[case(10.5, 55)]
    #[case(20.0, 55)]
    #[case(30.0, 40)]
    #[case(45.0, 25)]
    #[case(45.1, 10)]
    #[case(240.0, 10)]
    fn drive_steps(#[case] minutes: f64, #[case] expected: u8) {
        assert_eq!(score_commute(minutes, TransitLevel::None), expected);
    }

    #[rstest]
    #[case(TransitLevel::Nearby, 85)]
    #[case(TransitLevel::Some, 70)]
    #[case(TransitLevel::None, 55)]
    fn transit_bonus_is_added(#[case] transit: TransitLevel, #[case] expected: u8) {
        assert_eq!(score_commute(18.0, transit), expected);
    }

    #[rstest]
    fn unrecognised_transit_label_earns_nothing() {
        assert_eq!(score_commute(5.0, TransitLevel::from_label("ferry")), 70);
    }
}
