//! School quality from ratings, or school density from a count.

use crate::math::{count_of, ratio, to_score};

const NO_DATA: u8 = 50;
const DENSITY_WEIGHT: f64 = 70.0;
const DENSITY_FULL_AT: f64 = 5.0;
const DENSITY_FLOOR: u8 = 20;

/// Mean rating scaled from `1..=10` to `0..=100`; `50` without ratings.
///
/// # Examples
/// ```
/// use rentscore_scorer::score_school_ratings;
///
/// assert_eq!(score_school_ratings(&[7, 8, 6]), 70);
/// assert_eq!(score_school_ratings(&[]), 50);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "mean rating scaled by ten")]
pub fn score_school_ratings(ratings: &[u8]) -> u8 {
    if ratings.is_empty() {
        return NO_DATA;
    }
    let sum: u32 = ratings.iter().copied().map(u32::from).sum();
    to_score(ratio(sum, f64::from(count_of(ratings.len()))) * 10.0)
}

/// Density heuristic for when only the number of schools is known.
///
/// `min(100, round(70 * count / 5) + 20)`: twenty points for any location,
/// full marks from six schools up.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "density scaled by its weight")]
pub fn score_school_density(count: u32) -> u8 {
    to_score(DENSITY_WEIGHT * ratio(count, DENSITY_FULL_AT))
        .saturating_add(DENSITY_FLOOR)
        .min(100)
}
