//! Inverted crime index, or a fixed placeholder.

use rentscore_core::{CrimePolicy, MAX_SCORE};

use crate::math::to_score;

const NO_DATA: u8 = 50;

/// Score the crime category under `policy`.
///
/// With [`CrimePolicy::Computed`] the index is inverted (`100 - index`,
/// floored at 0) and an absent index scores `50`. With
/// [`CrimePolicy::Fixed`] the constant is returned regardless of input.
///
/// # Examples
/// ```
/// use rentscore_core::CrimePolicy;
/// use rentscore_scorer::score_crime;
///
/// assert_eq!(score_crime(Some(35.0), CrimePolicy::Computed), 65);
/// assert_eq!(score_crime(None, CrimePolicy::Computed), 50);
/// assert_eq!(score_crime(Some(5.0), CrimePolicy::placeholder()), 65);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "linear inversion of the index")]
pub fn score_crime(crime_index: Option<f64>, policy: CrimePolicy) -> u8 {
    match policy {
        CrimePolicy::Fixed(score) => score.min(MAX_SCORE),
        CrimePolicy::Computed => crime_index.map_or(NO_DATA, |index| {
            to_score((f64::from(MAX_SCORE) - index).max(0.0))
        }),
    }
}
