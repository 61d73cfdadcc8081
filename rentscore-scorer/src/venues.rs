//! Density and quality of restaurants and nightlife.

use rentscore_core::VenueFormula;

use crate::math::{ratio, to_score};

const SUB_SCORE_MAX: u8 = 50;
const QUALITY_FULL_AT: f64 = 4.5;
const NEUTRAL_QUALITY: u8 = 25;
const UNRATED_QUALITY: u8 = 35;

/// Restaurants reach full density marks at this count.
pub const RESTAURANT_DENSITY_FULL_AT: f64 = 20.0;
/// Nightlife venues reach full density marks at this count.
pub const NIGHTLIFE_DENSITY_FULL_AT: f64 = 10.0;

/// Score a venue category.
///
/// The rated form adds a 50-point density sub-score to a 50-point quality
/// sub-score driven by the average rating (`25` without one). The unrated
/// form replaces quality with a flat `35` and caps the sum at `100`.
#[must_use]
pub fn score_venues(
    count: u32,
    avg_rating: Option<f64>,
    full_at: f64,
    formula: VenueFormula,
) -> u8 {
    match formula {
        VenueFormula::Rated => {
            density(count, full_at).min(SUB_SCORE_MAX) + quality(avg_rating)
        }
        VenueFormula::Unrated => density(count, full_at)
            .saturating_add(UNRATED_QUALITY)
            .min(100),
    }
}

/// [`score_venues`] with the restaurant density denominator.
///
/// # Examples
/// ```
/// use rentscore_core::VenueFormula;
/// use rentscore_scorer::score_restaurants;
///
/// assert_eq!(score_restaurants(25, Some(4.2), VenueFormula::Rated), 97);
/// assert_eq!(score_restaurants(10, None, VenueFormula::Unrated), 60);
/// ```
#[must_use]
pub fn score_restaurants(count: u32, avg_rating: Option<f64>, formula: VenueFormula) -> u8 {
    score_venues(count, avg_rating, RESTAURANT_DENSITY_FULL_AT, formula)
}

/// [`score_venues`] with the nightlife density denominator.
#[must_use]
pub fn score_nightlife(count: u32, avg_rating: Option<f64>, formula: VenueFormula) -> u8 {
    score_venues(count, avg_rating, NIGHTLIFE_DENSITY_FULL_AT, formula)
}

#[expect(clippy::float_arithmetic, reason = "density scaled to fifty points")]
fn density(count: u32, full_at: f64) -> u8 {
    to_score(ratio(count, full_at) * f64::from(SUB_SCORE_MAX))
}

#[expect(clippy::float_arithmetic, reason = "rating scaled to fifty points")]
fn quality(avg_rating: Option<f64>) -> u8 {
    avg_rating.map_or(NEUTRAL_QUALITY, |rating| {
        to_score(rating / QUALITY_FULL_AT * f64::from(SUB_SCORE_MAX)).min(SUB_SCORE_MAX)
    })
}
