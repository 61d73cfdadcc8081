//! Bedroom, bathroom, and floor-area fit.

use rentscore_core::{Apartment, Settings};

use crate::math::to_score;

const MATCH_MAX: f64 = 40.0;
const PENALTY_PER_UNIT: f64 = 20.0;
const FULL_SQFT_BONUS: f64 = 20.0;
const PARTIAL_SQFT_BONUS: f64 = 10.0;
const PARTIAL_SQFT_SHARE: f64 = 0.8;

/// Score the unit's layout against the ideal counts and area.
///
/// Bedrooms and bathrooms each earn up to 40 points, losing 20 per unit of
/// difference; fractional bathroom differences are penalised linearly. Floor
/// area adds 20 at or above the ideal, 10 from 80% of it, and 0 below.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "parts are summed before rounding")]
pub fn score_rooms(apartment: &Apartment, settings: &Settings) -> u8 {
    let bedrooms = count_match(
        f64::from(apartment.bedrooms),
        f64::from(settings.ideal_bedrooms()),
    );
    let bathrooms = count_match(apartment.bathrooms, settings.ideal_bathrooms());
    to_score(bedrooms + bathrooms + sqft_bonus(apartment.sqft, settings.ideal_sqft()))
}

#[expect(clippy::float_arithmetic, reason = "linear penalty on the difference")]
fn count_match(actual: f64, ideal: f64) -> f64 {
    (MATCH_MAX - PENALTY_PER_UNIT * (actual - ideal).abs()).max(0.0)
}

#[expect(clippy::float_arithmetic, reason = "80% threshold of the ideal area")]
fn sqft_bonus(sqft: u32, ideal: u32) -> f64 {
    if sqft >= ideal {
        FULL_SQFT_BONUS
    } else if f64::from(sqft) >= PARTIAL_SQFT_SHARE * f64::from(ideal) {
        PARTIAL_SQFT_BONUS
    } else {
        0.0
    }
}
