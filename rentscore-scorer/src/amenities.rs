//! Required and optional amenity coverage.

use rentscore_core::{Apartment, Settings};

use crate::math::{count_of, ratio, to_score};

/// `100` when every necessity is present, otherwise `0`.
///
/// An empty necessity set is trivially satisfied.
#[must_use]
pub fn score_necessities(apartment: &Apartment, settings: &Settings) -> u8 {
    if settings.necessities().is_subset(&apartment.amenities) {
        100
    } else {
        0
    }
}

/// Share of nice-to-haves present, as a percentage.
///
/// Returns `100` when the user listed no nice-to-haves.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "share scaled to a percentage")]
pub fn score_nice_to_haves(apartment: &Apartment, settings: &Settings) -> u8 {
    let wanted = settings.nice_to_haves();
    if wanted.is_empty() {
        return 100;
    }
    let present = wanted
        .iter()
        .filter(|amenity| apartment.has_amenity(**amenity))
        .count();
    to_score(ratio(count_of(present), f64::from(count_of(wanted.len()))) * 100.0)
}
