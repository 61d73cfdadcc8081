//! Facade crate for the rentscore listing engine.
//!
//! This crate re-exports the core domain types and the category scorer, and
//! exposes survey assembly and amenity classification behind the `data`
//! feature.

#![forbid(unsafe_code)]

pub use rentscore_core::{
    AmenityKey, AmenitySet, Apartment, Category, CrimePolicy, DriveTimeEstimator, GeoPoint,
    GroceryStore, ListingScorer, MAX_SCORE, NeighborhoodFacts, SchoolFormula, ScoreColor,
    ScoreColors, ScoreError, ScoreVector, ScoringPolicy, Settings, StraightLineEstimator,
    TransitLevel, VenueFormula,
};
pub use rentscore_scorer::CategoryScorer;

#[cfg(feature = "data")]
pub use rentscore_data::{
    FloorPlan, NeighborhoodSurvey, SurveyError, SurveyPlace, classify_phrases, classify_text,
    select_floor_plans,
};

/// Score a listing with the full formula set.
///
/// # Errors
/// Returns [`ScoreError`] when any input is malformed.
///
/// # Examples
/// ```
/// use rentscore::{Apartment, NeighborhoodFacts, Settings, score_listing};
///
/// let vector = score_listing(
///     &Apartment::new(1_750.0, 2, 2.0, 1_000),
///     &NeighborhoodFacts::default(),
///     &Settings::default(),
/// )
/// .expect("valid input");
/// assert_eq!(vector.overall(), 36);
/// ```
pub fn score_listing(
    apartment: &Apartment,
    neighborhood: &NeighborhoodFacts,
    settings: &Settings,
) -> Result<ScoreVector, ScoreError> {
    CategoryScorer::default().score(apartment, neighborhood, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn facade_scores_like_the_category_scorer() {
        let apartment = Apartment::new(2_600.0, 1, 1.0, 700);
        let neighborhood = NeighborhoodFacts::default();
        let settings = Settings::default();
        assert_eq!(
            score_listing(&apartment, &neighborhood, &settings),
            CategoryScorer::default().score(&apartment, &neighborhood, &settings)
        );
    }

    #[rstest]
    fn facade_rejects_negative_rent() {
        let apartment = Apartment::new(-1.0, 2, 2.0, 1_000);
        assert!(
            score_listing(&apartment, &NeighborhoodFacts::default(), &Settings::default())
                .is_err()
        );
    }
}
