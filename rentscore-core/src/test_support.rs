//! Sample listings and a canned scorer for unit and behaviour tests.

use crate::{
    AmenityKey, Apartment, Category, GroceryStore, ListingScorer, NeighborhoodFacts, ScoreError,
    ScoreVector, Settings, TransitLevel,
};

/// The reference listing: a 2 bed, 2 bath unit at $2,200 in a busy suburb.
///
/// With [`Settings::default`] and the full policy it scores
/// [`SAMPLE_SCORES`].
#[must_use]
pub fn sample_apartment() -> Apartment {
    Apartment::new(2_200.0, 2, 2.0, 1_050).with_amenities([
        AmenityKey::CoveredParking,
        AmenityKey::Dishwasher,
        AmenityKey::InUnitLaundry,
        AmenityKey::Ac,
        AmenityKey::Gym,
        AmenityKey::Pool,
        AmenityKey::PackageLockers,
    ])
}

/// Neighborhood facts paired with [`sample_apartment`].
#[must_use]
pub fn sample_neighborhood() -> NeighborhoodFacts {
    NeighborhoodFacts {
        school_ratings: vec![7, 8, 6],
        school_count: 3,
        crime_index: Some(35.0),
        restaurant_count: 25,
        restaurant_avg_rating: Some(4.2),
        drive_minutes: 18.0,
        transit_available: TransitLevel::Nearby,
        nightlife_count: 12,
        nightlife_avg_rating: Some(4.0),
        grocery_stores: vec![
            GroceryStore::new("Trader Joe's", 0.8),
            GroceryStore::new("Cub Foods", 1.2),
            GroceryStore::new("Costco", 4.5),
            GroceryStore::new("Aldi", 1.5),
            GroceryStore::new("Target", 0.5),
        ],
    }
}

/// Expected category scores for the sample listing, in report order.
pub const SAMPLE_SCORES: [u8; 10] = [55, 100, 100, 75, 70, 65, 97, 85, 94, 82];

/// Expected overall score for the sample listing.
pub const SAMPLE_OVERALL: u8 = 82;

/// [`SAMPLE_SCORES`] assembled into a vector.
#[must_use]
pub fn sample_vector() -> ScoreVector {
    ScoreVector::from_fn(|category| {
        Category::ALL
            .into_iter()
            .zip(SAMPLE_SCORES)
            .find_map(|(candidate, score)| (candidate == category).then_some(score))
            .unwrap_or_default()
    })
}

/// Default settings, already validated.
#[must_use]
pub fn sample_settings() -> Settings {
    Settings::default()
}

/// [`ListingScorer`] that returns the same vector for every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedScorer {
    vector: ScoreVector,
}

impl FixedScorer {
    /// Return `score` for every category.
    #[must_use]
    pub fn uniform(score: u8) -> Self {
        Self {
            vector: ScoreVector::from_fn(|_| score),
        }
    }

    /// Return `vector` for every listing.
    #[must_use]
    pub const fn with_vector(vector: ScoreVector) -> Self {
        Self { vector }
    }
}

impl ListingScorer for FixedScorer {
    fn score(
        &self,
        _apartment: &Apartment,
        _neighborhood: &NeighborhoodFacts,
        _settings: &Settings,
    ) -> Result<ScoreVector, ScoreError> {
        Ok(self.vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn samples_are_valid() {
        assert!(sample_apartment().validate().is_ok());
        assert!(sample_neighborhood().validate().is_ok());
        assert!(sample_settings().validate().is_ok());
    }

    #[rstest]
    fn sample_overall_is_the_rounded_mean() {
        let vector = sample_vector();
        assert_eq!(vector.overall(), SAMPLE_OVERALL);
        assert_eq!(vector.get(Category::Restaurants), 97);
    }

    #[rstest]
    fn fixed_scorer_ignores_input() {
        let scorer = FixedScorer::uniform(40);
        let vector = scorer
            .score(
                &sample_apartment(),
                &NeighborhoodFacts::default(),
                &sample_settings(),
            )
            .expect("fixed scorer never fails");
        assert_eq!(vector.overall(), 40);
    }
}
