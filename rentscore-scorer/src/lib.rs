//! Category formulas and the aggregating scorer for rentscore.
//!
//! Each of the ten categories has one pure function in this crate. The
//! [`CategoryScorer`] runs them in report order under a
//! [`ScoringPolicy`](rentscore_core::ScoringPolicy) and implements
//! [`ListingScorer`](rentscore_core::ListingScorer), so callers that accept
//! the trait can swap in other scorers.
//!
//! # Examples
//!
//! ```
//! use rentscore_core::{Apartment, ListingScorer, NeighborhoodFacts, Settings};
//! use rentscore_scorer::CategoryScorer;
//!
//! let scorer = CategoryScorer::default();
//! let vector = scorer
//!     .score(
//!         &Apartment::new(1_750.0, 2, 2.0, 1_000),
//!         &NeighborhoodFacts::default(),
//!         &Settings::default(),
//!     )
//!     .expect("valid input");
//! assert_eq!(vector.overall(), 36);
//! ```

#![forbid(unsafe_code)]

use log::debug;
use rentscore_core::{
    Apartment, Category, ListingScorer, NeighborhoodFacts, SchoolFormula, ScoreError,
    ScoreVector, ScoringPolicy, Settings,
};

mod amenities;
mod commute;
mod crime;
mod grocery;
mod math;
mod price;
mod rooms;
mod schools;
mod venues;

pub use amenities::{score_necessities, score_nice_to_haves};
pub use commute::score_commute;
pub use crime::score_crime;
pub use grocery::score_grocery;
pub use price::score_price;
pub use rooms::score_rooms;
pub use schools::{score_school_density, score_school_ratings};
pub use venues::{
    NIGHTLIFE_DENSITY_FULL_AT, RESTAURANT_DENSITY_FULL_AT, score_nightlife, score_restaurants,
    score_venues,
};

/// Aggregating [`ListingScorer`] over the ten category formulas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryScorer {
    policy: ScoringPolicy,
}

impl CategoryScorer {
    /// Build a scorer applying `policy`.
    #[must_use]
    pub const fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Formula selection in use.
    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Score a single category without validating inputs.
    #[must_use]
    pub fn category_score(
        &self,
        category: Category,
        apartment: &Apartment,
        neighborhood: &NeighborhoodFacts,
        settings: &Settings,
    ) -> u8 {
        match category {
            Category::Price => score_price(apartment.rent, settings),
            Category::Rooms => score_rooms(apartment, settings),
            Category::Necessities => score_necessities(apartment, settings),
            Category::NiceToHaves => score_nice_to_haves(apartment, settings),
            Category::Schools => match self.policy.schools {
                SchoolFormula::Ratings => score_school_ratings(&neighborhood.school_ratings),
                SchoolFormula::Density => score_school_density(neighborhood.school_count),
            },
            Category::Crime => score_crime(neighborhood.crime_index, self.policy.crime),
            Category::Restaurants => score_restaurants(
                neighborhood.restaurant_count,
                neighborhood.restaurant_avg_rating,
                self.policy.venues,
            ),
            Category::Commute => {
                score_commute(neighborhood.drive_minutes, neighborhood.transit_available)
            }
            Category::Nightlife => score_nightlife(
                neighborhood.nightlife_count,
                neighborhood.nightlife_avg_rating,
                self.policy.venues,
            ),
            Category::Grocery => score_grocery(&neighborhood.grocery_stores),
        }
    }
}

impl ListingScorer for CategoryScorer {
    fn score(
        &self,
        apartment: &Apartment,
        neighborhood: &NeighborhoodFacts,
        settings: &Settings,
    ) -> Result<ScoreVector, ScoreError> {
        settings.check()?;
        apartment.check()?;
        neighborhood.validate()?;
        let vector = ScoreVector::from_fn(|category| {
            let score = self.category_score(category, apartment, neighborhood, settings);
            debug!("{category} scored {score}");
            score
        });
        debug!("overall score {}", vector.overall());
        Ok(vector)
    }
}
