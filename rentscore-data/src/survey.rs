//! Turn nearby places reported by a map-data service into
//! [`NeighborhoodFacts`].
//!
//! The survey holds places that have already been fetched; no I/O happens
//! here. Distances are great-circle miles from the listing, rounded to two
//! decimals as the facts are presented to users.

use std::collections::BTreeSet;

use log::debug;
use rentscore_core::{
    CommuteError, DriveTimeEstimator, GeoPoint, GroceryStore, NeighborhoodFacts, TransitLevel,
    distance_miles,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name given to places the data source left unnamed.
pub const UNNAMED: &str = "Unnamed";
/// Number of closest grocery stores kept.
pub const MAX_GROCERY_STORES: usize = 15;
const NEARBY_TRANSIT_STOPS: usize = 5;
const SOME_TRANSIT_STOPS: usize = 2;

/// One nearby place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyPlace {
    /// Display name, if the data source has one.
    #[serde(default)]
    pub name: Option<String>,
    /// Position of the place.
    #[serde(flatten)]
    pub location: GeoPoint,
}

impl SurveyPlace {
    /// Construct a named place.
    #[must_use]
    pub fn named(name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            name: Some(name.into()),
            location,
        }
    }

    /// Construct a place without a name.
    #[must_use]
    pub const fn unnamed(location: GeoPoint) -> Self {
        Self {
            name: None,
            location,
        }
    }

    /// Name to display, falling back to [`UNNAMED`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }
}

/// Errors from [`NeighborhoodSurvey::assemble`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurveyError {
    /// The listing's own position is not a valid coordinate.
    #[error("survey origin ({lat}, {lon}) is not a valid coordinate")]
    InvalidOrigin {
        /// Latitude of the origin.
        lat: f64,
        /// Longitude of the origin.
        lon: f64,
    },
    /// A surveyed place has an invalid coordinate.
    #[error("place '{name}' has an invalid coordinate ({lat}, {lon})")]
    InvalidPlace {
        /// Name of the place.
        name: String,
        /// Latitude of the place.
        lat: f64,
        /// Longitude of the place.
        lon: f64,
    },
    /// The drive-time estimate failed.
    #[error(transparent)]
    Commute(#[from] CommuteError),
}

/// Places around a listing, grouped by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodSurvey {
    /// Position of the listing.
    pub origin: GeoPoint,
    /// Restaurants.
    #[serde(default)]
    pub restaurants: Vec<SurveyPlace>,
    /// Cafes; counted with restaurants.
    #[serde(default)]
    pub cafes: Vec<SurveyPlace>,
    /// Supermarkets.
    #[serde(default)]
    pub supermarkets: Vec<SurveyPlace>,
    /// Wholesale clubs, usually surveyed over a wider radius.
    #[serde(default)]
    pub wholesale_clubs: Vec<SurveyPlace>,
    /// Bars.
    #[serde(default)]
    pub bars: Vec<SurveyPlace>,
    /// Nightclubs.
    #[serde(default)]
    pub nightclubs: Vec<SurveyPlace>,
    /// Cinemas.
    #[serde(default)]
    pub cinemas: Vec<SurveyPlace>,
    /// Bus stops.
    #[serde(default)]
    pub bus_stops: Vec<SurveyPlace>,
    /// Rail stations.
    #[serde(default)]
    pub rail_stations: Vec<SurveyPlace>,
    /// Schools.
    #[serde(default)]
    pub schools: Vec<SurveyPlace>,
}

impl NeighborhoodSurvey {
    /// Start an empty survey around `origin`.
    #[must_use]
    pub const fn new(origin: GeoPoint) -> Self {
        Self {
            origin,
            restaurants: Vec::new(),
            cafes: Vec::new(),
            supermarkets: Vec::new(),
            wholesale_clubs: Vec::new(),
            bars: Vec::new(),
            nightclubs: Vec::new(),
            cinemas: Vec::new(),
            bus_stops: Vec::new(),
            rail_stations: Vec::new(),
            schools: Vec::new(),
        }
    }

    /// Build neighborhood facts from the survey.
    ///
    /// Ratings and the crime index stay absent because map data carries
    /// neither; pair the result with
    /// [`ScoringPolicy::proximity_only`](rentscore_core::ScoringPolicy::proximity_only).
    ///
    /// # Errors
    /// Returns [`SurveyError`] when the origin or any place has an invalid
    /// coordinate, or when `estimator` fails.
    pub fn assemble(
        &self,
        commute_target: GeoPoint,
        estimator: &dyn DriveTimeEstimator,
    ) -> Result<NeighborhoodFacts, SurveyError> {
        if !self.origin.is_valid() {
            return Err(SurveyError::InvalidOrigin {
                lat: self.origin.lat,
                lon: self.origin.lon,
            });
        }
        self.check_places()?;

        let grocery_stores = self.grocery_stores();
        let nightlife_count = self.nightlife_count();
        let transit_stops = self.bus_stops.len() + self.rail_stations.len();
        let facts = NeighborhoodFacts {
            school_ratings: Vec::new(),
            school_count: count_of(self.schools.len()),
            crime_index: None,
            restaurant_count: count_of(self.restaurants.len() + self.cafes.len()),
            restaurant_avg_rating: None,
            drive_minutes: estimator.estimate_minutes(self.origin, commute_target)?,
            transit_available: transit_level(transit_stops),
            nightlife_count,
            nightlife_avg_rating: None,
            grocery_stores,
        };
        debug!(
            "survey assembled: {} restaurants, {} grocery stores, {} nightlife, {} transit stops",
            facts.restaurant_count,
            facts.grocery_stores.len(),
            facts.nightlife_count,
            transit_stops
        );
        Ok(facts)
    }

    fn places(&self) -> impl Iterator<Item = &SurveyPlace> {
        [
            &self.restaurants,
            &self.cafes,
            &self.supermarkets,
            &self.wholesale_clubs,
            &self.bars,
            &self.nightclubs,
            &self.cinemas,
            &self.bus_stops,
            &self.rail_stations,
            &self.schools,
        ]
        .into_iter()
        .flatten()
    }

    fn check_places(&self) -> Result<(), SurveyError> {
        match self.places().find(|place| !place.location.is_valid()) {
            Some(place) => Err(SurveyError::InvalidPlace {
                name: place.display_name().to_owned(),
                lat: place.location.lat,
                lon: place.location.lon,
            }),
            None => Ok(()),
        }
    }

    fn stores_by_distance(&self, places: &[SurveyPlace]) -> Vec<GroceryStore> {
        let mut stores: Vec<GroceryStore> = places
            .iter()
            .map(|place| {
                GroceryStore::new(
                    place.display_name(),
                    rounded_miles(self.origin, place.location),
                )
            })
            .collect();
        stores.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
        stores
    }

    /// Supermarkets plus differently named wholesale clubs, closest first.
    fn grocery_stores(&self) -> Vec<GroceryStore> {
        let mut stores = self.stores_by_distance(&self.supermarkets);
        let known: BTreeSet<String> = stores.iter().map(|store| store.name.to_lowercase()).collect();
        stores.extend(
            self.stores_by_distance(&self.wholesale_clubs)
                .into_iter()
                .filter(|club| !known.contains(&club.name.to_lowercase())),
        );
        stores.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
        stores.truncate(MAX_GROCERY_STORES);
        stores
    }

    /// Bars, nightclubs, and cinemas with distinct lower-cased names.
    fn nightlife_count(&self) -> u32 {
        let names: BTreeSet<String> = self
            .bars
            .iter()
            .chain(&self.nightclubs)
            .chain(&self.cinemas)
            .map(|place| place.display_name().to_lowercase())
            .collect();
        count_of(names.len())
    }
}

/// Transit tier for a number of nearby stops and stations.
///
/// # Examples
/// ```
/// use rentscore_core::TransitLevel;
/// use rentscore_data::transit_level;
///
/// assert_eq!(transit_level(5), TransitLevel::Nearby);
/// assert_eq!(transit_level(2), TransitLevel::Some);
/// assert_eq!(transit_level(1), TransitLevel::None);
/// ```
#[must_use]
pub const fn transit_level(stops: usize) -> TransitLevel {
    if stops >= NEARBY_TRANSIT_STOPS {
        TransitLevel::Nearby
    } else if stops >= SOME_TRANSIT_STOPS {
        TransitLevel::Some
    } else {
        TransitLevel::None
    }
}

#[expect(clippy::float_arithmetic, reason = "rounding to hundredths of a mile")]
fn rounded_miles(from: GeoPoint, to: GeoPoint) -> f64 {
    (distance_miles(from, to) * 100.0).round_ties_even() / 100.0
}

fn count_of(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentscore_core::StraightLineEstimator;
    use rstest::{fixture, rstest};

    const ORIGIN: GeoPoint = GeoPoint::new(44.9500, -93.3000);

    /// A point roughly `miles` north of [`ORIGIN`].
    #[expect(clippy::float_arithmetic, reason = "offsets in degrees")]
    fn north(miles: f64) -> GeoPoint {
        GeoPoint::new(ORIGIN.lat + miles / 69.09, ORIGIN.lon)
    }

    #[fixture]
    fn survey() -> NeighborhoodSurvey {
        NeighborhoodSurvey::new(ORIGIN)
    }

    #[rstest]
    fn counts_restaurants_and_cafes_together(mut survey: NeighborhoodSurvey) {
        survey.restaurants = vec![SurveyPlace::named("Pho", north(0.2))];
        survey.cafes = vec![
            SurveyPlace::named("Spyhouse", north(0.3)),
            SurveyPlace::unnamed(north(0.4)),
        ];
        let facts = survey
            .assemble(ORIGIN, &StraightLineEstimator::default())
            .expect("valid survey");
        assert_eq!(facts.restaurant_count, 3);
        assert!(facts.restaurant_avg_rating.is_none());
    }

    #[rstest]
    fn wholesale_clubs_join_groceries_unless_already_listed(mut survey: NeighborhoodSurvey) {
        survey.supermarkets = vec![
            SurveyPlace::named("Cub Foods", north(1.0)),
            SurveyPlace::named("Costco", north(2.0)),
        ];
        survey.wholesale_clubs = vec![
            SurveyPlace::named("COSTCO", north(6.0)),
            SurveyPlace::named("Sam's Club", north(0.5)),
        ];
        let facts = survey
            .assemble(ORIGIN, &StraightLineEstimator::default())
            .expect("valid survey");
        let names: Vec<_> = facts
            .grocery_stores
            .iter()
            .map(|store| store.name.as_str())
            .collect();
        assert_eq!(names, ["Sam's Club", "Cub Foods", "Costco"]);
    }

    #[rstest]
    fn grocery_list_keeps_the_closest_fifteen(mut survey: NeighborhoodSurvey) {
        survey.supermarkets = (0..20_u32)
            .rev()
            .map(|index| SurveyPlace::named(format!("Store {index}"), north(f64::from(index))))
            .collect();
        let facts = survey
            .assemble(ORIGIN, &StraightLineEstimator::default())
            .expect("valid survey");
        assert_eq!(facts.grocery_stores.len(), MAX_GROCERY_STORES);
        assert_eq!(
            facts.grocery_stores.first().map(|store| store.name.as_str()),
            Some("Store 0")
        );
        assert_eq!(
            facts.grocery_stores.last().map(|store| store.name.as_str()),
            Some("Store 14")
        );
    }

    #[rstest]
    fn distances_are_rounded_to_hundredths(mut survey: NeighborhoodSurvey) {
        survey.supermarkets = vec![SurveyPlace::named("Lunds", north(1.234_567))];
        let facts = survey
            .assemble(ORIGIN, &StraightLineEstimator::default())
            .expect("valid survey");
        let distance = facts
            .grocery_stores
            .first()
            .map(|store| store.distance_miles)
            .expect("one store");
        assert_eq!(distance, 1.23);
    }

    #[rstest]
    fn nightlife_is_deduplicated_by_name(mut survey: NeighborhoodSurvey) {
        survey.bars = vec![
            SurveyPlace::named("First Avenue", north(0.1)),
            SurveyPlace::named("Bar Luchador", north(0.2)),
        ];
        survey.nightclubs = vec![SurveyPlace::named("first avenue", north(0.1))];
        survey.cinemas = vec![
            SurveyPlace::unnamed(north(0.3)),
            SurveyPlace::unnamed(north(0.4)),
        ];
        let facts = survey
            .assemble(ORIGIN, &StraightLineEstimator::default())
            .expect("valid survey");
        assert_eq!(facts.nightlife_count, 3);
    }

    #[rstest]
    #[case(0, TransitLevel::None)]
    #[case(1, TransitLevel::None)]
    #[case(2, TransitLevel::Some)]
    #[case(4, TransitLevel::Some)]
    #[case(5, TransitLevel::Nearby)]
    fn transit_tiers(#[case] stops: usize, #[case] expected: TransitLevel) {
        assert_eq!(transit_level(stops), expected);
    }

    #[rstest]
    fn bus_and_rail_are_counted_together(mut survey: NeighborhoodSurvey) {
        survey.bus_stops = vec![SurveyPlace::unnamed(north(0.1)); 3];
        survey.rail_stations = vec![SurveyPlace::named("Lake Street", north(0.8)); 2];
        let facts = survey
            .assemble(ORIGIN, &StraightLineEstimator::default())
            .expect("valid survey");
        assert_eq!(facts.transit_available, TransitLevel::Nearby);
    }

    #[rstest]
    fn schools_feed_the_count_only(mut survey: NeighborhoodSurvey) {
        survey.schools = vec![SurveyPlace::named("Southwest High", north(1.0)); 4];
        let facts = survey
            .assemble(ORIGIN, &StraightLineEstimator::default())
            .expect("valid survey");
        assert_eq!(facts.school_count, 4);
        assert!(facts.school_ratings.is_empty());
        assert!(facts.crime_index.is_none());
    }

    #[rstest]
    fn drive_minutes_come_from_the_estimator(survey: NeighborhoodSurvey) {
        let facts = survey
            .assemble(ORIGIN, &StraightLineEstimator::default())
            .expect("valid survey");
        assert_eq!(facts.drive_minutes, 0.0);
    }

    #[rstest]
    fn rejects_invalid_origin() {
        let survey = NeighborhoodSurvey::new(GeoPoint::new(f64::NAN, 0.0));
        let err = survey
            .assemble(ORIGIN, &StraightLineEstimator::default())
            .expect_err("NaN origin");
        assert!(matches!(err, SurveyError::InvalidOrigin { .. }));
    }

    #[rstest]
    fn rejects_invalid_place(mut survey: NeighborhoodSurvey) {
        survey.schools = vec![SurveyPlace::named("Nowhere", GeoPoint::new(0.0, 200.0))];
        let err = survey
            .assemble(ORIGIN, &StraightLineEstimator::default())
            .expect_err("longitude out of range");
        assert!(matches!(err, SurveyError::InvalidPlace { ref name, .. } if name == "Nowhere"));
    }

    #[rstest]
    fn rejects_invalid_commute_target(survey: NeighborhoodSurvey) {
        let err = survey
            .assemble(GeoPoint::new(95.0, 0.0), &StraightLineEstimator::default())
            .expect_err("latitude out of range");
        assert!(matches!(err, SurveyError::Commute(_)));
    }

    #[rstest]
    fn deserialises_places_with_flat_coordinates() {
        let json = r#"{
            "origin": {"lat": 44.95, "lon": -93.3},
            "supermarkets": [{"name": "Aldi", "lat": 44.96, "lon": -93.3}, {"lat": 44.97, "lon": -93.3}]
        }"#;
        let survey: NeighborhoodSurvey = serde_json::from_str(json).expect("parse survey");
        assert_eq!(survey.supermarkets.len(), 2);
        assert_eq!(
            survey.supermarkets.get(1).map(SurveyPlace::display_name),
            Some(UNNAMED)
        );
        assert!(survey.bars.is_empty());
    }
}
