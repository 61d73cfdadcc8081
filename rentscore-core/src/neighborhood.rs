//! Neighborhood context assembled by geocoding and proximity collaborators.
//!
//! Every field has a documented "no data" default so that partially
//! populated records still score; see [`NeighborhoodFacts::default`].

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_DRIVE_MINUTES: f64 = 60.0;
const MAX_VENUE_RATING: f64 = 5.0;
const MAX_CRIME_INDEX: f64 = 100.0;
const SCHOOL_RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Availability of public transit near a listing.
///
/// Deserialisation is lenient: labels other than `nearby` and `some` map to
/// [`TransitLevel::None`].
///
/// # Examples
/// ```
/// use rentscore_core::TransitLevel;
///
/// assert_eq!(TransitLevel::from_label("Nearby"), TransitLevel::Nearby);
/// assert_eq!(TransitLevel::from_label("subway"), TransitLevel::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TransitLevel {
    /// Several stops within walking distance.
    Nearby,
    /// A couple of stops within walking distance.
    Some,
    /// No usable transit.
    #[default]
    None,
}

impl TransitLevel {
    /// Return the level as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nearby => "nearby",
            Self::Some => "some",
            Self::None => "none",
        }
    }

    /// Parse a free-form label, treating unrecognised values as `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "nearby" => Self::Nearby,
            "some" => Self::Some,
            "none" => Self::None,
            other => {
                warn!("unrecognised transit level '{other}'; treating as none");
                Self::None
            }
        }
    }
}

impl From<String> for TransitLevel {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl std::fmt::Display for TransitLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grocery store found near the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryStore {
    /// Store name as reported by the map data source.
    pub name: String,
    /// Straight-line distance from the listing in miles.
    pub distance_miles: f64,
}

impl GroceryStore {
    /// Construct a store entry.
    #[must_use]
    pub fn new(name: impl Into<String>, distance_miles: f64) -> Self {
        Self {
            name: name.into(),
            distance_miles,
        }
    }
}

/// Errors returned by [`NeighborhoodFacts::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NeighborhoodError {
    /// Drive time was negative or not finite.
    #[error("drive_minutes must be finite and non-negative (got {0})")]
    InvalidDriveMinutes(f64),
    /// Crime index fell outside `0..=100`.
    #[error("crime_index must lie within 0..=100 (got {0})")]
    InvalidCrimeIndex(f64),
    /// An average rating fell outside `0..=5`.
    #[error("{field} must lie within 0..=5 (got {value})")]
    InvalidRating {
        /// Name of the offending field.
        field: &'static str,
        /// Rating supplied by the caller.
        value: f64,
    },
    /// A school rating fell outside `1..=10`.
    #[error("school ratings must lie within 1..=10 (got {0})")]
    InvalidSchoolRating(u8),
    /// A grocery distance was negative or not finite.
    #[error("distance to grocery store '{name}' must be finite and non-negative (got {distance})")]
    InvalidGroceryDistance {
        /// Store whose distance was rejected.
        name: String,
        /// Distance supplied by the caller.
        distance: f64,
    },
}

/// Neighborhood facts for one listing.
///
/// # Examples
/// ```
/// use rentscore_core::{GroceryStore, NeighborhoodFacts, TransitLevel};
///
/// let facts = NeighborhoodFacts {
///     drive_minutes: 18.0,
///     transit_available: TransitLevel::Nearby,
///     grocery_stores: vec![GroceryStore::new("Aldi", 1.5)],
///     ..NeighborhoodFacts::default()
/// };
/// assert!(facts.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighborhoodFacts {
    /// Ratings (`1..=10`) of nearby schools; empty when unknown.
    pub school_ratings: Vec<u8>,
    /// Number of nearby schools, used when ratings are unavailable.
    pub school_count: u32,
    /// Crime index in `0..=100` where `100` is most dangerous.
    pub crime_index: Option<f64>,
    /// Number of nearby restaurants and cafes.
    pub restaurant_count: u32,
    /// Average restaurant rating in `0..=5`.
    pub restaurant_avg_rating: Option<f64>,
    /// Estimated drive time to the commute target in minutes.
    pub drive_minutes: f64,
    /// Transit availability tier.
    pub transit_available: TransitLevel,
    /// Number of nearby bars, clubs, and cinemas.
    pub nightlife_count: u32,
    /// Average nightlife rating in `0..=5`.
    pub nightlife_avg_rating: Option<f64>,
    /// Nearby grocery stores with distances.
    pub grocery_stores: Vec<GroceryStore>,
}

impl Default for NeighborhoodFacts {
    fn default() -> Self {
        Self {
            school_ratings: Vec::new(),
            school_count: 0,
            crime_index: None,
            restaurant_count: 0,
            restaurant_avg_rating: None,
            drive_minutes: DEFAULT_DRIVE_MINUTES,
            transit_available: TransitLevel::None,
            nightlife_count: 0,
            nightlife_avg_rating: None,
            grocery_stores: Vec::new(),
        }
    }
}

impl NeighborhoodFacts {
    /// Reject values that can only come from a defective collaborator.
    ///
    /// Absent optional facts are valid; only present-but-malformed values
    /// are rejected.
    ///
    /// # Errors
    /// Returns [`NeighborhoodError`] describing the first malformed field.
    pub fn validate(&self) -> Result<(), NeighborhoodError> {
        if !self.drive_minutes.is_finite() || self.drive_minutes < 0.0 {
            return Err(NeighborhoodError::InvalidDriveMinutes(self.drive_minutes));
        }
        if let Some(index) = self.crime_index
            && !(0.0..=MAX_CRIME_INDEX).contains(&index)
        {
            return Err(NeighborhoodError::InvalidCrimeIndex(index));
        }
        check_rating("restaurant_avg_rating", self.restaurant_avg_rating)?;
        check_rating("nightlife_avg_rating", self.nightlife_avg_rating)?;
        if let Some(rating) = self
            .school_ratings
            .iter()
            .copied()
            .find(|rating| !SCHOOL_RATING_RANGE.contains(rating))
        {
            return Err(NeighborhoodError::InvalidSchoolRating(rating));
        }
        if let Some(store) = self
            .grocery_stores
            .iter()
            .find(|store| !store.distance_miles.is_finite() || store.distance_miles < 0.0)
        {
            return Err(NeighborhoodError::InvalidGroceryDistance {
                name: store.name.clone(),
                distance: store.distance_miles,
            });
        }
        Ok(())
    }
}

fn check_rating(field: &'static str, rating: Option<f64>) -> Result<(), NeighborhoodError> {
    match rating {
        Some(value) if !(0.0..=MAX_VENUE_RATING).contains(&value) => {
            Err(NeighborhoodError::InvalidRating { field, value })
        }
        _ => Ok(()),
    }
}
