//! Core domain types for the rentscore engine.
//!
//! Responsibilities:
//! - Model listings ([`Apartment`]), their surroundings
//!   ([`NeighborhoodFacts`]), and user preferences ([`Settings`]).
//! - Define the ten-category [`ScoreVector`], its colour tiers, and the
//!   [`ListingScorer`] seam implemented by scoring crates.
//! - Carry the explicit [`ScoringPolicy`] selecting between formula variants.
//! - Estimate drive time with a straight-line heuristic behind the
//!   [`DriveTimeEstimator`] seam.
//!
//! Boundaries:
//! - No I/O. Values arrive fully resolved from scraping and geocoding
//!   collaborators.
//! - Category formulas live in `rentscore-scorer`.
//!
//! Invariants:
//! - Settings are immutable once validated and shared by reference.
//! - Validation rejects only malformed values; absent facts are legal.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod amenity;
pub mod apartment;
pub mod commute;
mod error;
pub mod location;
pub mod neighborhood;
pub mod policy;
pub mod score;
pub mod scorer;
pub mod settings;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(all(docsrs, not(test)), doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use amenity::{AmenityKey, AmenitySet};
pub use apartment::{Apartment, ApartmentError};
pub use commute::{CommuteError, DriveTimeEstimator, StraightLineEstimator, distance_miles};
pub use error::ScoreError;
pub use location::GeoPoint;
pub use neighborhood::{GroceryStore, NeighborhoodError, NeighborhoodFacts, TransitLevel};
pub use policy::{CrimePolicy, SchoolFormula, ScoringPolicy, VenueFormula};
pub use score::{Category, MAX_SCORE, ScoreColor, ScoreColors, ScoreVector};
pub use scorer::ListingScorer;
pub use settings::{Settings, SettingsError};
