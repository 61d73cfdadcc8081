//! Collaborator-side data shaping for the rentscore engine.
//!
//! Responsibilities:
//! - Classify free-text amenity descriptions into canonical keys.
//! - Assemble [`NeighborhoodFacts`](rentscore_core::NeighborhoodFacts) from
//!   surveyed nearby places.
//! - Choose which scraped floor plans to score.
//!
//! Boundaries:
//! - No network I/O; places and plans arrive already fetched.
//! - Do not encode scoring rules (live in `rentscore-scorer`).
//!
//! Invariants:
//! - Every function is pure apart from logging.

#![forbid(unsafe_code)]

mod amenities;
mod floor_plan;
mod survey;

pub use amenities::{AMENITY_KEYWORDS, classify_phrases, classify_text};
pub use floor_plan::{FloorPlan, UnitListing, select_floor_plans};
pub use survey::{
    MAX_GROCERY_STORES, NeighborhoodSurvey, SurveyError, SurveyPlace, UNNAMED, transit_level,
};
