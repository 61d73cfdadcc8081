//! Floor plans scraped from a listing page and the choice of which to score.

use log::warn;
use rentscore_core::{AmenitySet, Apartment, Settings};
use serde::{Deserialize, Serialize};

/// One available unit within a floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitListing {
    /// Unit number, when the page lists one.
    #[serde(default)]
    pub unit: Option<String>,
    /// Monthly rent, when the page lists one.
    #[serde(default)]
    pub rent: Option<f64>,
}

/// A layout offered by a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Marketing name of the plan.
    #[serde(default)]
    pub name: Option<String>,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms; half baths count as `0.5`.
    pub bathrooms: f64,
    /// Floor area in square feet; `0` when unknown.
    #[serde(default)]
    pub sqft: u32,
    /// Units currently offered under this plan.
    #[serde(default)]
    pub units: Vec<UnitListing>,
}

impl FloorPlan {
    /// Lowest positive rent among the plan's units.
    ///
    /// # Examples
    /// ```
    /// use rentscore_data::{FloorPlan, UnitListing};
    ///
    /// let plan = FloorPlan {
    ///     name: Some("B2".into()),
    ///     bedrooms: 2,
    ///     bathrooms: 2.0,
    ///     sqft: 1_040,
    ///     units: vec![
    ///         UnitListing { unit: Some("304".into()), rent: Some(2_310.0) },
    ///         UnitListing { unit: Some("212".into()), rent: Some(2_185.0) },
    ///         UnitListing { unit: None, rent: None },
    ///     ],
    /// };
    /// assert_eq!(plan.best_rent(), Some(2_185.0));
    /// ```
    #[must_use]
    pub fn best_rent(&self) -> Option<f64> {
        self.units
            .iter()
            .filter_map(|unit| unit.rent)
            .filter(|rent| rent.is_finite() && *rent > 0.0)
            .min_by(f64::total_cmp)
    }

    /// Build the apartment to score for this plan.
    ///
    /// Plans without a listed rent score with a rent of zero.
    #[must_use]
    pub fn to_apartment(&self, amenities: AmenitySet) -> Apartment {
        let rent = self.best_rent().unwrap_or_else(|| {
            warn!(
                "floor plan '{}' lists no rent; scoring with zero",
                self.name.as_deref().unwrap_or("unnamed")
            );
            0.0
        });
        Apartment {
            rent,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            sqft: self.sqft,
            amenities,
        }
    }

    fn matches(&self, settings: &Settings) -> bool {
        self.bedrooms == settings.ideal_bedrooms()
            && self.bathrooms.total_cmp(&settings.ideal_bathrooms()).is_eq()
    }
}

/// Plans with the ideal bedroom and bathroom counts, or every plan when none
/// match.
#[must_use]
pub fn select_floor_plans<'a>(plans: &'a [FloorPlan], settings: &Settings) -> Vec<&'a FloorPlan> {
    let matching: Vec<&FloorPlan> = plans.iter().filter(|plan| plan.matches(settings)).collect();
    if matching.is_empty() {
        plans.iter().collect()
    } else {
        matching
    }
}
