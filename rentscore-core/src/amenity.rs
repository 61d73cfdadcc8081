//! The closed amenity vocabulary shared by listings and settings.
//!
//! Scrapers and manual entry both normalise free text into [`AmenityKey`]
//! values before scoring, so the scorers only ever test set membership.
//!
//! # Examples
//! ```
//! use rentscore_core::AmenityKey;
//!
//! assert_eq!(AmenityKey::InUnitLaundry.as_str(), "in_unit_laundry");
//! assert_eq!("ac".parse::<AmenityKey>(), Ok(AmenityKey::Ac));
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of amenities present in a unit or building.
pub type AmenitySet = BTreeSet<AmenityKey>;

/// A canonical amenity understood by the necessity and nice-to-have scorers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityKey {
    /// Garage, underground, or otherwise covered parking.
    CoveredParking,
    /// Built-in dishwasher.
    Dishwasher,
    /// Washer and dryer inside the unit.
    InUnitLaundry,
    /// Air conditioning.
    Ac,
    /// Swimming pool.
    Pool,
    /// Sauna, hot tub, spa, or steam room.
    SaunaHotTub,
    /// Fitness centre.
    Gym,
    /// Package lockers or a package room.
    PackageLockers,
}

impl AmenityKey {
    /// Every key in vocabulary order.
    pub const ALL: [Self; 8] = [
        Self::CoveredParking,
        Self::Dishwasher,
        Self::InUnitLaundry,
        Self::Ac,
        Self::Pool,
        Self::SaunaHotTub,
        Self::Gym,
        Self::PackageLockers,
    ];

    /// Return the key as its snake-case identifier.
    ///
    /// # Examples
    /// ```
    /// use rentscore_core::AmenityKey;
    ///
    /// assert_eq!(AmenityKey::SaunaHotTub.as_str(), "sauna_hot_tub");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CoveredParking => "covered_parking",
            Self::Dishwasher => "dishwasher",
            Self::InUnitLaundry => "in_unit_laundry",
            Self::Ac => "ac",
            Self::Pool => "pool",
            Self::SaunaHotTub => "sauna_hot_tub",
            Self::Gym => "gym",
            Self::PackageLockers => "package_lockers",
        }
    }
}

impl std::fmt::Display for AmenityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AmenityKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == normalised)
            .ok_or_else(|| format!("unknown amenity '{s}'"))
    }
}
