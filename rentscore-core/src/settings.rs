//! User preferences consumed by the scorers.
//!
//! A [`Settings`] value is built once (typically from layered configuration)
//! and passed by reference into every scoring call. It is never mutated while
//! a listing is being scored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AmenityKey, AmenitySet, GeoPoint};

const DEFAULT_BUDGET_CAP: f64 = 2_500.0;
const DEFAULT_MARKET_AVG_RENT: f64 = 1_750.0;
const DEFAULT_IDEAL_BEDROOMS: u32 = 2;
const DEFAULT_IDEAL_BATHROOMS: f64 = 2.0;
const DEFAULT_IDEAL_SQFT: u32 = 1_000;
const DEFAULT_COMMUTE_TARGET: GeoPoint = GeoPoint::new(44.9258, -93.4083);

/// Errors returned by [`Settings::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// A money amount was negative or not finite.
    #[error("{field} must be a finite, non-negative amount (got {value})")]
    InvalidAmount {
        /// Name of the offending setting.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
    /// The ideal bathroom count was negative or not finite.
    #[error("ideal_bathrooms must be finite and non-negative (got {0})")]
    InvalidBathrooms(f64),
    /// The commute target lies outside valid WGS84 ranges.
    #[error("commute target ({lat}, {lon}) is not a valid coordinate")]
    InvalidCommuteTarget {
        /// Latitude supplied by the caller.
        lat: f64,
        /// Longitude supplied by the caller.
        lon: f64,
    },
}

/// Scoring preferences for one user.
///
/// Construct with [`Settings::default`] and the `with_*` methods, then call
/// [`Settings::validate`]. Nice-to-haves keep their first-seen order and are
/// de-duplicated on insertion.
///
/// # Examples
/// ```
/// use rentscore_core::{AmenityKey, Settings};
///
/// # fn main() -> Result<(), rentscore_core::SettingsError> {
/// let settings = Settings::default()
///     .with_budget_cap(2_000.0)
///     .with_nice_to_haves([AmenityKey::Pool, AmenityKey::Gym, AmenityKey::Pool])
///     .validate()?;
/// assert_eq!(settings.budget_cap(), 2_000.0);
/// assert_eq!(settings.nice_to_haves(), &[AmenityKey::Pool, AmenityKey::Gym]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SettingsRecord", into = "SettingsRecord")]
pub struct Settings {
    budget_cap: f64,
    ideal_bedrooms: u32,
    ideal_bathrooms: f64,
    ideal_sqft: u32,
    market_avg_rent: f64,
    necessities: AmenitySet,
    nice_to_haves: Vec<AmenityKey>,
    commute_target: GeoPoint,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            budget_cap: DEFAULT_BUDGET_CAP,
            ideal_bedrooms: DEFAULT_IDEAL_BEDROOMS,
            ideal_bathrooms: DEFAULT_IDEAL_BATHROOMS,
            ideal_sqft: DEFAULT_IDEAL_SQFT,
            market_avg_rent: DEFAULT_MARKET_AVG_RENT,
            necessities: AmenitySet::from([
                AmenityKey::CoveredParking,
                AmenityKey::Dishwasher,
                AmenityKey::InUnitLaundry,
                AmenityKey::Ac,
            ]),
            nice_to_haves: vec![
                AmenityKey::Pool,
                AmenityKey::SaunaHotTub,
                AmenityKey::Gym,
                AmenityKey::PackageLockers,
            ],
            commute_target: DEFAULT_COMMUTE_TARGET,
        }
    }
}

impl Settings {
    /// Check every field against its documented domain.
    ///
    /// # Errors
    /// Returns [`SettingsError`] for negative or non-finite money amounts or
    /// bathroom counts, and for commute targets outside WGS84 ranges.
    pub fn validate(self) -> Result<Self, SettingsError> {
        self.check()?;
        Ok(self)
    }

    /// Borrowing form of [`Settings::validate`].
    ///
    /// # Errors
    /// Returns the same [`SettingsError`] as [`Settings::validate`].
    pub fn check(&self) -> Result<(), SettingsError> {
        check_amount("budget_cap", self.budget_cap)?;
        check_amount("market_avg_rent", self.market_avg_rent)?;
        if !self.ideal_bathrooms.is_finite() || self.ideal_bathrooms < 0.0 {
            return Err(SettingsError::InvalidBathrooms(self.ideal_bathrooms));
        }
        if !self.commute_target.is_valid() {
            return Err(SettingsError::InvalidCommuteTarget {
                lat: self.commute_target.lat,
                lon: self.commute_target.lon,
            });
        }
        Ok(())
    }

    /// Maximum rent the user is willing to pay.
    #[must_use]
    pub const fn budget_cap(&self) -> f64 {
        self.budget_cap
    }

    /// Preferred bedroom count.
    #[must_use]
    pub const fn ideal_bedrooms(&self) -> u32 {
        self.ideal_bedrooms
    }

    /// Preferred bathroom count; half-steps such as `1.5` are allowed.
    #[must_use]
    pub const fn ideal_bathrooms(&self) -> f64 {
        self.ideal_bathrooms
    }

    /// Preferred floor area in square feet.
    #[must_use]
    pub const fn ideal_sqft(&self) -> u32 {
        self.ideal_sqft
    }

    /// Average market rent for comparable units.
    #[must_use]
    pub const fn market_avg_rent(&self) -> f64 {
        self.market_avg_rent
    }

    /// Amenities that must all be present.
    #[must_use]
    pub const fn necessities(&self) -> &AmenitySet {
        &self.necessities
    }

    /// Amenities that earn proportional credit.
    #[must_use]
    pub fn nice_to_haves(&self) -> &[AmenityKey] {
        &self.nice_to_haves
    }

    /// Destination used for the commute estimate.
    #[must_use]
    pub const fn commute_target(&self) -> GeoPoint {
        self.commute_target
    }

    /// Replace the budget cap.
    #[must_use]
    pub const fn with_budget_cap(mut self, budget_cap: f64) -> Self {
        self.budget_cap = budget_cap;
        self
    }

    /// Replace the market average rent.
    #[must_use]
    pub const fn with_market_avg_rent(mut self, market_avg_rent: f64) -> Self {
        self.market_avg_rent = market_avg_rent;
        self
    }

    /// Replace the preferred bedroom count.
    #[must_use]
    pub const fn with_ideal_bedrooms(mut self, bedrooms: u32) -> Self {
        self.ideal_bedrooms = bedrooms;
        self
    }

    /// Replace the preferred bathroom count.
    #[must_use]
    pub const fn with_ideal_bathrooms(mut self, bathrooms: f64) -> Self {
        self.ideal_bathrooms = bathrooms;
        self
    }

    /// Replace the preferred floor area.
    #[must_use]
    pub const fn with_ideal_sqft(mut self, sqft: u32) -> Self {
        self.ideal_sqft = sqft;
        self
    }

    /// Replace the required amenities.
    #[must_use]
    pub fn with_necessities<I>(mut self, necessities: I) -> Self
    where
        I: IntoIterator<Item = AmenityKey>,
    {
        self.necessities = necessities.into_iter().collect();
        self
    }

    /// Replace the nice-to-have amenities, dropping repeats.
    #[must_use]
    pub fn with_nice_to_haves<I>(mut self, nice_to_haves: I) -> Self
    where
        I: IntoIterator<Item = AmenityKey>,
    {
        self.nice_to_haves = dedupe_in_order(nice_to_haves);
        self
    }

    /// Replace the commute destination.
    #[must_use]
    pub const fn with_commute_target(mut self, target: GeoPoint) -> Self {
        self.commute_target = target;
        self
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidAmount { field, value })
    }
}

fn dedupe_in_order<I>(keys: I) -> Vec<AmenityKey>
where
    I: IntoIterator<Item = AmenityKey>,
{
    let mut seen = AmenitySet::new();
    keys.into_iter().filter(|key| seen.insert(*key)).collect()
}

/// Wire form of [`Settings`]; absent fields take the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct SettingsRecord {
    budget_cap: f64,
    ideal_bedrooms: u32,
    ideal_bathrooms: f64,
    ideal_sqft: u32,
    market_avg_rent: f64,
    necessities: Vec<AmenityKey>,
    nice_to_haves: Vec<AmenityKey>,
    commute_target: GeoPoint,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Settings::default().into()
    }
}

impl From<SettingsRecord> for Settings {
    fn from(record: SettingsRecord) -> Self {
        Self {
            budget_cap: record.budget_cap,
            ideal_bedrooms: record.ideal_bedrooms,
            ideal_bathrooms: record.ideal_bathrooms,
            ideal_sqft: record.ideal_sqft,
            market_avg_rent: record.market_avg_rent,
            necessities: record.necessities.into_iter().collect(),
            nice_to_haves: dedupe_in_order(record.nice_to_haves),
            commute_target: record.commute_target,
        }
    }
}

impl From<Settings> for SettingsRecord {
    fn from(settings: Settings) -> Self {
        Self {
            budget_cap: settings.budget_cap,
            ideal_bedrooms: settings.ideal_bedrooms,
            ideal_bathrooms: settings.ideal_bathrooms,
            ideal_sqft: settings.ideal_sqft,
            market_avg_rent: settings.market_avg_rent,
            necessities: settings.necessities.into_iter().collect(),
            nice_to_haves: settings.nice_to_haves,
            commute_target: settings.commute_target,
        }
    }
}
