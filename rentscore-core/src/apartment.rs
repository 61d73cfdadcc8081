//! Listing attributes supplied by scraping or manual entry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{AmenityKey, AmenitySet};

/// Errors returned by [`Apartment::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApartmentError {
    /// Rent was negative or not finite.
    #[error("rent must be a finite, non-negative amount (got {0})")]
    InvalidRent(f64),
    /// Bathroom count was negative or not finite.
    #[error("bathrooms must be finite and non-negative (got {0})")]
    InvalidBathrooms(f64),
}

/// A single unit (or floor plan) being scored.
///
/// # Examples
/// ```
/// use rentscore_core::{AmenityKey, Apartment};
///
/// # fn main() -> Result<(), rentscore_core::ApartmentError> {
/// let apartment = Apartment::new(2_200.0, 2, 2.0, 1_050)
///     .with_amenities([AmenityKey::Dishwasher, AmenityKey::Gym])
///     .validate()?;
/// assert!(apartment.has_amenity(AmenityKey::Gym));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    /// Monthly rent.
    pub rent: f64,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms; half baths count as `0.5`.
    pub bathrooms: f64,
    /// Floor area in square feet.
    pub sqft: u32,
    /// Canonical amenities present in the unit or building.
    #[serde(default)]
    pub amenities: AmenitySet,
}

impl Apartment {
    /// Construct an apartment without amenities.
    #[must_use]
    pub const fn new(rent: f64, bedrooms: u32, bathrooms: f64, sqft: u32) -> Self {
        Self {
            rent,
            bedrooms,
            bathrooms,
            sqft,
            amenities: AmenitySet::new(),
        }
    }

    /// Replace the amenity set.
    #[must_use]
    pub fn with_amenities<I>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = AmenityKey>,
    {
        self.amenities = amenities.into_iter().collect();
        self
    }

    /// Report whether the unit offers `amenity`.
    #[must_use]
    pub fn has_amenity(&self, amenity: AmenityKey) -> bool {
        self.amenities.contains(&amenity)
    }

    /// Reject values that can only come from a defective collaborator.
    ///
    /// # Errors
    /// Returns [`ApartmentError`] when rent or bathrooms are negative or not
    /// finite.
    pub fn validate(self) -> Result<Self, ApartmentError> {
        self.check()?;
        Ok(self)
    }

    /// Borrowing form of [`Apartment::validate`].
    ///
    /// # Errors
    /// Returns the same [`ApartmentError`] as [`Apartment::validate`].
    pub fn check(&self) -> Result<(), ApartmentError> {
        if !self.rent.is_finite() || self.rent < 0.0 {
            return Err(ApartmentError::InvalidRent(self.rent));
        }
        if !self.bathrooms.is_finite() || self.bathrooms < 0.0 {
            return Err(ApartmentError::InvalidBathrooms(self.bathrooms));
        }
        Ok(())
    }
}
