//! Errors surfaced by [`ListingScorer`](crate::ListingScorer) implementations.

use thiserror::Error;

use crate::{ApartmentError, NeighborhoodError, SettingsError};

/// Input rejected before scoring.
///
/// Scorers never fail on well-formed input; every variant reports a defect
/// in whichever collaborator produced the value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// Settings failed validation.
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    /// Apartment failed validation.
    #[error("invalid apartment: {0}")]
    Apartment(#[from] ApartmentError),
    /// Neighborhood facts failed validation.
    #[error("invalid neighborhood facts: {0}")]
    Neighborhood(#[from] NeighborhoodError),
}
