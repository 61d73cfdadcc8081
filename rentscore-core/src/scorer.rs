//! Score apartment listings against a user's settings.
//!
//! The [`ListingScorer`] trait maps an [`Apartment`] and its
//! [`NeighborhoodFacts`] to a complete [`ScoreVector`].

use crate::{Apartment, NeighborhoodFacts, ScoreError, ScoreVector, Settings};

/// Produce a complete score vector for one listing.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so batches of
/// listings can be scored across threads. They must be deterministic and
/// must substitute neutral defaults for missing facts rather than fail.
/// Errors are reserved for malformed input.
///
/// # Examples
///
/// ```rust
/// use rentscore_core::{
///     Apartment, ListingScorer, NeighborhoodFacts, ScoreError, ScoreVector, Settings,
/// };
///
/// struct Neutral;
///
/// impl ListingScorer for Neutral {
///     fn score(
///         &self,
///         _apartment: &Apartment,
///         _neighborhood: &NeighborhoodFacts,
///         _settings: &Settings,
///     ) -> Result<ScoreVector, ScoreError> {
///         Ok(ScoreVector::from_fn(|_| 50))
///     }
/// }
///
/// let vector = Neutral
///     .score(
///         &Apartment::new(1_500.0, 1, 1.0, 700),
///         &NeighborhoodFacts::default(),
///         &Settings::default(),
///     )
///     .expect("neutral scorer never fails");
/// assert_eq!(vector.overall(), 50);
/// ```
pub trait ListingScorer: Send + Sync {
    /// Score `apartment` in `neighborhood` according to `settings`.
    ///
    /// # Errors
    /// Returns [`ScoreError`] when an input fails validation.
    fn score(
        &self,
        apartment: &Apartment,
        neighborhood: &NeighborhoodFacts,
        settings: &Settings,
    ) -> Result<ScoreVector, ScoreError>;
}
