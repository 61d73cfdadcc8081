//! Caller-selected formula choices for categories with more than one form.
//!
//! Deployments differ in what their data sources can supply: some have
//! venue ratings and school ratings, others only proximity counts and no
//! crime feed. [`ScoringPolicy`] makes that choice explicit instead of
//! leaving it to whichever scorer happens to run.

/// How the crime category is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrimePolicy {
    /// Invert the crime index; `50` when it is absent.
    #[default]
    Computed,
    /// Ignore the crime index and return a constant.
    Fixed(u8),
}

impl CrimePolicy {
    /// Constant used when no crime-data integration exists.
    pub const PLACEHOLDER_SCORE: u8 = 65;

    /// Fixed policy returning [`Self::PLACEHOLDER_SCORE`].
    #[must_use]
    pub const fn placeholder() -> Self {
        Self::Fixed(Self::PLACEHOLDER_SCORE)
    }
}

/// Formula used for the restaurant and nightlife categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VenueFormula {
    /// Density plus a rating-driven quality sub-score.
    #[default]
    Rated,
    /// Density plus a flat quality stand-in.
    Unrated,
}

/// Formula used for the schools category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchoolFormula {
    /// Mean of school ratings.
    #[default]
    Ratings,
    /// Density heuristic over the school count.
    Density,
}

/// Formula selection for a scoring run.
///
/// # Examples
/// ```
/// use rentscore_core::{CrimePolicy, ScoringPolicy, VenueFormula};
///
/// let policy: ScoringPolicy = "proximity".parse().expect("known preset");
/// assert_eq!(policy.crime, CrimePolicy::placeholder());
/// assert_eq!(policy.venues, VenueFormula::Unrated);
/// assert_eq!(ScoringPolicy::default(), ScoringPolicy::full());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoringPolicy {
    /// Crime scoring choice.
    pub crime: CrimePolicy,
    /// Restaurant and nightlife formula.
    pub venues: VenueFormula,
    /// Schools formula.
    pub schools: SchoolFormula,
}

impl ScoringPolicy {
    /// Preset name for [`Self::full`].
    pub const FULL: &'static str = "full";
    /// Preset name for [`Self::proximity_only`].
    pub const PROXIMITY: &'static str = "proximity";

    /// Computed crime, rated venues, and school ratings.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            crime: CrimePolicy::Computed,
            venues: VenueFormula::Rated,
            schools: SchoolFormula::Ratings,
        }
    }

    /// Placeholder crime, unrated venues, and school density, for sources
    /// that only report nearby place counts.
    #[must_use]
    pub const fn proximity_only() -> Self {
        Self {
            crime: CrimePolicy::placeholder(),
            venues: VenueFormula::Unrated,
            schools: SchoolFormula::Density,
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::full()
    }
}

impl std::str::FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            Self::FULL => Ok(Self::full()),
            Self::PROXIMITY => Ok(Self::proximity_only()),
            _ => Err(format!("unknown scoring policy '{s}'")),
        }
    }
}
