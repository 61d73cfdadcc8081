//! Estimate drive times from straight-line distance.
//!
//! Real routing is out of reach for the scorer; the [`DriveTimeEstimator`]
//! seam lets callers plug in something better than
//! [`StraightLineEstimator`], which inflates the great-circle distance by a
//! road factor and assumes a constant metro speed.

use geo::{Distance, Haversine, Point};
use thiserror::Error;

use crate::GeoPoint;

const METRES_PER_MILE: f64 = 1_609.344;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Errors from [`DriveTimeEstimator::estimate_minutes`] and
/// [`StraightLineEstimator::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CommuteError {
    /// A coordinate lay outside WGS84 ranges or was not finite.
    #[error("invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate {
        /// Latitude supplied by the caller.
        lat: f64,
        /// Longitude supplied by the caller.
        lon: f64,
    },
    /// A road factor or speed was not a positive finite number.
    #[error("{field} must be positive and finite (got {value})")]
    InvalidParameter {
        /// Name of the rejected parameter.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
}

/// Great-circle distance between two points in miles.
///
/// # Examples
/// ```
/// use rentscore_core::{GeoPoint, distance_miles};
///
/// let here = GeoPoint::new(44.9258, -93.4083);
/// assert_eq!(distance_miles(here, here), 0.0);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "unit conversion from metres")]
pub fn distance_miles(from: GeoPoint, to: GeoPoint) -> f64 {
    Haversine.distance(Point::from(from), Point::from(to)) / METRES_PER_MILE
}

/// Estimate drive minutes between two points.
pub trait DriveTimeEstimator: Send + Sync {
    /// Return the estimated drive time from `origin` to `destination`.
    ///
    /// # Errors
    /// Returns [`CommuteError::InvalidCoordinate`] when either point is
    /// malformed.
    fn estimate_minutes(&self, origin: GeoPoint, destination: GeoPoint)
    -> Result<f64, CommuteError>;
}

/// Straight-line heuristic: `round(miles * road_factor / speed_mph * 60)`.
///
/// # Examples
/// ```
/// use rentscore_core::{DriveTimeEstimator, GeoPoint, StraightLineEstimator};
///
/// # fn main() -> Result<(), rentscore_core::CommuteError> {
/// let estimator = StraightLineEstimator::default();
/// let target = GeoPoint::new(44.9258, -93.4083);
/// assert_eq!(estimator.estimate_minutes(target, target)?, 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightLineEstimator {
    road_factor: f64,
    speed_mph: f64,
}

impl StraightLineEstimator {
    /// Ratio of road distance to straight-line distance in a metro area.
    pub const DEFAULT_ROAD_FACTOR: f64 = 1.4;
    /// Average metro driving speed.
    pub const DEFAULT_SPEED_MPH: f64 = 25.0;

    /// Build an estimator with custom parameters.
    ///
    /// # Errors
    /// Returns [`CommuteError::InvalidParameter`] unless both values are
    /// positive and finite.
    pub fn new(road_factor: f64, speed_mph: f64) -> Result<Self, CommuteError> {
        check_parameter("road_factor", road_factor)?;
        check_parameter("speed_mph", speed_mph)?;
        Ok(Self {
            road_factor,
            speed_mph,
        })
    }
}

impl Default for StraightLineEstimator {
    fn default() -> Self {
        Self {
            road_factor: Self::DEFAULT_ROAD_FACTOR,
            speed_mph: Self::DEFAULT_SPEED_MPH,
        }
    }
}

impl DriveTimeEstimator for StraightLineEstimator {
    #[expect(
        clippy::float_arithmetic,
        reason = "distance to time conversion is inherently floating point"
    )]
    fn estimate_minutes(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<f64, CommuteError> {
        check_point(origin)?;
        check_point(destination)?;
        let road_miles = distance_miles(origin, destination) * self.road_factor;
        Ok((road_miles / self.speed_mph * MINUTES_PER_HOUR).round_ties_even())
    }
}

fn check_point(point: GeoPoint) -> Result<(), CommuteError> {
    if point.is_valid() {
        Ok(())
    } else {
        Err(CommuteError::InvalidCoordinate {
            lat: point.lat,
            lon: point.lon,
        })
    }
}

fn check_parameter(field: &'static str, value: f64) -> Result<(), CommuteError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CommuteError::InvalidParameter { field, value })
    }
}
