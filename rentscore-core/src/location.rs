//! Geographic coordinates used for commute targets and surveyed places.

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A WGS84 position in decimal degrees.
///
/// Serialises as `{ "lat": .., "lon": .. }`; converts into `geo` types with
/// `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use rentscore_core::GeoPoint;
///
/// let hopkins = GeoPoint::new(44.9258, -93.4083);
/// let coord: Coord<f64> = hopkins.into();
/// assert_eq!(coord.x, -93.4083);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, `-90.0..=90.0`.
    pub lat: f64,
    /// Longitude in degrees, `-180.0..=180.0`.
    pub lon: f64,
}

impl GeoPoint {
    /// Construct a point from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Report whether both components are finite and inside their ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Self {
            x: point.lon,
            y: point.lat,
        }
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Self::from(Coord::from(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(GeoPoint::new(44.9, -93.4), true)]
    #[case(GeoPoint::new(90.0, 180.0), true)]
    #[case(GeoPoint::new(90.1, 0.0), false)]
    #[case(GeoPoint::new(0.0, -180.5), false)]
    #[case(GeoPoint::new(f64::NAN, 0.0), false)]
    fn validity_checks_ranges(#[case] point: GeoPoint, #[case] expected: bool) {
        assert_eq!(point.is_valid(), expected);
    }

    #[rstest]
    fn converts_to_point_with_lon_as_x() {
        let point: Point<f64> = GeoPoint::new(1.0, 2.0).into();
        assert_eq!(point.x(), 2.0);
        assert_eq!(point.y(), 1.0);
    }
}
