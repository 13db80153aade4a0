//! Geographic coordinate type and great-circle utilities.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Distances are reported in
//! kilometres because every downstream consumer (time estimate, quality
//! grade, score) works in km.

use crate::CoreError;

/// Mean Earth radius used by [`Coordinate::distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Like [`Coordinate::new`] but rejects NaN/∞ and out-of-range values.
    pub fn checked(lat: f64, lng: f64) -> Result<Self, CoreError> {
        let in_range = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng);
        if lat.is_finite() && lng.is_finite() && in_range {
            Ok(Self { lat, lng })
        } else {
            Err(CoreError::InvalidCoordinate { lat, lng })
        }
    }

    /// `true` when both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric and never negative; `a.distance_km(a) == 0.0`.
    pub fn distance_km(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

/// Free-function form of [`Coordinate::distance_km`].
#[inline]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    a.distance_km(b)
}

/// Arithmetic mean of `points`.
///
/// Returns `Coordinate { lat: 0.0, lng: 0.0 }` when `points` is empty.  That
/// value is a sentinel, not a real location: callers that cannot tolerate it
/// must check for an empty input first.
pub fn centroid<I>(points: I) -> Coordinate
where
    I: IntoIterator<Item = Coordinate>,
{
    let (mut lat, mut lng, mut n) = (0.0_f64, 0.0_f64, 0_usize);
    for p in points {
        lat += p.lat;
        lng += p.lng;
        n += 1;
    }
    if n == 0 {
        return Coordinate::default();
    }
    Coordinate { lat: lat / n as f64, lng: lng / n as f64 }
}

impl std::fmt::Display for Coordinate {
    /// `lat,lng` with the shortest round-trip decimal form of each component
    /// (the token format used in navigation URLs).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
