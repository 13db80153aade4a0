//! Planner output.

use std::fmt;

use vr_core::{Place, PlaceId, TravelMode};

use crate::estimate::{
    ADDRESS_ONLY_MINUTES_PER_STOP, SINGLE_STOP_MINUTES, assess_route_quality, estimate_route_time,
};
use crate::nav::navigation_url;

/// Qualitative grade attached to every route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RouteQuality {
    Fair,
    Good,
    Excellent,
}

impl RouteQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteQuality::Excellent => "excellent",
            RouteQuality::Good      => "good",
            RouteQuality::Fair      => "fair",
        }
    }
}

impl fmt::Display for RouteQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered itinerary with its estimates and navigation link.
///
/// `ordered_places` is always a permutation of the planner's input.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteResult {
    pub ordered_places: Vec<Place>,

    /// Sum of great-circle legs between consecutive located stops (km).
    #[cfg_attr(feature = "serde", serde(rename = "totalDistance"))]
    pub total_distance_km: f64,

    #[cfg_attr(feature = "serde", serde(rename = "estimatedTime"))]
    pub estimated_minutes: u32,

    pub gmaps_url: String,

    pub route_quality: RouteQuality,
}

impl RouteResult {
    /// Attach estimate, grade and URL to an ordering.
    pub fn from_order(ordered_places: Vec<Place>, total_distance_km: f64, mode: TravelMode) -> Self {
        let stops = ordered_places.len();
        Self {
            estimated_minutes: estimate_route_time(total_distance_km, stops, mode),
            route_quality:     assess_route_quality(total_distance_km, stops, mode),
            gmaps_url:         navigation_url(&ordered_places, mode),
            ordered_places,
            total_distance_km,
        }
    }

    /// One-stop itinerary: no travel, a fixed dwell estimate.
    pub fn single(place: Place, mode: TravelMode) -> Self {
        let ordered_places = vec![place];
        Self {
            gmaps_url:         navigation_url(&ordered_places, mode),
            ordered_places,
            total_distance_km: 0.0,
            estimated_minutes: SINGLE_STOP_MINUTES,
            route_quality:     RouteQuality::Excellent,
        }
    }

    /// Itinerary over places with no coordinates at all: order kept as is,
    /// distance unknown (reported as 0) and graded `fair`.
    pub fn address_only(ordered_places: Vec<Place>, mode: TravelMode) -> Self {
        let minutes = ordered_places.len() as u32 * ADDRESS_ONLY_MINUTES_PER_STOP;
        Self {
            gmaps_url:         navigation_url(&ordered_places, mode),
            ordered_places,
            total_distance_km: 0.0,
            estimated_minutes: minutes,
            route_quality:     RouteQuality::Fair,
        }
    }

    #[inline]
    pub fn stop_count(&self) -> usize {
        self.ordered_places.len()
    }

    /// `true` if at least one stop has coordinates.
    pub fn has_coordinates(&self) -> bool {
        self.ordered_places.iter().any(Place::has_coordinates)
    }

    /// Stop ids in visiting order.
    pub fn ids(&self) -> impl Iterator<Item = &PlaceId> + '_ {
        self.ordered_places.iter().map(|p| &p.id)
    }
}
