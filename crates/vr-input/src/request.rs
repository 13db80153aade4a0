//! Route request as sent by the itinerary UI.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "places":  [{ "id": "p1", "name": "…", "category": "park", "address": "…", "lat": 25.67, "lng": -100.28 }],
//!   "options": { "mode": "walking", "maxDistance": 5, "preferScenicRoute": true }
//! }
//! ```
//!
//! The request layer is lenient: places missing an `id`,
//! `name` or `address` are dropped rather than failing the whole request,
//! out-of-range coordinates are discarded (the place stays, address-only),
//! and every option has a default.
//!
//! | Option              | Default   |
//! |---------------------|-----------|
//! | `mode`              | `walking` |
//! | `maxDistance`       | none (`0` also means none) |
//! | `preferScenicRoute` | `false`   |
//! | `avoidBacktracking` | `true`    |

use serde::Deserialize;
use tracing::debug;

use vr_core::{Category, Coordinate, Place, TravelMode};
use vr_route::{RouteOptions, RouteResult, generate_optimal_route};

use crate::{InputError, InputResult};

/// Interpret free-text travel mode input.
///
/// `"driving"`, or anything mentioning a car (`carro`, `auto`), means
/// driving; everything else, including empty input, means walking.
pub fn parse_travel_mode(text: &str) -> TravelMode {
    let t = text.trim().to_lowercase();
    if t == "driving" || t.contains("carro") || t.contains("auto") {
        TravelMode::Driving
    } else {
        TravelMode::Walking
    }
}

// ── Wire types ────────────────────────────────────────────────────────────────

/// A place as received; any field may be missing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub id:       Option<String>,
    #[serde(default)]
    pub name:     Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address:  Option<String>,
    #[serde(default)]
    pub lat:      Option<f64>,
    #[serde(default)]
    pub lng:      Option<f64>,
}

impl RawPlace {
    /// Convert to a [`Place`] if `id`, `name` and `address` are non-blank.
    ///
    /// Coordinates go through [`Coordinate::checked`]; an out-of-range pair
    /// is dropped and the place is kept as address-only.
    pub fn validate(&self) -> Option<Place> {
        fn present(s: &Option<String>) -> Option<&str> {
            s.as_deref().map(str::trim).filter(|s| !s.is_empty())
        }
        let (id, name, address) = (present(&self.id)?, present(&self.name)?, present(&self.address)?);

        let category = Category::from(self.category.as_deref().unwrap_or_default().trim());
        let mut place = Place::new(id, name, category, address);
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            match Coordinate::checked(lat, lng) {
                Ok(c) => place.coordinate = Some(c),
                Err(e) => debug!(id, error = %e, "dropping invalid coordinate from request place"),
            }
        }
        Some(place)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptions {
    #[serde(default)]
    pub mode:                Option<String>,
    #[serde(default)]
    pub max_distance:        Option<f64>,
    #[serde(default)]
    pub prefer_scenic_route: Option<bool>,
    #[serde(default)]
    pub avoid_backtracking:  Option<bool>,
}

/// Body of a route-optimisation request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub places:  Option<Vec<RawPlace>>,
    #[serde(default)]
    pub options: Option<RawOptions>,
}

impl RouteRequest {
    pub fn from_json(body: &str) -> InputResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The well-formed places, in request order.
    ///
    /// Fails with [`InputError::EmptyRequest`] if `places` is absent or
    /// empty, and [`InputError::NoValidPlaces`] if every entry is malformed.
    pub fn valid_places(&self) -> InputResult<Vec<Place>> {
        let raw = match &self.places {
            Some(v) if !v.is_empty() => v,
            _ => return Err(InputError::EmptyRequest),
        };

        let places: Vec<Place> = raw.iter().filter_map(RawPlace::validate).collect();
        if places.len() < raw.len() {
            debug!(dropped = raw.len() - places.len(), "filtered malformed places from request");
        }
        if places.is_empty() {
            return Err(InputError::NoValidPlaces);
        }
        Ok(places)
    }

    /// Options with request defaults applied.
    pub fn route_options(&self) -> RouteOptions {
        let raw = self.options.clone().unwrap_or_default();
        let mut opts = RouteOptions::new(raw.mode.as_deref().map_or(TravelMode::Walking, parse_travel_mode))
            .with_scenic_preference(raw.prefer_scenic_route.unwrap_or(false))
            .with_avoid_backtracking(raw.avoid_backtracking.unwrap_or(true));
        if let Some(km) = raw.max_distance.filter(|km| *km > 0.0) {
            opts = opts.with_max_distance_km(km);
        }
        opts
    }

    /// Validate and plan.
    pub fn plan(&self) -> InputResult<RouteResult> {
        let places = self.valid_places()?;
        Ok(generate_optimal_route(&places, &self.route_options())?)
    }
}
