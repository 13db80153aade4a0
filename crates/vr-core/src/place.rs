//! Points of interest handed to the planner.

use std::fmt;

use crate::{Coordinate, PlaceId, geo};

// ── Category ──────────────────────────────────────────────────────────────────

/// Open enumeration of place categories.
///
/// The named variants are the categories the planner has heuristics for;
/// anything else is kept verbatim in [`Category::Other`] so no dataset row is
/// ever rejected for an unfamiliar category.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Category {
    Park,
    Cafe,
    CafeBakery,
    Museum,
    Landmark,
    Walkway,
    District,
    Zoo,
    Other(String),
}

impl Category {
    /// Canonical lowercase slug (`"cafe-bakery"`, …).
    pub fn as_str(&self) -> &str {
        match self {
            Category::Park       => "park",
            Category::Cafe       => "cafe",
            Category::CafeBakery => "cafe-bakery",
            Category::Museum     => "museum",
            Category::Landmark   => "landmark",
            Category::Walkway    => "walkway",
            Category::District   => "district",
            Category::Zoo        => "zoo",
            Category::Other(s)   => s,
        }
    }

    /// Parks and walkways: favoured by the scenic preference.
    #[inline]
    pub fn is_scenic(&self) -> bool {
        matches!(self, Category::Park | Category::Walkway)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "park"        => Category::Park,
            "cafe"        => Category::Cafe,
            "cafe-bakery" => Category::CafeBakery,
            "museum"      => Category::Museum,
            "landmark"    => Category::Landmark,
            "walkway"     => Category::Walkway,
            "district"    => Category::District,
            "zoo"         => Category::Zoo,
            other         => Category::Other(other.to_owned()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match Category::from(s.as_str()) {
            Category::Other(_) => Category::Other(s),
            known => known,
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> String {
        match c {
            Category::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Place ─────────────────────────────────────────────────────────────────────

/// A point of interest.
///
/// Places are immutable inputs: the planner reorders references to them but
/// never edits one.  `coordinate` is `None` when the dataset has no known
/// position for the place; `address` is always present and is the fallback
/// for both ordering heuristics and navigation links.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "wire::PlaceWire", into = "wire::PlaceWire"))]
pub struct Place {
    pub id:         PlaceId,
    pub name:       String,
    pub category:   Category,
    pub address:    String,
    pub coordinate: Option<Coordinate>,
}

impl Place {
    pub fn new(
        id:       impl Into<PlaceId>,
        name:     impl Into<String>,
        category: impl Into<Category>,
        address:  impl Into<String>,
    ) -> Self {
        Self {
            id:         id.into(),
            name:       name.into(),
            category:   category.into(),
            address:    address.into(),
            coordinate: None,
        }
    }

    /// Attach a position.
    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.coordinate = Some(Coordinate::new(lat, lng));
        self
    }

    #[inline]
    pub fn has_coordinates(&self) -> bool {
        self.coordinate.is_some()
    }

    #[inline]
    pub fn is_scenic(&self) -> bool {
        self.category.is_scenic()
    }

    /// Great-circle distance to `other`, or `None` if either lacks a position.
    pub fn distance_to(&self, other: &Place) -> Option<f64> {
        Some(self.coordinate?.distance_km(other.coordinate?))
    }
}

/// Centroid of the places that have coordinates.
///
/// Returns the `(0, 0)` sentinel when none do; see [`geo::centroid`].
pub fn places_centroid<'a, I>(places: I) -> Coordinate
where
    I: IntoIterator<Item = &'a Place>,
{
    geo::centroid(places.into_iter().filter_map(|p| p.coordinate))
}

// ── Wire format ───────────────────────────────────────────────────────────────

/// Collaborator JSON shape: flat, nullable `lat`/`lng` rather than a nested
/// coordinate.  A place with only one of the two is treated as unplaced.
#[cfg(feature = "serde")]
mod wire {
    use serde::{Deserialize, Serialize};

    use super::{Category, Coordinate, Place, PlaceId};

    #[derive(Serialize, Deserialize)]
    pub(super) struct PlaceWire {
        id:       PlaceId,
        name:     String,
        category: Category,
        address:  String,
        #[serde(default)]
        lat:      Option<f64>,
        #[serde(default)]
        lng:      Option<f64>,
    }

    impl From<PlaceWire> for Place {
        fn from(w: PlaceWire) -> Self {
            let coordinate = match (w.lat, w.lng) {
                (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
                _ => None,
            };
            Place { id: w.id, name: w.name, category: w.category, address: w.address, coordinate }
        }
    }

    impl From<Place> for PlaceWire {
        fn from(p: Place) -> Self {
            PlaceWire {
                id:       p.id,
                name:     p.name,
                category: p.category,
                address:  p.address,
                lat:      p.coordinate.map(|c| c.lat),
                lng:      p.coordinate.map(|c| c.lng),
            }
        }
    }
}
