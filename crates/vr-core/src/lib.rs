//! `vr-core` — foundational types for the `vibe_route` itinerary planner.
//!
//! This crate is a dependency of every other `vr-*` crate.  It has no `vr-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PlaceId`                                             |
//! | [`geo`]         | `Coordinate`, haversine distance, centroid            |
//! | [`place`]       | `Place`, `Category`, `places_centroid`                |
//! | [`transport`]   | `TravelMode` enum                                     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types, using  |
//! |         | the collaborator's flat `lat`/`lng` place shape.           |

pub mod error;
pub mod geo;
pub mod ids;
pub mod place;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, centroid, distance};
pub use ids::PlaceId;
pub use place::{Category, Place, places_centroid};
pub use transport::TravelMode;
