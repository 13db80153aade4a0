//! `vr-route` — itinerary ordering, scoring, and navigation links.
//!
//! Given an unordered candidate set of [`Place`][vr_core::Place]s and a
//! [`RouteOptions`], [`generate_optimal_route`] runs several ordering
//! strategies, scores each, and returns the best [`RouteResult`] with a time
//! estimate, a quality grade, and a map deep link.  Nothing here does I/O or
//! holds state between calls.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`planner`]   | `RoutePlanner`, `generate_optimal_route`                       |
//! | [`strategy`]  | `RouteStrategy` trait, the three default strategies            |
//! | [`proximity`] | `proximity_order`, `order_by_proximity` (plain nearest-neighbor)|
//! | [`estimate`]  | `estimate_route_time`, `assess_route_quality`, `score_route`   |
//! | [`nav`]       | `navigation_url`, `encode_component`                           |
//! | [`options`]   | `RouteOptions`                                                 |
//! | [`result`]    | `RouteResult`, `RouteQuality`                                  |
//! | [`error`]     | `RouteError`, `StrategyError`, `PlanResult<T>`                 |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Evaluates strategies on Rayon's thread pool.                |
//! | `serde`    | Derives `Serialize`/`Deserialize` with camelCase names.     |

pub mod error;
pub mod estimate;
pub mod nav;
pub mod options;
pub mod planner;
pub mod proximity;
pub mod result;
pub mod strategy;


pub use error::{PlanResult, RouteError, StrategyError};
pub use estimate::{assess_route_quality, estimate_route_time, score_route};
pub use nav::{encode_component, navigation_url};
pub use options::RouteOptions;
pub use planner::{RoutePlanner, generate_optimal_route};
pub use proximity::{order_by_proximity, proximity_order};
pub use result::{RouteQuality, RouteResult};
pub use strategy::{
    CategoryPriority, CategoryPriorityStrategy, CentroidSpiralStrategy, NearestNeighborStrategy,
    RouteStrategy,
};
