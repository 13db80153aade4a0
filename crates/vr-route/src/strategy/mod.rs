//! Ordering strategies and the heuristics they share.
//!
//! # Pluggability
//!
//! The planner drives every strategy through the [`RouteStrategy`] trait, so
//! callers can add or replace orderings without touching the planner.  The
//! default line-up, in evaluation (and tie-break) order, is:
//!
//! | Strategy                       | Seed                        | Step rule                         |
//! |--------------------------------|-----------------------------|-----------------------------------|
//! | [`NearestNeighborStrategy`]    | best starting place         | min scenic-adjusted distance      |
//! | [`CentroidSpiralStrategy`]     | place nearest the centroid  | max `1 / (d + 0.1)`               |
//! | [`CategoryPriorityStrategy`]   | best place of top category  | cheapest insertion, by category   |
//!
//! All orderings are index sequences into the caller's slice; the shared
//! [`finish`] step turns one into a [`RouteResult`].

mod category;
mod nearest;
mod spiral;

pub use category::{CategoryPriority, CategoryPriorityStrategy};
pub use nearest::NearestNeighborStrategy;
pub use spiral::CentroidSpiralStrategy;

use vr_core::{Place, places_centroid};

use crate::{RouteOptions, RouteResult, StrategyError};

/// Distance multiplier applied to park/walkway candidates under the scenic
/// preference (they look 20 % closer).
const SCENIC_DISTANCE_FACTOR: f64 = 0.8;

// ── RouteStrategy trait ───────────────────────────────────────────────────────

/// One self-contained way of ordering a candidate set.
///
/// # Contract
///
/// On success the returned `ordered_places` must be a permutation of
/// `places`; the planner verifies this and discards the result otherwise.
/// Return a [`StrategyError`] when the strategy has nothing usable to offer;
/// the planner logs it and moves on.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so the `parallel` feature can run
/// them on Rayon worker threads.
pub trait RouteStrategy: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    fn plan(&self, places: &[Place], options: &RouteOptions) -> Result<RouteResult, StrategyError>;
}

// ── Shared heuristics ─────────────────────────────────────────────────────────

/// Reject candidate sets containing NaN/∞ coordinates.
pub(crate) fn ensure_finite(places: &[Place]) -> Result<(), StrategyError> {
    match places.iter().find(|p| p.coordinate.is_some_and(|c| !c.is_finite())) {
        Some(p) => Err(StrategyError::NonFiniteCoordinate(p.id.clone())),
        None    => Ok(()),
    }
}

/// Pick the first stop among `candidates` (indices into `places`).
///
/// With the scenic preference, the first park/walkway candidate wins.
/// Otherwise the located candidate closest to the candidates' centroid wins,
/// ties going to the earlier candidate.  With no located candidate the first
/// candidate is returned.  `candidates` must be non-empty.
pub(crate) fn best_starting_place(places: &[Place], candidates: &[usize], options: &RouteOptions) -> usize {
    if options.prefer_scenic_route {
        if let Some(&i) = candidates.iter().find(|&&i| places[i].is_scenic()) {
            return i;
        }
    }

    let center = places_centroid(candidates.iter().map(|&i| &places[i]));
    let mut best      = candidates[0];
    let mut best_dist = f64::INFINITY;
    for &i in candidates {
        if let Some(c) = places[i].coordinate {
            let d = center.distance_km(c);
            if d < best_dist {
                best_dist = d;
                best      = i;
            }
        }
    }
    best
}

/// Scenic discount on a next-hop distance.
#[inline]
pub(crate) fn adjusted_distance(distance_km: f64, candidate: &Place, options: &RouteOptions) -> f64 {
    if options.prefer_scenic_route && candidate.is_scenic() {
        distance_km * SCENIC_DISTANCE_FACTOR
    } else {
        distance_km
    }
}

/// Extra distance from putting `new` at position `pos` of `order`.
///
/// `d(before, new) + d(new, after) − d(before, after)`, where any term whose
/// endpoint is missing or unlocated counts as 0.
pub(crate) fn insertion_cost(places: &[Place], order: &[usize], new: usize, pos: usize) -> f64 {
    let new_place = &places[new];
    if !new_place.has_coordinates() {
        return 0.0;
    }
    let before = pos.checked_sub(1).map(|k| &places[order[k]]);
    let after  = order.get(pos).map(|&k| &places[k]);

    let leg = |a: Option<&Place>, b: Option<&Place>| match (a, b) {
        (Some(a), Some(b)) => a.distance_to(b).unwrap_or(0.0),
        _ => 0.0,
    };

    leg(before, Some(new_place)) + leg(Some(new_place), after) - leg(before, after)
}

/// Position in `order` where inserting `new` adds the least distance.
///
/// Unlocated places go to the end.  Ties go to the earliest position.
pub(crate) fn best_insert_position(places: &[Place], order: &[usize], new: usize) -> usize {
    if order.is_empty() {
        return 0;
    }
    if !places[new].has_coordinates() {
        return order.len();
    }

    let mut best_pos  = order.len();
    let mut best_cost = f64::INFINITY;
    for pos in 0..=order.len() {
        let cost = insertion_cost(places, order, new, pos);
        if cost < best_cost {
            best_cost = cost;
            best_pos  = pos;
        }
    }
    best_pos
}

/// Position right after the first stop that shares `new`'s category or an
/// address token; the end of `order` if none does.
pub(crate) fn logical_insert_position(places: &[Place], order: &[usize], new: usize) -> usize {
    let target = &places[new];
    order
        .iter()
        .position(|&k| {
            let p = &places[k];
            p.category == target.category || addresses_similar(&p.address, &target.address)
        })
        .map_or(order.len(), |k| k + 1)
}

/// Two addresses are similar when they share a normalised token longer than
/// three characters.
///
/// Normalisation lowercases and drops everything except ASCII alphanumerics
/// and whitespace; tokens are whitespace-separated.
pub fn addresses_similar(a: &str, b: &str) -> bool {
    fn normalize(s: &str) -> String {
        s.chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
    let (a, b) = (normalize(a), normalize(b));
    let tokens_b: Vec<&str> = b.split_whitespace().collect();
    a.split_whitespace().any(|w| w.len() > 3 && tokens_b.contains(&w))
}

/// Sum of great-circle legs over consecutive stops; a leg touching an
/// unlocated stop contributes 0.
pub fn route_distance(places: &[Place], order: &[usize]) -> f64 {
    order
        .windows(2)
        .filter_map(|w| places[w[0]].distance_to(&places[w[1]]))
        .sum()
}

/// Materialise an index ordering as a [`RouteResult`].
pub(crate) fn finish(places: &[Place], order: &[usize], options: &RouteOptions) -> RouteResult {
    let total = route_distance(places, order);
    let ordered = order.iter().map(|&i| places[i].clone()).collect();
    RouteResult::from_order(ordered, total, options.mode)
}
