//! Greedy nearest-neighbor tour with a principled seed.

use vr_core::Place;

use super::{
    RouteStrategy, adjusted_distance, best_starting_place, ensure_finite, finish,
    logical_insert_position,
};
use crate::proximity::{greedy_chain, partition};
use crate::{RouteOptions, RouteResult, StrategyError};

/// Nearest-neighbor walk over the located places.
///
/// Differs from [`proximity_order`][crate::proximity_order] in three ways:
/// the seed comes from the best-starting-place rule, scenic candidates look
/// closer under the scenic preference, and unlocated places are slotted in
/// after a stop with a matching category or address instead of being
/// appended blindly.
///
/// When no place has coordinates the input order is returned as an
/// address-only route.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestNeighborStrategy;

impl RouteStrategy for NearestNeighborStrategy {
    fn name(&self) -> &'static str {
        "nearest-neighbor"
    }

    fn plan(&self, places: &[Place], options: &RouteOptions) -> Result<RouteResult, StrategyError> {
        let (mut located, unlocated) = partition(places);
        if located.is_empty() {
            return Ok(RouteResult::address_only(places.to_vec(), options.mode));
        }
        ensure_finite(places)?;

        let candidates: Vec<usize> = located.iter().map(|&(i, _)| i).collect();
        let start = best_starting_place(places, &candidates, options);
        // `start` is drawn from `candidates`, so the lookup always hits.
        let seed_pos = located.iter().position(|&(i, _)| i == start).unwrap_or(0);
        let seed = located.remove(seed_pos);

        let mut order = greedy_chain(seed, located, |tail, &(i, c)| {
            adjusted_distance(tail.distance_km(c), &places[i], options)
        });

        for u in unlocated {
            let pos = logical_insert_position(places, &order, u);
            order.insert(pos, u);
        }

        Ok(finish(places, &order, options))
    }
}
