//! Centroid-seeded outward spiral.

use vr_core::{Place, centroid};

use super::{NearestNeighborStrategy, RouteStrategy, ensure_finite, finish, logical_insert_position};
use crate::proximity::{greedy_chain, partition};
use crate::{RouteOptions, RouteResult, StrategyError};

/// Added to every leg before taking the reciprocal, so a zero-length leg
/// still scores finitely.
const SPIRAL_DISTANCE_OFFSET_KM: f64 = 0.1;

/// Start at the place nearest the centroid and keep stepping to the
/// continuation that maximises `1 / (d + 0.1)`.
///
/// Located places are first ranked by distance from the centroid; that rank
/// breaks ties between equally good continuations.  With fewer than two
/// located places this delegates to [`NearestNeighborStrategy`].  Unlocated
/// places are slotted in afterwards by category/address similarity.
#[derive(Clone, Copy, Debug, Default)]
pub struct CentroidSpiralStrategy;

impl RouteStrategy for CentroidSpiralStrategy {
    fn name(&self) -> &'static str {
        "centroid-spiral"
    }

    fn plan(&self, places: &[Place], options: &RouteOptions) -> Result<RouteResult, StrategyError> {
        let (located, unlocated) = partition(places);
        if located.len() < 2 {
            return NearestNeighborStrategy.plan(places, options);
        }
        ensure_finite(places)?;

        let center = centroid(located.iter().map(|&(_, c)| c));
        let mut ranked: Vec<(f64, _)> = located
            .into_iter()
            .map(|l| (center.distance_km(l.1), l))
            .collect();
        // Stable: equidistant places keep input order.
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut ranked = ranked.into_iter().map(|(_, l)| l);

        let mut order = match ranked.next() {
            Some(seed) => greedy_chain(seed, ranked.collect(), |tail, &(_, c)| {
                -1.0 / (tail.distance_km(c) + SPIRAL_DISTANCE_OFFSET_KM)
            }),
            None => Vec::new(),
        };

        for u in unlocated {
            let pos = logical_insert_position(places, &order, u);
            order.insert(pos, u);
        }

        Ok(finish(places, &order, options))
    }
}
