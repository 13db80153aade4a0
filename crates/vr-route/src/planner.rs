//! Multi-strategy planner: run every strategy, score, keep the best.

use tracing::{debug, warn};

use vr_core::{Place, PlaceId};

use crate::estimate::score_route;
use crate::strategy::{
    CategoryPriority, CategoryPriorityStrategy, CentroidSpiralStrategy, NearestNeighborStrategy,
    RouteStrategy,
};
use crate::{PlanResult, RouteError, RouteOptions, RouteResult, StrategyError};

/// Orders a candidate set by trying several strategies and keeping the
/// highest-scoring result.
///
/// # Evaluation
///
/// 1. Empty input → [`RouteError::EmptyInput`].
/// 2. One place → [`RouteResult::single`].
/// 3. Otherwise every strategy runs over the full set (on Rayon's pool with
///    the `parallel` feature).  Failures and non-permutation results are
///    logged and skipped.  Survivors are scored with
///    [`score_route`][crate::score_route]; a later strategy only replaces the
///    current best with a strictly higher score, so earlier strategies win
///    ties.
/// 4. If nothing survives, the input order is returned unoptimised with zero
///    distance.
///
/// # Example
///
/// ```rust,ignore
/// let planner = RoutePlanner::default();
/// let route = planner.plan(&places, &RouteOptions::new(TravelMode::Walking))?;
/// println!("{} stops, {:.1} km: {}", route.stop_count(), route.total_distance_km, route.gmaps_url);
/// ```
pub struct RoutePlanner {
    strategies: Vec<Box<dyn RouteStrategy>>,
}

impl Default for RoutePlanner {
    /// Nearest-neighbor, then centroid spiral, then category priority with
    /// the default tables.
    fn default() -> Self {
        Self::with_category_priority(CategoryPriority::default())
    }
}

impl RoutePlanner {
    /// Default line-up with custom category-priority tables.
    pub fn with_category_priority(priority: CategoryPriority) -> Self {
        Self::with_strategies(vec![
            Box::new(NearestNeighborStrategy),
            Box::new(CentroidSpiralStrategy),
            Box::new(CategoryPriorityStrategy::new(priority)),
        ])
    }

    /// Arbitrary strategies, evaluated (and tie-broken) in the given order.
    pub fn with_strategies(strategies: Vec<Box<dyn RouteStrategy>>) -> Self {
        Self { strategies }
    }

    /// Strategy labels in evaluation order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn plan(&self, places: &[Place], options: &RouteOptions) -> PlanResult<RouteResult> {
        match places {
            []    => return Err(RouteError::EmptyInput),
            [one] => return Ok(RouteResult::single(one.clone(), options.mode)),
            _     => {}
        }

        let mut best: Option<(f64, RouteResult)> = None;
        for (name, outcome) in self.run_strategies(places, options) {
            let route = match outcome.and_then(|r| verify_permutation(places, r)) {
                Ok(route) => route,
                Err(e) => {
                    warn!(strategy = name, error = %e, "route strategy failed");
                    continue;
                }
            };

            let score = score_route(&route, options);
            debug!(
                strategy    = name,
                score,
                distance_km = route.total_distance_km,
                minutes     = route.estimated_minutes,
                quality     = %route.route_quality,
                "route strategy evaluated"
            );

            if best.as_ref().is_none_or(|(top, _)| score > *top) {
                best = Some((score, route));
            }
        }

        Ok(match best {
            Some((_, route)) => route,
            None => {
                warn!(places = places.len(), "all route strategies failed; using input order");
                RouteResult::from_order(places.to_vec(), 0.0, options.mode)
            }
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn run_strategies(
        &self,
        places:  &[Place],
        options: &RouteOptions,
    ) -> Vec<(&'static str, Result<RouteResult, StrategyError>)> {
        self.strategies
            .iter()
            .map(|s| (s.name(), s.plan(places, options)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_strategies(
        &self,
        places:  &[Place],
        options: &RouteOptions,
    ) -> Vec<(&'static str, Result<RouteResult, StrategyError>)> {
        use rayon::prelude::*;
        // Indexed collect preserves strategy order.
        self.strategies
            .par_iter()
            .map(|s| (s.name(), s.plan(places, options)))
            .collect()
    }
}

/// Plan `places` with the default [`RoutePlanner`].
pub fn generate_optimal_route(places: &[Place], options: &RouteOptions) -> PlanResult<RouteResult> {
    RoutePlanner::default().plan(places, options)
}

/// Pass `route` through only if its stops are the same multiset of ids as
/// `places`.
fn verify_permutation(places: &[Place], route: RouteResult) -> Result<RouteResult, StrategyError> {
    let mut expected: Vec<&PlaceId> = places.iter().map(|p| &p.id).collect();
    let mut got: Vec<&PlaceId> = route.ids().collect();
    if expected.len() == got.len() {
        expected.sort_unstable();
        got.sort_unstable();
        if expected == got {
            return Ok(route);
        }
    }
    Err(StrategyError::NotAPermutation { expected: places.len(), got: route.stop_count() })
}
