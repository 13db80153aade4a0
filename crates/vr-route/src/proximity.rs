//! Nearest-neighbor ordering primitive.
//!
//! Orderings are expressed as `Vec<usize>` of indices into the caller's
//! place slice.  Nothing is spliced in place; every function returns a fresh
//! index sequence so the permutation property is easy to check.

use vr_core::{Coordinate, Place};

/// A place index paired with its (known) coordinate.
pub(crate) type Located = (usize, Coordinate);

/// Split `places` into located and unlocated indices, both in input order.
pub(crate) fn partition(places: &[Place]) -> (Vec<Located>, Vec<usize>) {
    let mut located   = Vec::with_capacity(places.len());
    let mut unlocated = Vec::new();
    for (i, p) in places.iter().enumerate() {
        match p.coordinate {
            Some(c) => located.push((i, c)),
            None    => unlocated.push(i),
        }
    }
    (located, unlocated)
}

/// Greedy chain from `seed` through every entry of `pool`.
///
/// At each step the next stop is the pool entry with the smallest
/// `cost(tail, candidate)`; ties go to the entry that appears first in
/// `pool`.  `seed` must not be in `pool`.  O(n²).
pub(crate) fn greedy_chain<F>(seed: Located, mut pool: Vec<Located>, cost: F) -> Vec<usize>
where
    F: Fn(Coordinate, &Located) -> f64,
{
    let mut order = Vec::with_capacity(pool.len() + 1);
    order.push(seed.0);
    let mut tail = seed.1;

    while !pool.is_empty() {
        let mut best_idx  = 0;
        let mut best_cost = f64::INFINITY;
        for (k, cand) in pool.iter().enumerate() {
            let c = cost(tail, cand);
            if c < best_cost {
                best_cost = c;
                best_idx  = k;
            }
        }
        let (next, coord) = pool.remove(best_idx);
        order.push(next);
        tail = coord;
    }
    order
}

/// Nearest-neighbor visiting order for `places`, as indices.
///
/// Seeds with the first place that has coordinates, walks the rest by plain
/// great-circle distance, then appends unlocated places in input order.  If
/// no place has coordinates the identity order is returned.
pub fn proximity_order(places: &[Place]) -> Vec<usize> {
    let (located, unlocated) = partition(places);
    let mut pool = located.into_iter();
    let Some(seed) = pool.next() else {
        return (0..places.len()).collect();
    };

    let mut order = greedy_chain(seed, pool.collect(), |tail, &(_, c)| tail.distance_km(c));
    order.extend(unlocated);
    order
}

/// [`proximity_order`] materialised as cloned places.
pub fn order_by_proximity(places: &[Place]) -> Vec<Place> {
    proximity_order(places).into_iter().map(|i| places[i].clone()).collect()
}
