//! Category-priority insertion.

use vr_core::{Category, Place, TravelMode};

use super::{RouteStrategy, best_insert_position, best_starting_place, ensure_finite, finish};
use crate::{RouteOptions, RouteResult, StrategyError};

static WALKING_PRIORITY: [Category; 8] = [
    Category::Park,
    Category::Walkway,
    Category::Cafe,
    Category::CafeBakery,
    Category::Museum,
    Category::Landmark,
    Category::District,
    Category::Zoo,
];

static DRIVING_PRIORITY: [Category; 8] = [
    Category::Museum,
    Category::Landmark,
    Category::District,
    Category::Park,
    Category::Zoo,
    Category::Cafe,
    Category::CafeBakery,
    Category::Walkway,
];

// ── CategoryPriority ──────────────────────────────────────────────────────────

/// Per-mode category visiting priority.
///
/// The default tables put green, walkable stops first on foot and the big
/// indoor attractions first by car:
///
/// | Mode    | Priority                                                              |
/// |---------|-----------------------------------------------------------------------|
/// | Walking | park, walkway, cafe, cafe-bakery, museum, landmark, district, zoo     |
/// | Driving | museum, landmark, district, park, zoo, cafe, cafe-bakery, walkway     |
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPriority {
    walking: Vec<Category>,
    driving: Vec<Category>,
}

impl CategoryPriority {
    pub fn new(walking: Vec<Category>, driving: Vec<Category>) -> Self {
        Self { walking, driving }
    }

    pub fn for_mode(&self, mode: TravelMode) -> &[Category] {
        match mode {
            TravelMode::Walking => &self.walking,
            TravelMode::Driving => &self.driving,
        }
    }
}

impl Default for CategoryPriority {
    fn default() -> Self {
        Self::new(WALKING_PRIORITY.to_vec(), DRIVING_PRIORITY.to_vec())
    }
}

// ── Strategy ──────────────────────────────────────────────────────────────────

/// Visit categories in priority order, placing each stop where it adds the
/// least distance.
///
/// The first non-empty category seeds the route with its best starting
/// place; every other place (rest of that category, then each later
/// category) is inserted at its cheapest position.  Categories missing from
/// the priority table come last, in order of first appearance.
///
/// Fails with [`StrategyError::NoCoordinates`] when no place is located,
/// since every insertion would then be free and the order meaningless.
#[derive(Clone, Debug, Default)]
pub struct CategoryPriorityStrategy {
    priority: CategoryPriority,
}

impl CategoryPriorityStrategy {
    pub fn new(priority: CategoryPriority) -> Self {
        Self { priority }
    }
}

impl RouteStrategy for CategoryPriorityStrategy {
    fn name(&self) -> &'static str {
        "category-priority"
    }

    fn plan(&self, places: &[Place], options: &RouteOptions) -> Result<RouteResult, StrategyError> {
        if !places.iter().any(Place::has_coordinates) {
            return Err(StrategyError::NoCoordinates);
        }
        ensure_finite(places)?;

        let groups = group_by_category(places);
        let table  = self.priority.for_mode(options.mode);

        let prioritized = table
            .iter()
            .filter_map(|cat| groups.iter().find(|(c, _)| c == cat));
        let unranked = groups.iter().filter(|(c, _)| !table.contains(c));

        let mut order: Vec<usize> = Vec::with_capacity(places.len());
        for (_, members) in prioritized.chain(unranked) {
            let rest: Vec<usize> = if order.is_empty() {
                let start = best_starting_place(places, members, options);
                order.push(start);
                members.iter().copied().filter(|&m| m != start).collect()
            } else {
                members.clone()
            };
            for m in rest {
                let pos = best_insert_position(places, &order, m);
                order.insert(pos, m);
            }
        }

        Ok(finish(places, &order, options))
    }
}

/// Groups in order of first appearance; members in input order.
fn group_by_category(places: &[Place]) -> Vec<(Category, Vec<usize>)> {
    let mut groups: Vec<(Category, Vec<usize>)> = Vec::new();
    for (i, p) in places.iter().enumerate() {
        match groups.iter_mut().find(|(c, _)| *c == p.category) {
            Some((_, members)) => members.push(i),
            None => groups.push((p.category.clone(), vec![i])),
        }
    }
    groups
}
