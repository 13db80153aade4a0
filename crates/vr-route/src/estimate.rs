//! Coarse time estimate, qualitative grade, and the strategy ranking score.
//!
//! # Speeds and dwell times
//!
//! | Mode    | Speed   | Dwell per stop |
//! |---------|---------|----------------|
//! | Walking | 4 km/h  | 20 min         |
//! | Driving | 30 km/h | 15 min         |
//!
//! # Quality thresholds
//!
//! `avg` is total distance divided by the number of legs (at least 1).
//!
//! | Mode    | excellent               | good                   |
//! |---------|-------------------------|------------------------|
//! | Walking | avg < 0.5 and total < 3 | avg < 1 and total < 5  |
//! | Driving | avg < 2 and total < 15  | avg < 5 and total < 25 |

use vr_core::TravelMode;

use crate::{RouteOptions, RouteQuality, RouteResult};

const WALKING_SPEED_KMH: f64 = 4.0;
const DRIVING_SPEED_KMH: f64 = 30.0;

const WALKING_DWELL_MIN: f64 = 20.0;
const DRIVING_DWELL_MIN: f64 = 15.0;

/// Dwell estimate for a one-stop itinerary.
pub const SINGLE_STOP_MINUTES: u32 = 30;
/// Per-stop estimate when no stop has coordinates.
pub const ADDRESS_ONLY_MINUTES_PER_STOP: u32 = 45;

const BASE_SCORE:            f64 = 100.0;
const OVER_BUDGET_PER_KM:    f64 = 10.0;
const DISTANCE_PER_KM:       f64 = 2.0;
const SHORT_ROUTE_MINUTES:   u32 = 180;
const SHORT_ROUTE_BONUS:     f64 = 20.0;
const SCENIC_BONUS_PER_STOP: f64 = 10.0;

/// Travel plus dwell time in whole minutes (rounded half away from zero).
pub fn estimate_route_time(total_km: f64, stop_count: usize, mode: TravelMode) -> u32 {
    let (speed, dwell) = match mode {
        TravelMode::Walking => (WALKING_SPEED_KMH, WALKING_DWELL_MIN),
        TravelMode::Driving => (DRIVING_SPEED_KMH, DRIVING_DWELL_MIN),
    };
    let travel = total_km / speed * 60.0;
    let stops  = stop_count as f64 * dwell;
    (travel + stops).round().max(0.0) as u32
}

/// Grade a route by total distance and average leg length.
pub fn assess_route_quality(total_km: f64, stop_count: usize, mode: TravelMode) -> RouteQuality {
    let legs = stop_count.saturating_sub(1).max(1) as f64;
    let avg  = total_km / legs;

    let (excellent, good) = match mode {
        TravelMode::Walking => ((0.5, 3.0), (1.0, 5.0)),
        TravelMode::Driving => ((2.0, 15.0), (5.0, 25.0)),
    };

    if avg < excellent.0 && total_km < excellent.1 {
        RouteQuality::Excellent
    } else if avg < good.0 && total_km < good.1 {
        RouteQuality::Good
    } else {
        RouteQuality::Fair
    }
}

/// Ranking score for a finished route; higher is better, never negative.
///
/// Starts at 100, loses 10 per km over the distance ceiling and 2 per km
/// travelled, gains 20 when the estimate is under three hours, and, with the
/// scenic preference, gains 10 per park/walkway stop.
pub fn score_route(route: &RouteResult, options: &RouteOptions) -> f64 {
    let mut score = BASE_SCORE;

    if let Some(max_km) = options.effective_max_distance_km() {
        if route.total_distance_km > max_km {
            score -= (route.total_distance_km - max_km) * OVER_BUDGET_PER_KM;
        }
    }

    score -= route.total_distance_km * DISTANCE_PER_KM;

    if route.estimated_minutes < SHORT_ROUTE_MINUTES {
        score += SHORT_ROUTE_BONUS;
    }

    if options.prefer_scenic_route {
        let scenic = route.ordered_places.iter().filter(|p| p.is_scenic()).count();
        score += scenic as f64 * SCENIC_BONUS_PER_STOP;
    }

    score.max(0.0)
}
