//! Per-request planner options.

use vr_core::TravelMode;

/// Preferences for one planning request.
///
/// Build with `RouteOptions::default()` and the `with_*` setters:
///
/// ```rust,ignore
/// let opts = RouteOptions::new(TravelMode::Walking)
///     .with_max_distance_km(4.0)
///     .with_scenic_preference(true);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RouteOptions {
    pub mode: TravelMode,

    /// Soft ceiling on total distance (km).  Exceeding it costs score; it
    /// never rejects a route.
    #[cfg_attr(feature = "serde", serde(rename = "maxDistance"))]
    pub max_distance_km: Option<f64>,

    /// Bias toward park/walkway stops: discounted next-hop distance,
    /// scenic starting place, and a score bonus per scenic stop.
    pub prefer_scenic_route: bool,

    /// Accepted and carried through, but no strategy reads it yet.
    pub avoid_backtracking: bool,
}

impl RouteOptions {
    pub fn new(mode: TravelMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_distance_km(mut self, km: f64) -> Self {
        self.max_distance_km = Some(km);
        self
    }

    pub fn with_scenic_preference(mut self, prefer: bool) -> Self {
        self.prefer_scenic_route = prefer;
        self
    }

    pub fn with_avoid_backtracking(mut self, avoid: bool) -> Self {
        self.avoid_backtracking = avoid;
        self
    }

    /// The distance ceiling, if one is set and positive.
    #[inline]
    pub fn effective_max_distance_km(&self) -> Option<f64> {
        self.max_distance_km.filter(|km| *km > 0.0)
    }
}
