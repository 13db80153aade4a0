//! Travel mode shared by the planner, the estimator, and the URL builder.
//!
//! The lowercase labels are part of the navigation-URL wire format
//! (`travelmode=walking|driving`) and must not change.

use std::str::FromStr;

use crate::CoreError;

/// How the itinerary is travelled between stops.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// On foot (default).
    #[default]
    Walking,
    /// Private vehicle.
    Driving,
}

impl TravelMode {
    /// Wire label, also used as the `travelmode` URL parameter value.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Driving => "driving",
        }
    }
}

impl FromStr for TravelMode {
    type Err = CoreError;

    /// Strict parse of the two wire labels (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walking" => Ok(TravelMode::Walking),
            "driving" => Ok(TravelMode::Driving),
            other => Err(CoreError::Parse(format!(
                "invalid travel mode {other:?}: expected \"walking\" or \"driving\""
            ))),
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
