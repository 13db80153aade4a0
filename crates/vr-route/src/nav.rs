//! Multi-stop navigation deep link.
//!
//! # Format
//!
//! ```text
//! https://www.google.com/maps/dir/?api=1&origin=<O>&destination=<D>[&waypoints=<W1>|<W2>|…]&travelmode=<mode>
//! ```
//!
//! Each stop token is `lat,lng` when the place has coordinates, otherwise the
//! percent-encoded address.  Parameter names, the `|` separator and the
//! `travelmode` values are consumed by the map service verbatim; keep them
//! bit-exact.

use std::fmt::Write as _;

use vr_core::{Place, TravelMode};

const BASE_URL: &str = "https://www.google.com/maps/dir/?api=1";

/// Build the navigation URL for `places`, visited in slice order.
///
/// One place yields `origin == destination` and no waypoints; two places
/// yield no `waypoints` parameter at all.  No reordering or validation
/// happens here.  An empty slice yields an empty string.
pub fn navigation_url(places: &[Place], mode: TravelMode) -> String {
    let (Some(first), Some(last)) = (places.first(), places.last()) else {
        return String::new();
    };

    let mut url = String::from(BASE_URL);
    // Writing into a String cannot fail.
    let _ = write!(url, "&origin={}&destination={}", stop_token(first), stop_token(last));

    if places.len() > 2 {
        let waypoints: Vec<String> = places[1..places.len() - 1].iter().map(stop_token).collect();
        let _ = write!(url, "&waypoints={}", waypoints.join("|"));
    }

    let _ = write!(url, "&travelmode={}", mode.as_str());
    url
}

/// `lat,lng` or the encoded address.
pub fn stop_token(place: &Place) -> String {
    match place.coordinate {
        Some(c) => c.to_string(),
        None    => encode_component(&place.address),
    }
}

/// Percent-encode `s` as a URI component.
///
/// Leaves `A–Z a–z 0–9 - _ . ! ~ * ' ( )` untouched and encodes every other
/// UTF-8 byte as `%XX` (uppercase hex), matching the browser
/// `encodeURIComponent` the map service expects.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if b.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&b) {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}
