//! CSV candidate-place loader.
//!
//! # CSV format
//!
//! One row per place.  `lat`/`lng` may be left empty for places whose
//! position is unknown.
//!
//! ```csv
//! id,name,category,address,lat,lng
//! mty-fundidora,Parque Fundidora,park,"Av. Fundidora 501, Obrera",25.6784,-100.2836
//! mty-marco,Museo MARCO,museum,"Zuazua y Jardón, Centro",25.6646,-100.3096
//! mty-cafe-iguana,Café Iguana,cafe,"Montemayor 927, Barrio Antiguo",,
//! ```
//!
//! A row with only one of `lat`/`lng` is loaded without coordinates.  Rows
//! with a blank `id`, `name` or `address` are skipped.  Any other malformed
//! value aborts the load with [`InputError::Parse`] naming the line.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use vr_core::{Coordinate, Place};

use crate::InputError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlaceRecord {
    id:       String,
    name:     String,
    category: String,
    address:  String,
    #[serde(default)]
    lat:      String,
    #[serde(default)]
    lng:      String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load candidate places from a CSV file.
pub fn load_places_csv(path: &Path) -> Result<Vec<Place>, InputError> {
    let file = std::fs::File::open(path).map_err(InputError::Io)?;
    load_places_reader(file)
}

/// Like [`load_places_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded datasets.
pub fn load_places_reader<R: Read>(reader: R) -> Result<Vec<Place>, InputError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut places = Vec::new();

    for (row, result) in csv_reader.deserialize::<PlaceRecord>().enumerate() {
        // Header is line 1.
        let line = row + 2;
        let rec = result.map_err(|e| InputError::Parse(format!("line {line}: {e}")))?;

        if [&rec.id, &rec.name, &rec.address].iter().any(|s| s.trim().is_empty()) {
            debug!(line, "skipping place row with blank id, name or address");
            continue;
        }

        let coordinate = parse_coordinate(&rec.lat, &rec.lng)
            .map_err(|msg| InputError::Parse(format!("line {line}: {msg}")))?;

        let mut place = Place::new(rec.id.trim(), rec.name.trim(), rec.category.trim(), rec.address.trim());
        place.coordinate = coordinate;
        places.push(place);
    }

    Ok(places)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_coordinate(lat: &str, lng: &str) -> Result<Option<Coordinate>, String> {
    let (lat, lng) = (lat.trim(), lng.trim());
    if lat.is_empty() || lng.is_empty() {
        return Ok(None);
    }
    let parse = |s: &str, what: &str| {
        s.parse::<f64>()
            .map_err(|_| format!("invalid {what} {s:?}: expected a decimal number"))
    };
    let (lat, lng) = (parse(lat, "lat")?, parse(lng, "lng")?);
    Coordinate::checked(lat, lng)
        .map(Some)
        .map_err(|e| e.to_string())
}
