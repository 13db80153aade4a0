//! plan — order a handful of Monterrey stops into a walkable itinerary.
//!
//! ```text
//! plan                       # built-in candidate set, walking
//! plan places.csv driving    # CSV candidates, second argument is the mode
//! plan request.json          # full request body (places + options)
//! plan places.csv --json     # print the RouteResult as JSON instead
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG=vr_route=debug` to see every
//! strategy's score.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use vr_core::TravelMode;
use vr_input::{RouteRequest, load_places_csv, load_places_reader, parse_travel_mode};
use vr_route::{RouteOptions, RoutePlanner, RouteResult};

// ── Candidate CSV ─────────────────────────────────────────────────────────────

// Barrio Antiguo / Fundidora loop.  Café Iguana has no coordinates and is
// slotted in by address.
const PLACES_CSV: &str = "\
id,name,category,address,lat,lng\n\
mty-fundidora,Parque Fundidora,park,\"Av. Fundidora 501, Obrera\",25.6784,-100.2836\n\
mty-santa-lucia,Paseo Santa Lucía,walkway,\"Paseo Santa Lucía, Centro\",25.6700,-100.2990\n\
mty-macroplaza,Macroplaza,landmark,\"Zuazua s/n, Centro\",25.6694,-100.3097\n\
mty-marco,Museo MARCO,museum,\"Zuazua y Jardón, Centro\",25.6646,-100.3096\n\
mty-barrio,Barrio Antiguo,district,\"Barrio Antiguo, Centro\",25.6660,-100.3030\n\
mty-iguana,Café Iguana,cafe,\"Montemayor 927, Barrio Antiguo\",,\n\
";

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vr_route=info,plan=info"));
    fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let positional: Vec<&str> = args.iter().map(String::as_str).filter(|a| *a != "--json").collect();

    let t0 = Instant::now();
    let route = match positional.first() {
        Some(path) if path.ends_with(".json") => plan_request(Path::new(path))?,
        Some(path) => {
            let places = load_places_csv(Path::new(path))
                .with_context(|| format!("loading places from {path}"))?;
            plan_places(&places, positional.get(1).copied())?
        }
        None => {
            let places = load_places_reader(Cursor::new(PLACES_CSV))?;
            plan_places(&places, None)?
        }
    };
    info!(elapsed_ms = t0.elapsed().as_secs_f64() * 1e3, "route planned");

    if as_json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        print_route(&route);
    }
    Ok(())
}

fn plan_request(path: &Path) -> Result<RouteResult> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("reading request {}", path.display()))?;
    Ok(RouteRequest::from_json(&body)?.plan()?)
}

fn plan_places(places: &[vr_core::Place], mode: Option<&str>) -> Result<RouteResult> {
    let mode = mode.map_or(TravelMode::Walking, parse_travel_mode);
    let planner = RoutePlanner::default();
    info!(places = places.len(), %mode, strategies = ?planner.strategy_names(), "planning");
    Ok(planner.plan(places, &RouteOptions::default().with_mode(mode).with_avoid_backtracking(true))?)
}

fn print_route(route: &RouteResult) {
    println!("=== plan — {} stops ===", route.stop_count());
    println!();
    println!("{:<4} {:<24} {:<12} {}", "#", "Stop", "Category", "Position");
    println!("{}", "-".repeat(64));
    for (i, place) in route.ordered_places.iter().enumerate() {
        let position = place
            .coordinate
            .map_or_else(|| place.address.clone(), |c| c.to_string());
        println!("{:<4} {:<24} {:<12} {}", i + 1, place.name, place.category.as_str(), position);
    }
    println!();
    println!("Distance : {:.2} km", route.total_distance_km);
    println!("Time     : {} min", route.estimated_minutes);
    println!("Quality  : {}", route.route_quality);
    println!("Maps     : {}", route.gmaps_url);
}
