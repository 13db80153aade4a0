//! `vr-input` — getting candidate places into the planner.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`loader`]  | `load_places_csv`, `load_places_reader`                      |
//! | [`request`] | `RouteRequest`, `RawPlace`, `RawOptions`, `parse_travel_mode` |
//! | [`error`]   | `InputError`, `InputResult<T>`                               |
//!
//! Both entry points are lenient about individual places: rows or entries
//! with a blank `id`, `name` or `address` are dropped and logged at `debug`.
//! Structural problems (unreadable CSV, bad numbers, malformed JSON) are
//! errors.

pub mod error;
pub mod loader;
pub mod request;

#[cfg(test)]
mod tests;

pub use error::{InputError, InputResult};
pub use loader::{load_places_csv, load_places_reader};
pub use request::{RawOptions, RawPlace, RouteRequest, parse_travel_mode};
