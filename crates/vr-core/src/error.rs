//! Core error type.
//!
//! `vr-route` and `vr-input` define their own error enums; `CoreError` only
//! covers failures of the data-model constructors and parsers in this crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },
}

/// Shorthand result type for `vr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
