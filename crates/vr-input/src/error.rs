use thiserror::Error;

use vr_route::RouteError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("place parse error: {0}")]
    Parse(String),

    #[error("places array is required and cannot be empty")]
    EmptyRequest,

    #[error("no valid places provided")]
    NoValidPlaces,

    #[error("malformed request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("route planning failed: {0}")]
    Route(#[from] RouteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;
