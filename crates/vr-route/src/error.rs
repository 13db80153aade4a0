//! Planner and strategy error types.

use thiserror::Error;

use vr_core::PlaceId;

/// Caller-visible planner failure.
///
/// Everything other than an empty candidate set degrades locally (skipped
/// strategy, identity fallback) and never reaches the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no places provided for route generation")]
    EmptyInput,
}

pub type PlanResult<T> = Result<T, RouteError>;

/// Why a single ordering strategy produced no candidate.
///
/// The planner logs these and drops the strategy from scoring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyError {
    #[error("no candidate has coordinates")]
    NoCoordinates,

    #[error("place {0} has a non-finite coordinate")]
    NonFiniteCoordinate(PlaceId),

    #[error("ordering is not a permutation of the input ({got} of {expected} places)")]
    NotAPermutation { expected: usize, got: usize },
}
