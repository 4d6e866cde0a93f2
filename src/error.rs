//! Error types.
//!
//! Infeasible hops and unreachable destinations are ordinary values
//! ([`TravelTime::Infeasible`](crate::vehicle::TravelTime) and `None`), so
//! nothing here describes them.

use thiserror::Error;

use crate::location::LocationId;

/// A category tag that is not one of the known kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationKindError {
    #[error("unknown location kind `{0}`")]
    Unknown(String),
}

/// Rejected vehicle parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VehicleError {
    #[error("vehicle speed must be greater than zero")]
    ZeroSpeed,
}

/// Errors surfaced by registry-backed planning calls.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("no location with id {0}")]
    LocationNotFound(LocationId),
    #[error("no location named `{0}`")]
    NoLocationNamed(String),
    #[error("invalid planner options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
    #[error(transparent)]
    Vehicle(#[from] VehicleError),
}
