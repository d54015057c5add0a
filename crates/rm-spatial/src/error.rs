//! Spatial-subsystem error type.

use thiserror::Error;

use rm_core::Location;

/// Errors produced by `rm-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// A road segment referenced a location that was never added as a vertex.
    #[error("location {0} is not a vertex of the road graph")]
    UnknownVertex(Location),

    #[error("road segment {from} to {to} has invalid weight {weight}")]
    InvalidWeight { from: Location, to: Location, weight: f64 },

    #[error("no route from {from} to {to}")]
    NoRoute { from: Location, to: Location },

    #[error("graph parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
