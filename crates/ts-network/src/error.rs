//! Network-model error type.

use thiserror::Error;

use ts_core::{CarId, IntersectionId, StreetId};

/// Configuration errors rejected while building the road/car model.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("{intersection} out of range (network has {count} intersections)")]
    IntersectionOutOfRange {
        intersection: IntersectionId,
        count:        usize,
    },

    #[error("street {0:?} has zero length")]
    ZeroLength(String),

    #[error("street name {0:?} is already in use")]
    DuplicateStreet(String),

    #[error("unknown street {0:?}")]
    UnknownStreet(String),

    #[error("{0} not found in network")]
    StreetNotFound(StreetId),

    #[error("{0} has an empty route")]
    EmptyRoute(CarId),

    #[error("{car}: street {from:?} does not lead into street {to:?}")]
    DisconnectedRoute {
        car:  CarId,
        from: String,
        to:   String,
    },

    #[error("too many {0} for 32-bit ids")]
    Capacity(&'static str),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
