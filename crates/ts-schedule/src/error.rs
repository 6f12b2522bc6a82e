use thiserror::Error;

use ts_core::{IntersectionId, StreetId};
use ts_network::NetworkError;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("{intersection} out of range (schedule covers {count} intersections)")]
    IntersectionOutOfRange {
        intersection: IntersectionId,
        count:        usize,
    },

    #[error("schedule covers {got} intersections but the network has {expected}")]
    SizeMismatch { expected: usize, got: usize },

    #[error("{intersection}: phase for {street} has zero duration")]
    ZeroDuration {
        intersection: IntersectionId,
        street:       StreetId,
    },

    #[error("{intersection}: street {street:?} does not end at this intersection")]
    NotIncoming {
        intersection: IntersectionId,
        street:       String,
    },

    #[error("{intersection}: street {street:?} has more than one phase")]
    DuplicatePhase {
        intersection: IntersectionId,
        street:       String,
    },

    #[error("phase slot {slot} out of range (plan has {len} phases)")]
    SlotOutOfRange { slot: usize, len: usize },

    #[error("cannot swap phases of unequal duration ({left} vs {right} ticks)")]
    UnequalDurations { left: u32, right: u32 },

    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
