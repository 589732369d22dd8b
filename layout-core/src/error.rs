use crate::types::{Direction, Point, Rect};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("no open doorway left to extend the level from")]
    EmptyFrontier,
    #[error("candidate room has no doorway facing {required}")]
    NoCompatibleExit { required: Direction },
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    #[error("hallway is missing the room its position is relative to")]
    UnresolvedHallwayAccess,
    #[error("room {candidate} overlaps existing room {existing}")]
    RoomOverlap { candidate: Rect, existing: Rect },
    #[error("room {candidate} does not fit inside the level")]
    OutOfBounds { candidate: Rect },
    #[error("hallway runs through a room at {at}")]
    HallwayObstructed { at: Point },
}

impl LayoutError {
    /// Whether the error only rules out the current placement attempt, so
    /// the generator may try again with a new entryway or room.
    pub fn is_attempt_failure(&self) -> bool {
        matches!(
            self,
            LayoutError::NoCompatibleExit { .. }
                | LayoutError::RoomOverlap { .. }
                | LayoutError::OutOfBounds { .. }
                | LayoutError::HallwayObstructed { .. }
        )
    }
}
