//! Exploration driver and replay errors.

use crate::direction::Direction;

use super::error_code::{self, RoomwalkErrorCode};

/// Errors that abort an exploration run or a path replay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExploreError {
    #[error("oracle lists exit {direction} at room {room} but reports no neighbor")]
    MissingNeighbor { room: String, direction: Direction },

    #[error("no reachable room with unexplored exits from {room} ({unexplored} exits unexplored)")]
    FrontierUnreachable { room: String, unexplored: usize },

    #[error("step {step}: room {room} has no exit {direction}")]
    InvalidMove {
        step: usize,
        room: String,
        direction: Direction,
    },
}

impl RoomwalkErrorCode for ExploreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingNeighbor { .. } => error_code::MISSING_NEIGHBOR,
            Self::FrontierUnreachable { .. } => error_code::FRONTIER_UNREACHABLE,
            Self::InvalidMove { .. } => error_code::INVALID_MOVE,
        }
    }
}
