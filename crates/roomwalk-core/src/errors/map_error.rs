//! Discovery map contract violations.

use crate::direction::Direction;

use super::error_code::{self, RoomwalkErrorCode};

/// Misuse of the discovery map. These are programming errors in the caller
/// or the oracle, never recoverable runtime conditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("room {room} has not been visited")]
    RoomNotVisited { room: String },

    #[error("room {room} has no exit {direction}")]
    ExitNotFound { room: String, direction: Direction },

    #[error("exit {direction} of room {room} is already resolved to {neighbor}")]
    ExitAlreadyResolved {
        room: String,
        direction: Direction,
        neighbor: String,
    },

    #[error("room {to} has no open exit {reverse} back to {from}")]
    InconsistentReverseEdge {
        from: String,
        to: String,
        reverse: Direction,
    },

    #[error("unexplored counter underflow: {unexplored} remaining")]
    CounterUnderflow { unexplored: usize },
}

impl RoomwalkErrorCode for MapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RoomNotVisited { .. } => error_code::ROOM_NOT_VISITED,
            Self::ExitNotFound { .. } => error_code::EXIT_NOT_FOUND,
            Self::ExitAlreadyResolved { .. } => error_code::EXIT_ALREADY_RESOLVED,
            Self::InconsistentReverseEdge { .. } => error_code::INCONSISTENT_REVERSE_EDGE,
            Self::CounterUnderflow { .. } => error_code::COUNTER_UNDERFLOW,
        }
    }
}
