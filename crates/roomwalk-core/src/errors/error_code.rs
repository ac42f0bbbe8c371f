//! Stable string codes for every error, for logs and assertions.

/// Maps an error to a stable, machine-readable code.
pub trait RoomwalkErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const ROOM_NOT_VISITED: &str = "ROOM_NOT_VISITED";
pub const EXIT_NOT_FOUND: &str = "EXIT_NOT_FOUND";
pub const EXIT_ALREADY_RESOLVED: &str = "EXIT_ALREADY_RESOLVED";
pub const INCONSISTENT_REVERSE_EDGE: &str = "INCONSISTENT_REVERSE_EDGE";
pub const COUNTER_UNDERFLOW: &str = "COUNTER_UNDERFLOW";
pub const MISSING_NEIGHBOR: &str = "MISSING_NEIGHBOR";
pub const FRONTIER_UNREACHABLE: &str = "FRONTIER_UNREACHABLE";
pub const INVALID_MOVE: &str = "INVALID_MOVE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
