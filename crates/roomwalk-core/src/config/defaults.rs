//! Compiled defaults.

use crate::direction::Direction;

/// Greedy order used when choosing an unexplored exit at the current room.
pub const DEFAULT_DISCOVER_PRIORITY: [Direction; 4] = Direction::ALL;

/// Order in which resolved exits are expanded during the backtrack search.
/// Decides which of several equally near rooms is chosen.
pub const DEFAULT_BACKTRACK_PRIORITY: [Direction; 4] = Direction::ALL;
