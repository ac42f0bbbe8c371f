//! Greedy discover-mode policy.

use std::fmt::Debug;
use std::hash::Hash;

use roomwalk_core::config::defaults;
use roomwalk_core::Direction;

use crate::map::DiscoveryMap;

/// Picks the next unexplored exit at the current room by fixed priority.
///
/// The priority list is the only tie-break, which makes the whole
/// exploration deterministic for a given world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyPolicy {
    priority: [Direction; 4],
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_DISCOVER_PRIORITY)
    }
}

impl GreedyPolicy {
    pub fn new(priority: [Direction; 4]) -> Self {
        Self { priority }
    }

    pub fn priority(&self) -> &[Direction; 4] {
        &self.priority
    }

    /// The exit to take from `room`, or `None` when it has no unexplored exit.
    pub fn choose<R: Clone + Eq + Hash + Debug>(
        &self,
        map: &DiscoveryMap<R>,
        room: &R,
    ) -> Option<Direction> {
        map.first_unexplored_direction(room, &self.priority)
    }
}
