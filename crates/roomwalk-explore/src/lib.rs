//! # roomwalk-explore
//!
//! Explores a world whose rooms are only revealed by visiting them and
//! produces one move sequence that walks every passage.
//!
//! - [`map`]: the discovery map, an incremental mirror of the rooms seen so far.
//! - [`policy`]: the greedy choice of the next unexplored exit.
//! - [`backtrack`]: breadth-first search over resolved exits to the nearest open room.
//! - [`engine`]: the driver loop combining the two modes.
//! - [`replay`]: walking a finished path against the world to check it.

pub mod backtrack;
pub mod engine;
pub mod map;
pub mod policy;
pub mod replay;

pub use engine::{ExplorationEngine, ExplorationReport};
pub use map::{DiscoveryMap, ExitRecord, ExitState};
pub use replay::{replay, verify_coverage, CoverageReport, ReplayReport};

use roomwalk_core::{Direction, IRoomOracle, RoomwalkResult};

/// Explore from `start` with the default policy and return every move taken.
pub fn explore<O: IRoomOracle>(oracle: &O, start: O::RoomId) -> RoomwalkResult<Vec<Direction>> {
    ExplorationEngine::default().explore(oracle, start)
}
