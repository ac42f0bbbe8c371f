//! Backtrack-mode search.
//!
//! Breadth-first over rooms of the discovery map, following resolved exits
//! only, with a parent pointer per reached room. The first dequeued room with
//! an unresolved exit is the nearest by edge count; among equally near rooms
//! the one reached first wins, which is decided by the expansion order of
//! each room's exits.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use roomwalk_core::Direction;

use crate::map::DiscoveryMap;

/// Shortest walk over resolved exits to a room that still has an open exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacktrackRoute<R> {
    /// Room the walk ends in.
    pub target: R,
    /// Moves from the start room to `target`, in order.
    pub directions: Vec<Direction>,
}

impl<R> BacktrackRoute<R> {
    pub fn hops(&self) -> usize {
        self.directions.len()
    }
}

/// Find the nearest room reachable from `start` that has an unresolved exit.
///
/// Exits of each room are expanded in `priority` order. Returns `None` when
/// the resolved part of the map reachable from `start` has no open exit.
pub fn nearest_unexplored<R>(
    map: &DiscoveryMap<R>,
    start: &R,
    priority: &[Direction],
) -> Option<BacktrackRoute<R>>
where
    R: Clone + Eq + Hash + Debug,
{
    let mut parents: FxHashMap<R, Option<(R, Direction)>> = FxHashMap::default();
    let mut queue = VecDeque::new();
    parents.insert(start.clone(), None);
    queue.push_back(start.clone());

    while let Some(room) = queue.pop_front() {
        if map.has_unexplored(&room) {
            let directions = reconstruct(&parents, &room);
            return Some(BacktrackRoute {
                target: room,
                directions,
            });
        }
        let Some(record) = map.exits(&room) else {
            continue;
        };
        for (direction, next) in record.resolved_in(priority) {
            if !parents.contains_key(next) {
                parents.insert(next.clone(), Some((room.clone(), direction)));
                queue.push_back(next.clone());
            }
        }
    }
    None
}

fn reconstruct<R>(parents: &FxHashMap<R, Option<(R, Direction)>>, target: &R) -> Vec<Direction>
where
    R: Clone + Eq + Hash,
{
    let mut directions = Vec::new();
    let mut cursor = target;
    while let Some(Some((parent, direction))) = parents.get(cursor) {
        directions.push(*direction);
        cursor = parent;
    }
    directions.reverse();
    directions
}
