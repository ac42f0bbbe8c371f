//! Path replay and coverage verification.
//!
//! Replays a move sequence against the oracle, then compares the walked
//! edges with every edge reachable from the start room.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info_span};

use roomwalk_core::errors::ExploreError;
use roomwalk_core::{Direction, IRoomOracle, RoomwalkResult};

/// What happened while walking a path.
#[derive(Debug, Clone)]
pub struct ReplayReport<R> {
    pub start: R,
    pub end: R,
    /// Rooms in first-visit order, starting with `start`.
    pub visited: Vec<R>,
    /// How many times each exit `(room, direction)` was taken.
    pub traversals: FxHashMap<(R, Direction), usize>,
    pub moves: usize,
}

impl<R: Clone + Eq + Hash> ReplayReport<R> {
    pub fn returns_to_start(&self) -> bool {
        self.start == self.end
    }

    pub fn times_taken(&self, room: &R, direction: Direction) -> usize {
        self.traversals
            .get(&(room.clone(), direction))
            .copied()
            .unwrap_or(0)
    }
}

/// Replay compared with the full reachable world.
#[derive(Debug, Clone)]
pub struct CoverageReport<R> {
    pub replay: ReplayReport<R>,
    /// Exits whose edge was never walked in either direction, in discovery order.
    pub missing: Vec<(R, Direction)>,
    pub rooms_total: usize,
    pub rooms_visited: usize,
}

impl<R> CoverageReport<R> {
    /// Every reachable room was entered and every reachable edge was walked.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.rooms_visited == self.rooms_total
    }
}

/// Walk `path` from `start`, failing on the first move the current room does not allow.
pub fn replay<O: IRoomOracle>(
    oracle: &O,
    start: &O::RoomId,
    path: &[Direction],
) -> RoomwalkResult<ReplayReport<O::RoomId>> {
    let _span = info_span!("roomwalk.replay", start = ?start, moves = path.len()).entered();

    let mut current = start.clone();
    let mut seen = FxHashSet::default();
    let mut visited = vec![start.clone()];
    let mut traversals = FxHashMap::default();
    seen.insert(start.clone());

    for (step, &direction) in path.iter().enumerate() {
        if !oracle.exits(&current).contains(&direction) {
            return Err(ExploreError::InvalidMove {
                step,
                room: format!("{current:?}"),
                direction,
            }
            .into());
        }
        let next = oracle
            .neighbor(&current, direction)
            .ok_or_else(|| ExploreError::MissingNeighbor {
                room: format!("{current:?}"),
                direction,
            })?;
        *traversals.entry((current.clone(), direction)).or_insert(0) += 1;
        if seen.insert(next.clone()) {
            visited.push(next.clone());
        }
        current = next;
    }

    Ok(ReplayReport {
        start: start.clone(),
        end: current,
        visited,
        traversals,
        moves: path.len(),
    })
}

/// Replay `path` and list every reachable edge it never walked.
pub fn verify_coverage<O: IRoomOracle>(
    oracle: &O,
    start: &O::RoomId,
    path: &[Direction],
) -> RoomwalkResult<CoverageReport<O::RoomId>> {
    let walked = replay(oracle, start, path)?;
    let (rooms, exits) = reachable_exits(oracle, start);

    let missing: Vec<_> = exits
        .into_iter()
        .filter(|(room, direction)| {
            if walked.times_taken(room, *direction) > 0 {
                return false;
            }
            // Walking the edge from the far side covers it too.
            match oracle.neighbor(room, *direction) {
                Some(next) => walked.times_taken(&next, direction.opposite()) == 0,
                None => true,
            }
        })
        .collect();

    debug!(
        rooms_total = rooms,
        rooms_visited = walked.visited.len(),
        missing = missing.len(),
        "coverage checked"
    );

    Ok(CoverageReport {
        rooms_total: rooms,
        rooms_visited: walked.visited.len(),
        missing,
        replay: walked,
    })
}

/// Breadth-first enumeration of the world from `start`.
///
/// Returns the number of reachable rooms and every exit of those rooms,
/// rooms in discovery order and exits in canonical order.
fn reachable_exits<O: IRoomOracle>(
    oracle: &O,
    start: &O::RoomId,
) -> (usize, Vec<(O::RoomId, Direction)>) {
    let mut seen = FxHashSet::default();
    let mut queue = VecDeque::new();
    let mut exits = Vec::new();
    seen.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(room) = queue.pop_front() {
        let mut directions = oracle.exits(&room);
        directions.sort();
        directions.dedup();
        for direction in directions {
            if let Some(next) = oracle.neighbor(&room, direction) {
                if seen.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
            exits.push((room.clone(), direction));
        }
    }
    (seen.len(), exits)
}
