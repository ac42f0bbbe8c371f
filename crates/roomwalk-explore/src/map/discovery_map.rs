use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::trace;

use roomwalk_core::errors::MapError;
use roomwalk_core::{Direction, IRoomOracle};

use super::exit_record::{ExitRecord, ExitState};

/// Incrementally built mirror of an unknown world.
///
/// Holds one [`ExitRecord`] per visited room plus a running count of
/// unresolved exits across the whole map. Resolving an edge always closes
/// both of its halves, so the count drops by two per resolution and reaches
/// zero exactly when every exit seen so far leads somewhere known.
#[derive(Debug, Clone)]
pub struct DiscoveryMap<R> {
    rooms: FxHashMap<R, ExitRecord<R>>,
    unexplored: usize,
    resolved_edges: usize,
}

impl<R> Default for DiscoveryMap<R> {
    fn default() -> Self {
        Self {
            rooms: FxHashMap::default(),
            unexplored: 0,
            resolved_edges: 0,
        }
    }
}

impl<R: Clone + Eq + Hash + Debug> DiscoveryMap<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `room` if it has not been seen yet, with every exit unresolved.
    ///
    /// Returns `true` when the room was new. A known room is left untouched.
    pub fn ensure_visited<O>(&mut self, oracle: &O, room: &R) -> bool
    where
        O: IRoomOracle<RoomId = R> + ?Sized,
    {
        if self.rooms.contains_key(room) {
            return false;
        }
        let record = ExitRecord::unresolved(oracle.exits(room));
        self.unexplored += record.len();
        trace!(room = ?room, exits = record.len(), "room recorded");
        self.rooms.insert(room.clone(), record);
        true
    }

    /// Close the edge leaving `from` in `direction` and arriving at `to`.
    ///
    /// Both rooms must be visited, and both halves of the edge must still be
    /// unresolved. On error the map is left unchanged.
    pub fn resolve_edge(&mut self, from: &R, direction: Direction, to: &R) -> Result<(), MapError> {
        let reverse = direction.opposite();

        match self.state(from, direction)? {
            ExitState::Unresolved => {}
            ExitState::Resolved(neighbor) => {
                return Err(MapError::ExitAlreadyResolved {
                    room: format!("{from:?}"),
                    direction,
                    neighbor: format!("{neighbor:?}"),
                });
            }
        }
        let target = self.rooms.get(to).ok_or_else(|| MapError::RoomNotVisited {
            room: format!("{to:?}"),
        })?;
        if !target.get(reverse).is_some_and(ExitState::is_unresolved) {
            return Err(MapError::InconsistentReverseEdge {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
                reverse,
            });
        }
        let remaining = self
            .unexplored
            .checked_sub(2)
            .ok_or(MapError::CounterUnderflow {
                unexplored: self.unexplored,
            })?;

        self.set_resolved(from, direction, to);
        self.set_resolved(to, reverse, from);
        self.unexplored = remaining;
        self.resolved_edges += 1;
        Ok(())
    }

    /// First direction in `priority` that is still unresolved at `room`.
    ///
    /// `None` when every exit is resolved or the room is unknown.
    pub fn first_unexplored_direction(&self, room: &R, priority: &[Direction]) -> Option<Direction> {
        self.rooms.get(room)?.first_unresolved(priority)
    }

    /// Whether `room` has at least one unresolved exit.
    pub fn has_unexplored(&self, room: &R) -> bool {
        self.rooms
            .get(room)
            .is_some_and(ExitRecord::has_unresolved)
    }

    /// Unresolved exits across the whole map.
    pub fn unexplored(&self) -> usize {
        self.unexplored
    }

    /// True once no unresolved exit remains.
    pub fn is_complete(&self) -> bool {
        self.unexplored == 0
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn resolved_edge_count(&self) -> usize {
        self.resolved_edges
    }

    pub fn contains(&self, room: &R) -> bool {
        self.rooms.contains_key(room)
    }

    pub fn exits(&self, room: &R) -> Option<&ExitRecord<R>> {
        self.rooms.get(room)
    }

    /// Room behind a resolved exit.
    pub fn neighbor(&self, room: &R, direction: Direction) -> Option<&R> {
        self.rooms.get(room)?.get(direction)?.resolved()
    }

    fn state(&self, room: &R, direction: Direction) -> Result<&ExitState<R>, MapError> {
        self.rooms
            .get(room)
            .ok_or_else(|| MapError::RoomNotVisited {
                room: format!("{room:?}"),
            })?
            .get(direction)
            .ok_or_else(|| MapError::ExitNotFound {
                room: format!("{room:?}"),
                direction,
            })
    }

    fn set_resolved(&mut self, room: &R, direction: Direction, neighbor: &R) {
        if let Some(state) = self
            .rooms
            .get_mut(room)
            .and_then(|record| record.get_mut(direction))
        {
            *state = ExitState::Resolved(neighbor.clone());
        }
    }
}
