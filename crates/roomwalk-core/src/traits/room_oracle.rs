use std::fmt::Debug;
use std::hash::Hash;

use crate::direction::Direction;

/// Read-only view of a world whose rooms are only known by visiting them.
///
/// Answers must be stable for the duration of an exploration run, and every
/// exit must be reversible: `neighbor(neighbor(r, d), d.opposite()) == r`.
pub trait IRoomOracle {
    /// Opaque room identifier.
    type RoomId: Clone + Eq + Hash + Debug;

    /// Directions in which `room` has a passage.
    fn exits(&self, room: &Self::RoomId) -> Vec<Direction>;

    /// Room reached by leaving `room` in `direction`, or `None` if there is no such exit.
    fn neighbor(&self, room: &Self::RoomId, direction: Direction) -> Option<Self::RoomId>;
}
