//! Room worlds for tests and benches.
//!
//! `RoomGraph` is a fully known world that answers the explorer's oracle
//! queries. Worlds come from the JSON room format (`worlds`) or from the
//! grid generators (`generators`).

pub mod generators;
pub mod room_graph;
pub mod worlds;

pub use room_graph::{FixtureError, Room, RoomGraph};
