use std::collections::BTreeMap;

use serde::Deserialize;

use roomwalk_core::{Direction, IRoomOracle};

/// Errors raised while building or checking a fixture world.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("invalid world JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid room id {0:?}")]
    InvalidRoomId(String),

    #[error("room {room}: invalid direction {code:?}")]
    InvalidDirection { room: u32, code: String },

    #[error("room {room} exit {direction} leads to unknown room {target}")]
    UnknownRoom {
        room: u32,
        direction: Direction,
        target: u32,
    },

    #[error("room {room} exit {direction} leads to {target}, which does not lead back")]
    OneWayExit {
        room: u32,
        direction: Direction,
        target: u32,
    },
}

/// A single room: grid coordinates plus its exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    pub coords: (i32, i32),
    pub exits: BTreeMap<Direction, u32>,
}

/// A fully known world keyed by numeric room id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomGraph {
    rooms: BTreeMap<u32, Room>,
}

/// On-disk shape of one room: `[[x, y], {"n": 1, ...}]`.
#[derive(Deserialize)]
struct RawRoom((i32, i32), BTreeMap<String, u32>);

impl RoomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON room format, e.g. `{"0": [[3, 5], {"n": 1}], "1": [[3, 6], {"s": 0}]}`.
    ///
    /// The result is validated; one-way or dangling exits are rejected.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let raw: BTreeMap<String, RawRoom> = serde_json::from_str(json)?;
        let mut graph = Self::new();
        for (key, RawRoom(coords, exits)) in raw {
            let id: u32 = key
                .trim()
                .parse()
                .map_err(|_| FixtureError::InvalidRoomId(key.clone()))?;
            let mut room = Room {
                coords,
                exits: BTreeMap::new(),
            };
            for (code, target) in exits {
                let direction = code
                    .parse::<Direction>()
                    .map_err(|_| FixtureError::InvalidDirection { room: id, code })?;
                room.exits.insert(direction, target);
            }
            graph.rooms.insert(id, room);
        }
        graph.validate()?;
        Ok(graph)
    }

    /// Insert a room with no exits. Existing rooms keep their exits.
    pub fn add_room(&mut self, id: u32, coords: (i32, i32)) {
        self.rooms.entry(id).or_insert_with(|| Room {
            coords,
            exits: BTreeMap::new(),
        });
    }

    /// Connect `from` to `to` in `direction`, and `to` back to `from` in the
    /// opposite direction. Both rooms are created if missing.
    pub fn connect(&mut self, from: u32, direction: Direction, to: u32) {
        self.rooms
            .entry(from)
            .or_default()
            .exits
            .insert(direction, to);
        self.rooms
            .entry(to)
            .or_default()
            .exits
            .insert(direction.opposite(), from);
    }

    /// Check that every exit lands on a known room that leads back.
    pub fn validate(&self) -> Result<(), FixtureError> {
        for (&id, room) in &self.rooms {
            for (&direction, &target) in &room.exits {
                let back = self
                    .rooms
                    .get(&target)
                    .ok_or(FixtureError::UnknownRoom {
                        room: id,
                        direction,
                        target,
                    })?
                    .exits
                    .get(&direction.opposite());
                if back != Some(&id) {
                    return Err(FixtureError::OneWayExit {
                        room: id,
                        direction,
                        target,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn room(&self, id: u32) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.rooms.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.rooms.values().map(|r| r.exits.len()).sum::<usize>() / 2
    }
}

impl IRoomOracle for RoomGraph {
    type RoomId = u32;

    fn exits(&self, room: &u32) -> Vec<Direction> {
        self.rooms
            .get(room)
            .map(|r| r.exits.keys().copied().collect())
            .unwrap_or_default()
    }

    fn neighbor(&self, room: &u32, direction: Direction) -> Option<u32> {
        self.rooms.get(room)?.exits.get(&direction).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worlds;

    #[test]
    fn parses_bundled_worlds() {
        for json in [worlds::LINE, worlds::CROSS, worlds::LOOP, worlds::FORK] {
            let graph = RoomGraph::from_json(json).unwrap();
            assert!(!graph.is_empty());
        }
    }

    #[test]
    fn rejects_one_way_exit() {
        let json = r#"{"0": [[0, 0], {"n": 1}], "1": [[0, 1], {}]}"#;
        assert!(matches!(
            RoomGraph::from_json(json),
            Err(FixtureError::OneWayExit { room: 0, .. })
        ));
    }

    #[test]
    fn rejects_dangling_exit() {
        let json = r#"{"0": [[0, 0], {"e": 4}]}"#;
        assert!(matches!(
            RoomGraph::from_json(json),
            Err(FixtureError::UnknownRoom { target: 4, .. })
        ));
    }

    #[test]
    fn rejects_bad_direction_code() {
        let json = r#"{"0": [[0, 0], {"up": 0}]}"#;
        assert!(matches!(
            RoomGraph::from_json(json),
            Err(FixtureError::InvalidDirection { .. })
        ));
    }

    #[test]
    fn connect_adds_both_halves() {
        let mut graph = RoomGraph::new();
        graph.connect(1, Direction::East, 2);
        assert_eq!(graph.neighbor(&1, Direction::East), Some(2));
        assert_eq!(graph.neighbor(&2, Direction::West), Some(1));
        assert_eq!(graph.edge_count(), 1);
        graph.validate().unwrap();
    }

    #[test]
    fn exits_come_back_in_canonical_order() {
        let graph = RoomGraph::from_json(worlds::CROSS).unwrap();
        assert_eq!(graph.exits(&0), Direction::ALL.to_vec());
        assert!(graph.exits(&99).is_empty());
    }
}
