//! Generated grid worlds. Room ids are `y * width + x`.

use roomwalk_core::Direction;

use crate::room_graph::RoomGraph;

fn room_id(width: usize, x: usize, y: usize) -> u32 {
    (y * width + x) as u32
}

fn with_grid_rooms(width: usize, height: usize) -> RoomGraph {
    let mut graph = RoomGraph::new();
    for y in 0..height {
        for x in 0..width {
            graph.add_room(room_id(width, x, y), (x as i32, y as i32));
        }
    }
    graph
}

/// `n` rooms connected west to east, room 0 at the west end.
pub fn line(n: usize) -> RoomGraph {
    let mut graph = with_grid_rooms(n, 1);
    for x in 1..n {
        graph.connect(room_id(n, x - 1, 0), Direction::East, room_id(n, x, 0));
    }
    graph
}

/// Every lattice edge of a `width` x `height` grid.
///
/// Each edge appears once, pointing east or north.
pub fn grid_edges(width: usize, height: usize) -> Vec<(u32, Direction, u32)> {
    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push((room_id(width, x, y), Direction::East, room_id(width, x + 1, y)));
            }
            if y + 1 < height {
                edges.push((room_id(width, x, y), Direction::North, room_id(width, x, y + 1)));
            }
        }
    }
    edges
}

/// Fully connected `width` x `height` grid.
pub fn grid(width: usize, height: usize) -> RoomGraph {
    let mut graph = with_grid_rooms(width, height);
    for (from, direction, to) in grid_edges(width, height) {
        graph.connect(from, direction, to);
    }
    graph
}

/// The 2x2 cycle: 0 north to 1, 1 east to 2, 2 south to 3, 3 west to 0.
pub fn ring_2x2() -> RoomGraph {
    let mut graph = RoomGraph::new();
    graph.add_room(0, (0, 0));
    graph.add_room(1, (0, 1));
    graph.add_room(2, (1, 1));
    graph.add_room(3, (1, 0));
    graph.connect(0, Direction::North, 1);
    graph.connect(1, Direction::East, 2);
    graph.connect(2, Direction::South, 3);
    graph.connect(3, Direction::West, 0);
    graph
}

/// A connected sub-grid of a `width` x `height` lattice.
///
/// Edges from [`grid_edges`] are visited in `edge_order` (indices into that
/// list; out-of-range indices are skipped). An edge joining two separate
/// components is always kept, so the result contains a spanning tree. Any
/// other edge is kept when `keep_extra[i]` is true for its position `i` in
/// `edge_order`. Edges never visited are added last through the same rule,
/// which keeps the world connected whatever order is supplied.
pub fn connected_grid(
    width: usize,
    height: usize,
    edge_order: &[usize],
    keep_extra: &[bool],
) -> RoomGraph {
    let edges = grid_edges(width, height);
    let mut graph = with_grid_rooms(width, height);
    let mut components = UnionFind::new(width * height);
    let mut seen = vec![false; edges.len()];

    let ordered = edge_order
        .iter()
        .copied()
        .filter(|&i| i < edges.len())
        .chain(0..edges.len());
    for (position, index) in ordered.enumerate() {
        if std::mem::replace(&mut seen[index], true) {
            continue;
        }
        let (from, direction, to) = edges[index];
        let joins = components.union(from as usize, to as usize);
        if joins || keep_extra.get(position).copied().unwrap_or(false) {
            graph.connect(from, direction, to);
        }
    }
    graph
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Returns true when `a` and `b` were in different sets.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}
