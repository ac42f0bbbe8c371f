//! ExplorationEngine: drives discover and backtrack modes until every exit is resolved.

use tracing::{debug, info, info_span, trace};

use roomwalk_core::direction::format_path;
use roomwalk_core::errors::ExploreError;
use roomwalk_core::{Direction, ExploreConfig, IRoomOracle, RoomwalkResult};

use crate::backtrack;
use crate::map::DiscoveryMap;
use crate::policy::GreedyPolicy;

/// Outcome of one exploration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorationReport<R> {
    /// Every move taken, in order.
    pub path: Vec<Direction>,
    pub start: R,
    /// Room the explorer stands in when the last exit was resolved.
    pub end: R,
    pub rooms_discovered: usize,
    pub edges_resolved: usize,
    /// Moves that resolved a new edge.
    pub discover_steps: usize,
    /// Number of times backtrack mode was entered.
    pub backtracks: usize,
    /// Moves spent walking back over resolved edges.
    pub backtrack_moves: usize,
}

impl<R> ExplorationReport<R> {
    /// Exit halves closed by the run. Each resolved edge closes one exit on each side.
    pub fn exits_closed(&self) -> usize {
        self.edges_resolved * 2
    }
}

/// Explores a world through an [`IRoomOracle`].
///
/// Discover mode follows the first unexplored exit of the current room in
/// `discover_priority` order. When the current room has none left, backtrack
/// mode walks the shortest resolved route to the nearest room that does.
/// The run ends when the map's unexplored counter reaches zero.
#[derive(Debug, Clone, Default)]
pub struct ExplorationEngine {
    config: ExploreConfig,
}

impl ExplorationEngine {
    pub fn new(config: ExploreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }

    /// Explore from `start` and return every move taken.
    pub fn explore<O: IRoomOracle>(
        &self,
        oracle: &O,
        start: O::RoomId,
    ) -> RoomwalkResult<Vec<Direction>> {
        self.explore_with_report(oracle, start).map(|report| report.path)
    }

    /// Explore from `start` and return the path together with run statistics.
    pub fn explore_with_report<O: IRoomOracle>(
        &self,
        oracle: &O,
        start: O::RoomId,
    ) -> RoomwalkResult<ExplorationReport<O::RoomId>> {
        self.config.validate()?;
        let _span = info_span!("roomwalk.explore", start = ?start).entered();

        let policy = GreedyPolicy::new(self.config.discover_priority);
        let mut map = DiscoveryMap::new();
        map.ensure_visited(oracle, &start);
        info!(unexplored = map.unexplored(), "exploration started");

        let mut path = Vec::new();
        let mut current = start.clone();
        let mut discover_steps = 0;
        let mut backtracks = 0;
        let mut backtrack_moves = 0;

        while !map.is_complete() {
            if let Some(direction) = policy.choose(&map, &current) {
                let next = oracle.neighbor(&current, direction).ok_or_else(|| {
                    ExploreError::MissingNeighbor {
                        room: format!("{current:?}"),
                        direction,
                    }
                })?;
                if map.ensure_visited(oracle, &next) {
                    debug!(room = ?next, unexplored = map.unexplored(), "discovered room");
                }
                map.resolve_edge(&current, direction, &next)?;
                trace!(from = ?current, to = ?next, %direction, "discover step");
                path.push(direction);
                discover_steps += 1;
                current = next;
            } else {
                let route = backtrack::nearest_unexplored(
                    &map,
                    &current,
                    &self.config.backtrack_priority,
                )
                .ok_or_else(|| ExploreError::FrontierUnreachable {
                    room: format!("{current:?}"),
                    unexplored: map.unexplored(),
                })?;
                debug!(
                    from = ?current,
                    to = ?route.target,
                    hops = route.hops(),
                    route = %format_path(&route.directions),
                    "backtracking"
                );
                backtracks += 1;
                backtrack_moves += route.hops();
                path.extend(route.directions);
                current = route.target;
            }
        }

        info!(
            moves = path.len(),
            rooms = map.room_count(),
            edges = map.resolved_edge_count(),
            backtracks,
            "exploration complete"
        );

        Ok(ExplorationReport {
            path,
            start,
            end: current,
            rooms_discovered: map.room_count(),
            edges_resolved: map.resolved_edge_count(),
            discover_steps,
            backtracks,
            backtrack_moves,
        })
    }
}
