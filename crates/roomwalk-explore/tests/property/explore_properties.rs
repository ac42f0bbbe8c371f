//! Property tests for exploration over generated connected grid worlds.

use proptest::prelude::*;

use roomwalk_core::Direction;
use roomwalk_explore::{replay, verify_coverage, DiscoveryMap, ExplorationEngine};
use test_fixtures::generators::{connected_grid, grid_edges};
use test_fixtures::RoomGraph;

/// A connected world on a grid of up to 6x6 rooms, plus a start room inside it.
fn world_strategy() -> impl Strategy<Value = (RoomGraph, u32)> {
    (1_usize..=6, 1_usize..=6)
        .prop_flat_map(|(width, height)| {
            let edges = grid_edges(width, height).len();
            (
                Just(width),
                Just(height),
                Just((0..edges).collect::<Vec<_>>()).prop_shuffle(),
                prop::collection::vec(any::<bool>(), edges),
                0..(width * height) as u32,
            )
        })
        .prop_map(|(width, height, order, extras, start)| {
            (connected_grid(width, height, &order, &extras), start)
        })
}

fn priority_strategy() -> impl Strategy<Value = [Direction; 4]> {
    Just(Direction::ALL.to_vec())
        .prop_shuffle()
        .prop_map(|v| [v[0], v[1], v[2], v[3]])
}

proptest! {
    #[test]
    fn every_room_and_edge_is_covered((world, start) in world_strategy()) {
        let path = ExplorationEngine::default().explore(&world, start).unwrap();
        let coverage = verify_coverage(&world, &start, &path).unwrap();
        prop_assert!(coverage.is_complete(), "missing {:?}", coverage.missing);
        prop_assert_eq!(coverage.rooms_visited, world.len());
    }

    #[test]
    fn replay_never_hits_a_wall(
        (world, start) in world_strategy(),
        discover in priority_strategy(),
        backtrack in priority_strategy(),
    ) {
        let engine = ExplorationEngine::new(roomwalk_core::ExploreConfig {
            discover_priority: discover,
            backtrack_priority: backtrack,
        });
        let report = engine.explore_with_report(&world, start).unwrap();
        let walked = replay(&world, &start, &report.path).unwrap();
        prop_assert_eq!(walked.end, report.end);
    }

    #[test]
    fn each_edge_is_discovered_exactly_once((world, start) in world_strategy()) {
        let report = ExplorationEngine::default()
            .explore_with_report(&world, start)
            .unwrap();
        prop_assert_eq!(report.discover_steps, world.edge_count());
        prop_assert_eq!(report.edges_resolved, world.edge_count());
        prop_assert_eq!(report.rooms_discovered, world.len());
        prop_assert_eq!(report.path.len(), report.discover_steps + report.backtrack_moves);
    }

    #[test]
    fn exploration_is_deterministic((world, start) in world_strategy()) {
        let engine = ExplorationEngine::default();
        let first = engine.explore(&world, start).unwrap();
        let second = engine.explore(&world, start).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn counter_matches_open_exits_and_stays_even((world, _start) in world_strategy()) {
        let mut map = DiscoveryMap::new();
        for id in world.room_ids() {
            map.ensure_visited(&world, &id);
        }
        let open = |map: &DiscoveryMap<u32>| -> usize {
            world
                .room_ids()
                .filter_map(|id| map.exits(&id).map(|r| r.unresolved_count()))
                .sum()
        };
        prop_assert_eq!(map.unexplored(), 2 * world.edge_count());

        for id in world.room_ids() {
            let room = world.room(id).unwrap();
            for (&direction, &target) in &room.exits {
                if map.neighbor(&id, direction).is_some() {
                    continue;
                }
                map.resolve_edge(&id, direction, &target).unwrap();
                prop_assert_eq!(map.unexplored(), open(&map));
                prop_assert_eq!(map.unexplored() % 2, 0);
            }
        }
        prop_assert!(map.is_complete());
    }

    #[test]
    fn ensure_visited_twice_changes_nothing((world, start) in world_strategy()) {
        let mut map = DiscoveryMap::new();
        prop_assert!(map.ensure_visited(&world, &start));
        let unexplored = map.unexplored();
        let record = map.exits(&start).cloned();
        prop_assert!(!map.ensure_visited(&world, &start));
        prop_assert_eq!(map.unexplored(), unexplored);
        prop_assert_eq!(map.exits(&start).cloned(), record);
        prop_assert_eq!(map.room_count(), 1);
    }
}
