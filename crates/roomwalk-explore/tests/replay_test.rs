//! Replaying paths against the world and checking coverage.

use roomwalk_core::errors::ExploreError;
use roomwalk_core::Direction::*;
use roomwalk_core::RoomwalkError;
use roomwalk_explore::{explore, replay, verify_coverage};
use test_fixtures::{generators, worlds, RoomGraph};

#[test]
fn replay_tracks_rooms_and_exits_taken() {
    let graph = RoomGraph::from_json(worlds::CROSS).unwrap();
    let walked = replay(&graph, &0, &[North, South, North, South, East]).unwrap();

    assert_eq!(walked.end, 3);
    assert_eq!(walked.visited, vec![0, 1, 3]);
    assert_eq!(walked.moves, 5);
    assert_eq!(walked.times_taken(&0, North), 2);
    assert_eq!(walked.times_taken(&1, South), 2);
    assert_eq!(walked.times_taken(&0, East), 1);
    assert_eq!(walked.times_taken(&0, West), 0);
    assert!(!walked.returns_to_start());
}

#[test]
fn replay_rejects_a_wall() {
    let graph = RoomGraph::from_json(worlds::LINE).unwrap();
    let err = replay(&graph, &0, &[East, North]).unwrap_err();
    assert_eq!(
        err,
        RoomwalkError::Explore(ExploreError::InvalidMove {
            step: 1,
            room: "1".into(),
            direction: North,
        })
    );
}

#[test]
fn empty_path_stays_put() {
    let graph = RoomGraph::from_json(worlds::LINE).unwrap();
    let walked = replay(&graph, &1, &[]).unwrap();
    assert!(walked.returns_to_start());
    assert_eq!(walked.visited, vec![1]);
}

#[test]
fn explored_path_covers_the_whole_fork() {
    let graph = RoomGraph::from_json(worlds::FORK).unwrap();
    let path = explore(&graph, 0).unwrap();
    let coverage = verify_coverage(&graph, &0, &path).unwrap();

    assert!(coverage.is_complete(), "missing: {:?}", coverage.missing);
    assert_eq!(coverage.rooms_total, 8);
    assert_eq!(coverage.rooms_visited, 8);
}

#[test]
fn partial_path_reports_missing_exits_from_both_sides() {
    let graph = RoomGraph::from_json(worlds::LINE).unwrap();
    let coverage = verify_coverage(&graph, &0, &[East]).unwrap();

    assert!(!coverage.is_complete());
    assert_eq!(coverage.rooms_total, 3);
    assert_eq!(coverage.rooms_visited, 2);
    // The 1-2 edge is missing; both of its exits are listed.
    assert_eq!(coverage.missing, vec![(1, East), (2, West)]);
}

#[test]
fn walking_an_edge_backwards_counts_as_covered() {
    let graph = RoomGraph::from_json(worlds::LINE).unwrap();
    let coverage = verify_coverage(&graph, &2, &[West, West]).unwrap();
    assert!(coverage.is_complete());
}

#[test]
fn coverage_ignores_unreachable_rooms() {
    let mut graph = generators::line(2);
    graph.add_room(10, (10, 10));
    let path = explore(&graph, 0).unwrap();
    let coverage = verify_coverage(&graph, &0, &path).unwrap();
    assert!(coverage.is_complete());
    assert_eq!(coverage.rooms_total, 2);
}
