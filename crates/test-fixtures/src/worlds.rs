//! Bundled worlds in the JSON room format.

/// Three rooms in a west-to-east line: 0 - 1 - 2.
pub const LINE: &str = r#"{
    "0": [[0, 0], {"e": 1}],
    "1": [[1, 0], {"e": 2, "w": 0}],
    "2": [[2, 0], {"w": 1}]
}"#;

/// A hub (0) with one dead-end room in each direction.
pub const CROSS: &str = r#"{
    "0": [[5, 5], {"n": 1, "s": 2, "e": 3, "w": 4}],
    "1": [[5, 6], {"s": 0}],
    "2": [[5, 4], {"n": 0}],
    "3": [[6, 5], {"w": 0}],
    "4": [[4, 5], {"e": 0}]
}"#;

/// Four rooms in a 2x2 cycle: 0 north to 1, 1 east to 2, 2 south to 3, 3 west to 0.
pub const LOOP: &str = r#"{
    "0": [[0, 0], {"n": 1, "e": 3}],
    "1": [[0, 1], {"s": 0, "e": 2}],
    "2": [[1, 1], {"w": 1, "s": 3}],
    "3": [[1, 0], {"n": 2, "w": 0}]
}"#;

/// Eight rooms on a 3x3 lattice with one cycle and four dead ends.
///
/// ```text
/// 5   6
/// |   |
/// 3 - 4 - 7
/// |   |
/// 0 - 1 - 2
/// ```
pub const FORK: &str = r#"{
    "0": [[0, 0], {"n": 3, "e": 1}],
    "1": [[1, 0], {"n": 4, "e": 2, "w": 0}],
    "2": [[2, 0], {"w": 1}],
    "3": [[0, 1], {"n": 5, "e": 4, "s": 0}],
    "4": [[1, 1], {"n": 6, "e": 7, "s": 1, "w": 3}],
    "5": [[0, 2], {"s": 3}],
    "6": [[1, 2], {"s": 4}],
    "7": [[2, 1], {"w": 4}]
}"#;
