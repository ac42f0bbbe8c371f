//! # roomwalk-core
//!
//! Foundation crate for the roomwalk explorer.
//! Defines the direction model, the room-oracle trait, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod direction;
pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ExploreConfig, RoomwalkConfig};
pub use direction::Direction;
pub use errors::{RoomwalkError, RoomwalkResult};
pub use traits::IRoomOracle;
