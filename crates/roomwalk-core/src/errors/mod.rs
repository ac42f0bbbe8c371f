//! Error handling for roomwalk.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod explore_error;
pub mod map_error;
pub mod roomwalk_error;

pub use config_error::ConfigError;
pub use error_code::RoomwalkErrorCode;
pub use explore_error::ExploreError;
pub use map_error::MapError;
pub use roomwalk_error::{RoomwalkError, RoomwalkResult};
