//! Configuration for roomwalk.
//! TOML-based; every field falls back to a compiled default.

pub mod defaults;
pub mod explore_config;
pub mod roomwalk_config;

pub use explore_config::ExploreConfig;
pub use roomwalk_config::RoomwalkConfig;
