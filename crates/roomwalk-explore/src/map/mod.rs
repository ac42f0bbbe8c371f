//! Discovery map: rooms seen so far, their exits, and which exits are still open.

mod discovery_map;
mod exit_record;

pub use discovery_map::DiscoveryMap;
pub use exit_record::{ExitRecord, ExitState};
