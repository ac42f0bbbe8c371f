//! Seams between the explorer and its external collaborators.

pub mod room_oracle;

pub use room_oracle::IRoomOracle;
