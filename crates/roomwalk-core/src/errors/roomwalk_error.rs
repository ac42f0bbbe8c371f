use super::error_code::RoomwalkErrorCode;
use super::{ConfigError, ExploreError, MapError};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomwalkError {
    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Exploration error: {0}")]
    Explore(#[from] ExploreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RoomwalkErrorCode for RoomwalkError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Map(e) => e.error_code(),
            Self::Explore(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type RoomwalkResult<T> = Result<T, RoomwalkError>;
