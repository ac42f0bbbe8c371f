use serde::{Deserialize, Serialize};

use super::defaults;
use crate::direction::Direction;
use crate::errors::ConfigError;

/// Exploration policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    /// Priority of unexplored exits in discover mode.
    pub discover_priority: [Direction; 4],
    /// Expansion order of resolved exits in backtrack mode.
    pub backtrack_priority: [Direction; 4],
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            discover_priority: defaults::DEFAULT_DISCOVER_PRIORITY,
            backtrack_priority: defaults::DEFAULT_BACKTRACK_PRIORITY,
        }
    }
}

impl ExploreConfig {
    /// Both priority lists must name each direction exactly once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_permutation("explore.discover_priority", &self.discover_priority)?;
        check_permutation("explore.backtrack_priority", &self.backtrack_priority)?;
        Ok(())
    }
}

fn check_permutation(field: &str, order: &[Direction; 4]) -> Result<(), ConfigError> {
    let mut seen = [false; 4];
    for direction in order {
        if std::mem::replace(&mut seen[direction.index()], true) {
            return Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: format!("direction {direction} listed more than once"),
            });
        }
    }
    Ok(())
}
