use serde::{Deserialize, Serialize};

use crate::types::SolveError;

// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Ceiling a new session starts with.
    pub default_limit: i64,
    /// Largest solver table a calculation may request, in cells. `None`
    /// leaves requests unbounded.
    pub max_table_cells: Option<u64>,
}

impl SessionConfig {
    pub fn v0() -> Self {
        Self {
            default_limit: 40_000,
            max_table_cells: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), SolveError> {
        if self.default_limit < 1 {
            return Err(SolveError::InvalidCeiling(self.default_limit));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::v0()
    }
}
