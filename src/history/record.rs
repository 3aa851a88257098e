use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ChosenItem, InputDigest, Solution};

/// One archived solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub recorded_at: DateTime<Utc>,
    pub limit: i64,
    pub achieved_sum: i64,
    pub remainder: i64,
    pub input_digest: InputDigest,
    pub chosen: Vec<ChosenItem>,
}

impl HistoryRecord {
    pub fn from_solution(
        solution: Solution,
        input_digest: InputDigest,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            recorded_at,
            limit: solution.limit,
            achieved_sum: solution.achieved_sum,
            remainder: solution.remainder,
            input_digest,
            chosen: solution.chosen,
        }
    }
}
