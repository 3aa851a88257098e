use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::record::HistoryRecord;
use crate::types::{InputDigest, Solution};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("No history record at index {index} (history holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Append-only log of results, owned by the host.
///
/// Records keep insertion order. Indices are 0-based and shift down after a
/// removal. Serializes as a plain JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryStore {
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Archive `solution` stamped with the current time. Returns its index.
    pub fn append(&mut self, solution: Solution, input_digest: InputDigest) -> usize {
        self.append_at(solution, input_digest, Utc::now())
    }

    pub fn append_at(
        &mut self,
        solution: Solution,
        input_digest: InputDigest,
        recorded_at: DateTime<Utc>,
    ) -> usize {
        self.records
            .push(HistoryRecord::from_solution(solution, input_digest, recorded_at));
        self.records.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Result<HistoryRecord, HistoryError> {
        if index >= self.records.len() {
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn get(&self, index: usize) -> Option<&HistoryRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
