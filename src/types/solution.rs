use serde::{Deserialize, Serialize};

/// An item that made it into the solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenItem {
    /// Position of the item in the input list.
    pub index: usize,
    pub label: String,
    pub amount: i64,
}

/// The outcome of one solve.
///
/// `chosen` is sorted by descending amount. Among equal amounts the order is
/// the backtrace order, which visits higher input indices first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub chosen: Vec<ChosenItem>,

    pub limit: i64,
    pub achieved_sum: i64,
    pub remainder: i64,

    pub items_considered: usize,
}

impl Solution {
    pub(crate) fn empty(limit: i64) -> Self {
        Self {
            chosen: Vec::new(),
            limit,
            achieved_sum: 0,
            remainder: limit,
            items_considered: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("Invalid ceiling: {0} (must be at least 1)")]
    InvalidCeiling(i64),

    #[error("Invalid item at position {index}: amount {amount} (must be at least 1)")]
    InvalidItem { index: usize, amount: i64 },

    #[error("Table for {items} items and ceiling {limit} does not fit in memory addressing")]
    TableTooLarge { items: usize, limit: i64 },
}
