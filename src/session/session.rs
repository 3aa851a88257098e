use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::config::SessionConfig;
use crate::history::{render_csv, ExportOptions, HistoryError, HistoryRecord, HistoryStore};
use crate::item::{CollectError, Item, ItemCollector};
use crate::selection::{solve, table_cells};
use crate::types::{InputDigest, Solution, SolveError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error(transparent)]
    Collect(#[from] CollectError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("No items to calculate with")]
    NoItems,
    #[error("Request needs {cells} table cells, above the configured maximum of {max}")]
    TableBudgetExceeded { cells: u64, max: u64 },
    #[error("Invalid session configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result of one [`Session::calculate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub solution: Solution,
    pub record_index: usize,
    pub input_digest: InputDigest,
}

/// Point-in-time copy of everything a session holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub limit: i64,
    pub items: Vec<Item>,
    pub history: HistoryStore,
}

/// Host-side state for one user: the current ceiling, the entered items, and
/// the history of results.
///
/// Every method is one discrete action. Nothing is recomputed implicitly;
/// a new result exists only after [`Session::calculate`] returns.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    limit: i64,
    collector: ItemCollector,
    history: HistoryStore,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_valid_config(SessionConfig::default())
    }
}

impl Session {
    /// Start a session from `config`, rejecting a default limit below 1.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, SessionError> {
        let config = SessionConfig::from_json_str(json)?;
        Self::new(config)
    }

    fn with_valid_config(config: SessionConfig) -> Self {
        Self {
            limit: config.default_limit,
            config,
            collector: ItemCollector::new(),
            history: HistoryStore::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn set_limit(&mut self, limit: i64) -> Result<(), SessionError> {
        if limit < 1 {
            return Err(SolveError::InvalidCeiling(limit).into());
        }
        self.limit = limit;
        Ok(())
    }

    pub fn add_item(&mut self, label: impl Into<String>, amount: i64) -> Result<&Item, SessionError> {
        let item = self.collector.add(label, amount)?;
        debug!(label = %item.label, amount = item.amount, "item added");
        Ok(item)
    }

    pub fn items(&self) -> &[Item] {
        self.collector.items()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    /// Solve the current items against the current ceiling and archive the
    /// result.
    pub fn calculate(&mut self) -> Result<Calculation, SessionError> {
        let items = self.collector.items();
        if items.is_empty() {
            return Err(SessionError::NoItems);
        }

        if let Some(max) = self.config.max_table_cells {
            let cells = table_cells(items.len(), self.limit).unwrap_or(u64::MAX);
            if cells > max {
                warn!(cells, max, limit = self.limit, items = items.len(), "table budget exceeded");
                return Err(SessionError::TableBudgetExceeded { cells, max });
            }
        }

        let solution = solve(items, self.limit)?;
        let input_digest = InputDigest::from_request(items, self.limit);

        info!(
            limit = solution.limit,
            items = solution.items_considered,
            achieved_sum = solution.achieved_sum,
            remainder = solution.remainder,
            "calculation complete"
        );

        let record_index = self.history.append(solution.clone(), input_digest.clone());

        Ok(Calculation {
            solution,
            record_index,
            input_digest,
        })
    }

    pub fn delete_record(&mut self, index: usize) -> Result<HistoryRecord, SessionError> {
        let record = self.history.remove(index)?;
        debug!(index, remaining = self.history.len(), "history record deleted");
        Ok(record)
    }

    pub fn clear_history(&mut self) {
        let cleared = self.history.len();
        self.history.clear();
        debug!(cleared, "history cleared");
    }

    pub fn export_csv(&self, options: &ExportOptions) -> String {
        render_csv(self.history.records(), options)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            limit: self.limit,
            items: self.collector.items().to_vec(),
            history: self.history.clone(),
        }
    }
}
