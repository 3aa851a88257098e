use thiserror::Error;

use super::item::Item;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectError {
    #[error("Label must not be empty")]
    EmptyLabel,
    #[error("Amount must be at least 1, got {0}")]
    NonPositiveAmount(i64),
}

/// Gathers items as the user enters them.
///
/// Every item held here has a non-blank label and a positive amount, so the
/// list can be handed to the solver without further checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCollector {
    items: Vec<Item>,
}

impl ItemCollector {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Validate and append one entry. The label is stored as given; only the
    /// emptiness check looks at the trimmed form.
    pub fn add(&mut self, label: impl Into<String>, amount: i64) -> Result<&Item, CollectError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(CollectError::EmptyLabel);
        }
        if amount <= 0 {
            return Err(CollectError::NonPositiveAmount(amount));
        }

        let index = self.items.len();
        self.items.push(Item::new(label, amount));
        Ok(&self.items[index])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
