use serde::{Deserialize, Serialize};

/// A labeled amount. Items are told apart by their position in a list, so two
/// items may share a label and an amount.
///
/// Construction does not validate; the solver rejects non-positive amounts and
/// [`super::ItemCollector`] rejects empty labels at entry time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub label: String,
    pub amount: i64,
}

impl Item {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}
