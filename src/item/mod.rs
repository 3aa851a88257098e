pub mod collector;
pub mod item;

pub use collector::{CollectError, ItemCollector};
pub use item::Item;
