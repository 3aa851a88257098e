pub mod export;
pub mod record;
pub mod store;

pub use export::{render_csv, write_csv, ExportError, ExportOptions};
pub use record::HistoryRecord;
pub use store::{HistoryError, HistoryStore};
