use std::fs;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use super::record::HistoryRecord;

pub const CSV_HEADER: &str = "label,amount,recorded_at,limit,achieved_sum,remainder";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const UTF8_BOM: char = '\u{FEFF}';

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Prefix the output with a UTF-8 byte order mark so spreadsheet tools
    /// detect the encoding.
    pub byte_order_mark: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            byte_order_mark: true,
        }
    }
}

/// Flatten `records` to CSV: one row per chosen item, each row repeating its
/// record's totals. Records that chose nothing contribute no rows.
pub fn render_csv(records: &[HistoryRecord], options: &ExportOptions) -> String {
    let mut out = String::new();
    if options.byte_order_mark {
        out.push(UTF8_BOM);
    }
    out.push_str(CSV_HEADER);
    out.push('\n');

    for record in records {
        let recorded_at = record.recorded_at.format(TIMESTAMP_FORMAT).to_string();
        for item in &record.chosen {
            let row = [
                escape_field(&item.label),
                item.amount.to_string(),
                recorded_at.clone(),
                record.limit.to_string(),
                record.achieved_sum.to_string(),
                record.remainder.to_string(),
            ];
            out.push_str(&row.join(","));
            out.push('\n');
        }
    }

    out
}

/// Render and write to `path`, replacing any existing file. The content goes
/// to a sibling temp file first and is renamed into place once synced.
pub fn write_csv(
    records: &[HistoryRecord],
    path: &Path,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let csv = render_csv(records, options);

    let temp_path = path.with_extension("csv.tmp");
    if temp_path.exists() {
        fs::remove_file(&temp_path)?;
    }

    let written = write_synced(&temp_path, csv.as_bytes())
        .and_then(|()| fs::rename(&temp_path, path));
    if let Err(e) = written {
        // Cleanup is best effort; report the write failure.
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut f = fs::File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_are_left_alone() {
        assert_eq!(escape_field("Item A"), "Item A");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn special_fields_are_quoted() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }
}
