//! CSV report reading.
//!
//! Every cell is normalized to trimmed text and rows are padded to the
//! header width so downstream code never sees a short row. Entirely blank
//! rows are dropped.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use mailsum_model::MailTable;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV report: first row is the header row, the rest is data.
pub fn read_csv_table(path: &Path) -> Result<MailTable> {
    let csv_error = |source: csv::Error| IngestError::Csv {
        path: path.display().to_string(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let mut table = MailTable::new(path, Vec::new());
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(|value| value.is_empty()) {
            continue;
        }
        if table.headers.is_empty() {
            table.headers = cells.iter().map(|cell| normalize_header(cell)).collect();
            continue;
        }
        let mut row = Vec::with_capacity(table.headers.len());
        for index in 0..table.headers.len() {
            row.push(cells.get(index).cloned().unwrap_or_default());
        }
        table.push_row(row);
    }
    debug!(
        source = %path.display(),
        headers = table.headers.len(),
        rows = table.rows.len(),
        "read csv table"
    );
    Ok(table)
}
