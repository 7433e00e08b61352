#![deny(unsafe_code)]

use std::path::PathBuf;

/// One parsed report: a header row plus text-normalized data rows.
///
/// Produced by `mailsum-ingest`; every cell is already trimmed text and
/// absent cells are empty strings. The core never mutates a table.
#[derive(Debug, Clone, Default)]
pub struct MailTable {
    /// Source file the table was read from, for diagnostics.
    pub source: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl MailTable {
    pub fn new(source: impl Into<PathBuf>, headers: Vec<String>) -> Self {
        Self {
            source: source.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}
