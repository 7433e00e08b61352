//! Excel report reading via calamine.
//!
//! Only the first worksheet is read; the first row is the header row. Every
//! cell goes through `to_string()` and a trim so numeric-looking tracking
//! values survive as text instead of collapsing into scientific notation,
//! and absent cells become empty strings.

use std::path::Path;

use calamine::{Reader, open_workbook_auto};
use tracing::debug;

use mailsum_model::MailTable;

use crate::error::{IngestError, Result};

/// Reads the first worksheet of an `.xlsx`/`.xls` report.
pub fn read_excel_table(path: &Path) -> Result<MailTable> {
    let excel_error = |message: String| IngestError::Excel {
        path: path.display().to_string(),
        message,
    };

    let mut workbook =
        open_workbook_auto(path).map_err(|error| excel_error(error.to_string()))?;
    let sheet_names = workbook.sheet_names();
    let Some(sheet_name) = sheet_names.first().cloned() else {
        return Err(IngestError::EmptyWorkbook(path.display().to_string()));
    };
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|error| excel_error(error.to_string()))?;

    let mut table = MailTable::new(path, Vec::new());
    let mut rows = range.rows();
    if let Some(header_row) = rows.next() {
        table.headers = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();
    }
    for data_row in rows {
        let mut row = Vec::with_capacity(table.headers.len());
        for index in 0..table.headers.len() {
            let value = data_row
                .get(index)
                .map(|cell| cell.to_string().trim().to_string())
                .unwrap_or_default();
            row.push(value);
        }
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        table.push_row(row);
    }
    debug!(
        source = %path.display(),
        sheet = %sheet_name,
        headers = table.headers.len(),
        rows = table.rows.len(),
        "read excel table"
    );
    Ok(table)
}
