pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod excel;

pub use csv_table::read_csv_table;
pub use discovery::{is_supported_report, list_report_files};
pub use error::{IngestError, Result};
pub use excel::read_excel_table;

use std::path::Path;

use mailsum_model::MailTable;

/// Reads one report file, dispatching on its extension.
///
/// Supported: `.csv`, `.xlsx`, `.xls`.
pub fn read_table(path: &Path) -> Result<MailTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound(path.display().to_string()));
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => read_csv_table(path),
        "xlsx" | "xls" => read_excel_table(path),
        other => Err(IngestError::UnsupportedFormat(other.to_string())),
    }
}
