use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: .{0} (expected .xlsx, .xls, or .csv)")]
    UnsupportedFormat(String),

    #[error("read csv {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("read workbook {path}: {message}")]
    Excel { path: String, message: String },

    #[error("workbook has no worksheets: {0}")]
    EmptyWorkbook(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
