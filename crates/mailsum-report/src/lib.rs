pub mod export;

pub use export::{DEFAULT_EXPORT_FILE, EXPORT_HEADERS, write_summary_csv};
