//! Input-file discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

/// True when the path looks like a readable report file.
///
/// Office lock files (`~$...`) are skipped.
#[must_use]
pub fn is_supported_report(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    if name.starts_with("~$") {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
}

/// Lists supported report files directly under `dir`, sorted by path.
///
/// Sorting keeps batch order deterministic, which the aggregator's
/// tie-break relies on.
pub fn list_report_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_report(&path) {
            files.push(path);
        }
    }
    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "discovered report files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions() {
        assert!(is_supported_report(Path::new("report.csv")));
        assert!(is_supported_report(Path::new("report.XLSX")));
        assert!(is_supported_report(Path::new("report.xls")));
        assert!(!is_supported_report(Path::new("report.txt")));
        assert!(!is_supported_report(Path::new("report")));
    }

    #[test]
    fn lock_files_are_skipped() {
        assert!(!is_supported_report(Path::new("~$report.xlsx")));
    }
}
