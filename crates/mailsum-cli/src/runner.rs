//! Run orchestration: input expansion, ingestion, processing, export.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use mailsum_ingest::{list_report_files, read_table};
use mailsum_model::{MailItem, MailTable, RunStats};
use mailsum_report::{DEFAULT_EXPORT_FILE, write_summary_csv};
use mailsum_transform::process_tables;

/// Result of one `process` invocation.
#[derive(Debug)]
pub struct RunResult {
    /// Files actually processed, in batch order.
    pub inputs: Vec<PathBuf>,
    /// Finalized run statistics.
    pub stats: RunStats,
    /// Accepted items, in processing order.
    pub items: Vec<MailItem>,
    /// Export path, when an export was written.
    pub export_path: Option<PathBuf>,
}

/// Options for one run.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub output_dir: Option<PathBuf>,
    pub export_file: Option<String>,
    pub dry_run: bool,
}

/// Expands files and folders into a deterministic list of report files.
///
/// Folders are expanded via discovery (sorted); explicit files are kept in
/// the order given. Order matters: it defines the aggregator's tie-break.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let discovered = list_report_files(input)
                .with_context(|| format!("list reports in {}", input.display()))?;
            if discovered.is_empty() {
                bail!("no report files (.xlsx/.xls/.csv) found in {}", input.display());
            }
            files.extend(discovered);
        } else {
            files.push(input.clone());
        }
    }
    if files.is_empty() {
        bail!("no input files given");
    }
    Ok(files)
}

/// Runs the whole batch: read every table, process, optionally export.
///
/// A file that cannot be read is fatal to the run; the operator fixes the
/// source and retries. Zero accepted rows is not an error.
pub fn run(inputs: &[PathBuf], options: &RunOptions) -> Result<RunResult> {
    let files = expand_inputs(inputs)?;
    info!(files = files.len(), "starting run");

    let mut tables: Vec<MailTable> = Vec::with_capacity(files.len());
    for file in &files {
        let table =
            read_table(file).with_context(|| format!("read report {}", file.display()))?;
        debug!(source = %file.display(), rows = table.rows.len(), "ingested table");
        tables.push(table);
    }

    let outcome = process_tables(&tables);

    let export_path = if options.dry_run {
        None
    } else {
        let path = export_path(options);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir {}", parent.display()))?;
        }
        write_summary_csv(&path, &outcome.items)?;
        Some(path)
    };

    Ok(RunResult {
        inputs: files,
        stats: outcome.stats,
        items: outcome.items,
        export_path,
    })
}

fn export_path(options: &RunOptions) -> PathBuf {
    let dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let name = options
        .export_file
        .as_deref()
        .unwrap_or(DEFAULT_EXPORT_FILE);
    dir.join(name)
}

/// True when the run found nothing to report and diagnostics should be
/// shown to the operator.
#[must_use]
pub fn needs_diagnostics(stats: &RunStats) -> bool {
    stats.final_count == 0 || !stats.missing_required_fields.is_empty()
}
