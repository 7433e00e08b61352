//! The per-table processing pipeline.
//!
//! Stages, in order, for each input table:
//! 1. **Resolve**: bind semantic fields to this table's headers (once).
//! 2. **Filter**: scope pattern and institution exclusion per row.
//! 3. **Classify**: outcome cascade for accepted rows.
//! 4. **Aggregate**: courier buckets across all tables.
//!
//! A table without a resolvable tracking column contributes zero rows but
//! never aborts the batch. Tables and rows are processed strictly in source
//! order; the aggregator's tie-break depends on it.

use tracing::{debug, info, info_span, warn};

use mailsum_map::{ResolvedColumns, resolve_columns};
use mailsum_model::{ItemId, MailField, MailItem, MailTable, RunStats};

use crate::aggregate::CourierAggregator;
use crate::outcome::classify_outcome;
use crate::scope::classify_scope;

/// Result of one pipeline run over a batch of tables.
#[derive(Debug, Default)]
pub struct ProcessOutcome {
    /// Accepted items across all tables, in processing order.
    pub items: Vec<MailItem>,
    /// Finalized run statistics.
    pub stats: RunStats,
}

/// Processes all tables and folds the results into one statistics object
/// and one accepted-item collection.
///
/// Zero accepted rows is a valid outcome; the caller decides how to
/// present it.
#[must_use]
pub fn process_tables(tables: &[MailTable]) -> ProcessOutcome {
    let mut stats = RunStats::default();
    let mut items = Vec::new();
    let mut aggregator = CourierAggregator::new();

    for (table_index, table) in tables.iter().enumerate() {
        let span = info_span!("table", source = %table.source.display());
        let _guard = span.enter();

        stats.total_rows += table.rows.len();
        if stats.detected_headers.is_empty() {
            stats.detected_headers = table.headers.clone();
        }

        let resolved = resolve_columns(&table.headers);
        for field in resolved.missing_required() {
            warn!(field = field.label(), "required column not found");
            stats.record_missing_field(field.label());
        }
        if !resolved.has_tracking() {
            warn!(rows = table.rows.len(), "skipping table without a tracking column");
            continue;
        }
        debug!(rows = table.rows.len(), "processing table");

        process_rows(
            table,
            table_index,
            &resolved,
            &mut stats,
            &mut items,
            &mut aggregator,
        );
    }

    stats.courier_stats = aggregator.finalize();
    stats.final_count = items.len();
    info!(
        total = stats.total_rows,
        in_scope = stats.cainiao_rows,
        excluded = stats.excluded_rows,
        accepted = stats.final_count,
        "run complete"
    );
    ProcessOutcome { items, stats }
}

fn process_rows(
    table: &MailTable,
    table_index: usize,
    resolved: &ResolvedColumns,
    stats: &mut RunStats,
    items: &mut Vec<MailItem>,
    aggregator: &mut CourierAggregator,
) {
    for (row_index, row) in table.rows.iter().enumerate() {
        let tracking_number = resolved.value(row, MailField::Tracking);
        let origin_institution = resolved.value(row, MailField::Institution);

        let decision = classify_scope(tracking_number, origin_institution);
        if !decision.in_scope {
            continue;
        }
        stats.cainiao_rows += 1;
        if decision.excluded {
            stats.excluded_rows += 1;
            continue;
        }

        let sign_method = resolved.value(row, MailField::SignMethod);
        let feedback = resolved.value(row, MailField::Feedback);
        stats.outcomes.record(classify_outcome(sign_method, feedback));

        let item = MailItem {
            id: ItemId::from_position(table_index, row_index),
            tracking_number: tracking_number.to_string(),
            recipient_address: resolved.value(row, MailField::Address).to_string(),
            reception_time: resolved.value(row, MailField::Time).to_string(),
            courier: resolved.value(row, MailField::Courier).to_string(),
            sign_method: sign_method.to_string(),
            feedback: feedback.to_string(),
            origin_institution: origin_institution.to_string(),
        };
        aggregator.push(&item);
        items.push(item);
    }
}
