//! Per-courier aggregation of accepted items.

use mailsum_model::{CourierSummary, MailItem};

/// Bucket label for items with no courier name.
pub const UNSPECIFIED_COURIER: &str = "未指定";

/// Groups accepted items by courier name and produces the sorted summary.
///
/// Buckets keep tracking numbers in accumulation order; the finalized list
/// is sorted by count descending with a stable sort, so ties keep
/// first-insertion order and repeated runs on identical input are
/// byte-identical.
#[derive(Debug, Default)]
pub struct CourierAggregator {
    // Insertion-ordered; courier count per report is small.
    buckets: Vec<(String, Vec<String>)>,
}

impl CourierAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: &MailItem) {
        let name = if item.courier.trim().is_empty() {
            UNSPECIFIED_COURIER
        } else {
            item.courier.trim()
        };
        match self
            .buckets
            .iter_mut()
            .find(|(bucket, _)| bucket == name)
        {
            Some((_, numbers)) => numbers.push(item.tracking_number.clone()),
            None => self
                .buckets
                .push((name.to_string(), vec![item.tracking_number.clone()])),
        }
    }

    /// Consumes the aggregator and returns the count-descending summary.
    #[must_use]
    pub fn finalize(self) -> Vec<CourierSummary> {
        let mut summaries: Vec<CourierSummary> = self
            .buckets
            .into_iter()
            .map(|(name, tracking_numbers)| CourierSummary {
                name,
                count: tracking_numbers.len(),
                tracking_numbers,
            })
            .collect();
        summaries.sort_by(|a, b| b.count.cmp(&a.count));
        summaries
    }
}
