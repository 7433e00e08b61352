//! Run statistics accumulated across all processed tables.

use serde::{Deserialize, Serialize};

/// Delivery-outcome category of an accepted row.
///
/// Exactly one category is assigned per accepted row by the classifier
/// cascade in `mailsum-transform`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Outcome {
    /// 退回 — item was returned to sender.
    Returned,
    /// 异常 — delivery exception.
    Exception,
    /// 再投 — pending redelivery (includes empty feedback).
    Redelivery,
    /// 驿站 — delivered to a station, locker, or mailroom.
    Station,
    /// 按址 — delivered to the address; catch-all default.
    Address,
}

impl Outcome {
    /// Chinese label used in summaries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Returned => "退回",
            Outcome::Exception => "异常",
            Outcome::Redelivery => "再投",
            Outcome::Station => "驿站投递",
            Outcome::Address => "按址投递",
        }
    }
}

/// Per-outcome counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub address: usize,
    pub station: usize,
    pub redelivery: usize,
    pub returned: usize,
    pub exception: usize,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Address => self.address += 1,
            Outcome::Station => self.station += 1,
            Outcome::Redelivery => self.redelivery += 1,
            Outcome::Returned => self.returned += 1,
            Outcome::Exception => self.exception += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.address + self.station + self.redelivery + self.returned + self.exception
    }
}

/// Per-courier breakdown in the finalized statistics.
///
/// Invariant: `count == tracking_numbers.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierSummary {
    pub name: String,
    pub count: usize,
    pub tracking_numbers: Vec<String>,
}

/// Mutable accumulator threaded through one pipeline run.
///
/// Created empty, mutated in place by the filter/classifier/aggregator
/// stages, finalized once at pipeline end, then treated as read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Rows seen across all tables, before any filtering.
    pub total_rows: usize,
    /// Rows matching the Cainiao tracking-number pattern.
    pub cainiao_rows: usize,
    /// In-scope rows dropped because of their origin institution.
    pub excluded_rows: usize,
    /// Accepted rows in the final collection.
    pub final_count: usize,
    pub outcomes: OutcomeCounts,
    /// Courier breakdown, sorted by count descending.
    pub courier_stats: Vec<CourierSummary>,
    /// Headers of the first table, retained for diagnostics.
    pub detected_headers: Vec<String>,
    /// Labels of required columns that could not be resolved, deduplicated.
    pub missing_required_fields: Vec<String>,
}

impl RunStats {
    /// Records a required column as missing, keeping the list deduplicated.
    pub fn record_missing_field(&mut self, label: &str) {
        if !self.missing_required_fields.iter().any(|f| f == label) {
            self.missing_required_fields.push(label.to_string());
        }
    }
}
