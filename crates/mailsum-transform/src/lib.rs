pub mod aggregate;
pub mod outcome;
pub mod pipeline;
pub mod scope;

pub use aggregate::CourierAggregator;
pub use outcome::classify_outcome;
pub use pipeline::{ProcessOutcome, process_tables};
pub use scope::{EXCLUDED_INSTITUTIONS, ScopeDecision, classify_scope, is_cainiao};
