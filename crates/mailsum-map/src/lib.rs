pub mod keywords;
pub mod resolver;
pub mod types;

pub use keywords::field_keywords;
pub use resolver::{find_best_header, resolve_columns};
pub use types::ResolvedColumns;
