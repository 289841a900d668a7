//! Textual summaries per column kind.

pub mod categorical;
pub mod datetime;
pub mod numeric;

pub use categorical::{Bucket, FrequencyTable, Level};
pub use datetime::DatetimeSummary;
pub use numeric::NumericSummary;

use crate::format::group_thousands;

/// Lines for the stats and freqs cells of one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatLines {
    pub stats: Vec<String>,
    pub freqs: Vec<String>,
}

impl StatLines {
    /// Placeholder for a column with no non-missing values.
    pub fn no_valid_values() -> Self {
        Self {
            stats: vec!["No valid values".to_string()],
            freqs: vec![distinct_values(0)],
        }
    }
}

pub(crate) fn distinct_values(count: usize) -> String {
    format!("{} distinct values", group_thousands(count))
}
