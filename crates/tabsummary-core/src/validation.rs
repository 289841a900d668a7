use std::collections::BTreeSet;

use crate::dataset::Column;
use crate::error::{Error, Result};

/// Validate internal consistency of a column set.
///
/// This checks:
/// - duplicate column names
/// - every column has the same number of rows
pub fn validate_columns(columns: &[Column]) -> Result<()> {
    let mut names = BTreeSet::new();
    for column in columns {
        if !names.insert(column.name.as_str()) {
            return Err(Error::InvalidDataset(format!(
                "duplicate column name: {}",
                column.name
            )));
        }
    }

    if let Some(first) = columns.first() {
        let expected = first.values.len();
        for column in columns {
            let found = column.values.len();
            if found != expected {
                return Err(Error::InvalidDataset(format!(
                    "column {} has {} rows, expected {} (from column {})",
                    column.name, found, expected, first.name
                )));
            }
        }
    }

    Ok(())
}
