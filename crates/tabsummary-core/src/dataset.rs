use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::types::DType;
use crate::validation::validate_columns;

/// Table name used when a dataset carries none.
pub const DEFAULT_TABLE_NAME: &str = "df";

/// Typed cell storage for one column. `None` marks a missing cell.
///
/// A `Float64` cell holding `NaN` is treated as missing as well.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    String(Vec<Option<String>>),
    Category(Vec<Option<String>>),
    Bool(Vec<Option<bool>>),
    Int64(Vec<Option<i64>>),
    Float64(Vec<Option<f64>>),
    Datetime(Vec<Option<NaiveDateTime>>),
    /// Values of a type without a dedicated renderer, kept in text form.
    Other {
        dtype: String,
        values: Vec<Option<String>>,
    },
}

/// Hashable view of a single cell, used for distinct counts and duplicate rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKey<'a> {
    Missing,
    Text(&'a str),
    Bool(bool),
    Int(i64),
    Float(u64),
    Datetime(NaiveDateTime),
}

fn float_key(value: f64) -> u64 {
    // -0.0 and 0.0 compare equal, so they must hash equal.
    if value == 0.0 { 0 } else { value.to_bits() }
}

/// Text form of a float level: `-0.0` folds into `0.0` and whole numbers
/// keep their `.0`, so `1.0` never reads like an integer.
fn float_text(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:?}")
}

fn valid_float(value: &Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            Self::String(values) | Self::Category(values) => values.len(),
            Self::Other { values, .. } => values.len(),
            Self::Bool(values) => values.len(),
            Self::Int64(values) => values.len(),
            Self::Float64(values) => values.len(),
            Self::Datetime(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            Self::String(_) => DType::String,
            Self::Category(_) => DType::Category,
            Self::Bool(_) => DType::Bool,
            Self::Int64(_) => DType::Int64,
            Self::Float64(_) => DType::Float64,
            Self::Datetime(_) => DType::Datetime,
            Self::Other { dtype, .. } => DType::Other(dtype.clone()),
        }
    }

    /// Key of the cell at `row`; out-of-range rows read as missing.
    pub fn cell_key(&self, row: usize) -> CellKey<'_> {
        let key = match self {
            Self::String(values) | Self::Category(values) | Self::Other { values, .. } => values
                .get(row)
                .and_then(|value| value.as_deref())
                .map(CellKey::Text),
            Self::Bool(values) => values.get(row).copied().flatten().map(CellKey::Bool),
            Self::Int64(values) => values.get(row).copied().flatten().map(CellKey::Int),
            Self::Float64(values) => values
                .get(row)
                .and_then(valid_float)
                .map(|value| CellKey::Float(float_key(value))),
            Self::Datetime(values) => values.get(row).copied().flatten().map(CellKey::Datetime),
        };
        key.unwrap_or(CellKey::Missing)
    }

    pub fn is_missing(&self, row: usize) -> bool {
        self.cell_key(row) == CellKey::Missing
    }

    pub fn null_count(&self) -> usize {
        (0..self.len()).filter(|&row| self.is_missing(row)).count()
    }

    /// Number of distinct non-missing values.
    pub fn n_unique(&self) -> usize {
        let mut seen = HashSet::new();
        for row in 0..self.len() {
            let key = self.cell_key(row);
            if key != CellKey::Missing {
                seen.insert(key);
            }
        }
        seen.len()
    }

    /// Non-missing values rendered as text, in row order.
    pub fn text_values(&self) -> Vec<String> {
        match self {
            Self::String(values) | Self::Category(values) | Self::Other { values, .. } => {
                values.iter().flatten().cloned().collect()
            }
            Self::Bool(values) => values.iter().flatten().map(ToString::to_string).collect(),
            Self::Int64(values) => values.iter().flatten().map(ToString::to_string).collect(),
            Self::Float64(values) => values
                .iter()
                .filter_map(valid_float)
                .map(float_text)
                .collect(),
            Self::Datetime(values) => values
                .iter()
                .flatten()
                .map(|value| value.format("%Y-%m-%d %H:%M:%S").to_string())
                .collect(),
        }
    }

    /// Non-missing values as `f64` for numeric columns, `None` otherwise.
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        match self {
            Self::Int64(values) => Some(values.iter().flatten().map(|&v| v as f64).collect()),
            Self::Float64(values) => Some(values.iter().filter_map(valid_float).collect()),
            _ => None,
        }
    }

    /// Non-missing timestamps for datetime columns, `None` otherwise.
    pub fn datetime_values(&self) -> Option<Vec<NaiveDateTime>> {
        match self {
            Self::Datetime(values) => Some(values.iter().flatten().copied().collect()),
            _ => None,
        }
    }
}

/// A named column of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: ColumnValues,
}

impl Column {
    pub fn new(name: impl Into<String>, values: ColumnValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn dtype(&self) -> DType {
        self.values.dtype()
    }
}

/// An immutable table of equally sized, uniquely named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: Option<String>,
    columns: Vec<Column>,
}

impl Dataset {
    /// Build a dataset, rejecting ragged columns and duplicate names.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        validate_columns(&columns)?;
        Ok(Self {
            name: None,
            columns,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Table name, `df` when none was set.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_TABLE_NAME)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns
            .first()
            .map(|column| column.values.len())
            .unwrap_or(0)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Count rows that are identical to an earlier row. Missing cells
    /// compare equal to each other.
    pub fn duplicated_rows(&self) -> usize {
        let mut seen = HashSet::with_capacity(self.height());
        (0..self.height())
            .filter(|&row| {
                let key: Vec<CellKey<'_>> = self
                    .columns
                    .iter()
                    .map(|column| column.values.cell_key(row))
                    .collect();
                !seen.insert(key)
            })
            .count()
    }
}
