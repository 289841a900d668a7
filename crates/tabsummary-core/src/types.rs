use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared element type of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DType {
    /// Free text.
    String,
    /// Text with a small set of known levels.
    Category,
    Bool,
    Int64,
    Float64,
    Datetime,
    /// Any element type the summarizer has no renderer for.
    Other(String),
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Category => write!(f, "category"),
            Self::Bool => write!(f, "bool"),
            Self::Int64 => write!(f, "int64"),
            Self::Float64 => write!(f, "float64"),
            Self::Datetime => write!(f, "datetime"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}
