use tabsummary_core::DType;

use crate::model::ColumnKind;

/// Pick the summary strategy for a column from its declared type and the
/// number of distinct non-missing values.
pub fn classify(dtype: &DType, distinct: usize, max_level: usize) -> ColumnKind {
    match dtype {
        DType::Bool => ColumnKind::Boolean,
        DType::String | DType::Category => ColumnKind::Categorical,
        DType::Int64 | DType::Float64 if distinct <= max_level => ColumnKind::Categorical,
        DType::Datetime => ColumnKind::Datetime,
        DType::Int64 | DType::Float64 => ColumnKind::Numeric,
        DType::Other(_) => ColumnKind::Unsupported,
    }
}
