//! Per-column summaries for tabsummary.
//!
//! Each column is classified from its declared type and cardinality, then
//! rendered as summary lines plus an optional PNG chart. [`SummaryEngine`]
//! fans the columns out over a fixed-size worker pool and returns the
//! summaries in column order.

pub mod chart;
pub mod classify;
pub mod engine;
pub mod errors;
pub mod format;
pub mod image;
pub mod model;
pub mod stats;
pub mod summarizer;

pub use classify::classify;
pub use engine::SummaryEngine;
pub use errors::SummarizeError;
pub use model::{
    ChartImage, ColumnKind, ColumnSummary, FREQS_FIELD, GRAPH_FIELD, STATS_FIELD, SummaryOptions,
};
pub use summarizer::{chart_filename, summarize_column};
