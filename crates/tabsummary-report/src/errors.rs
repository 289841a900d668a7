use tabsummary_summarize::SummarizeError;
use thiserror::Error;

/// Errors emitted while building a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("summary failed: {0}")]
    Summarize(#[from] SummarizeError),
    #[error("dataset error: {0}")]
    Dataset(#[from] tabsummary_core::Error),
    #[error("got {summaries} column summaries for {columns} columns")]
    ShapeMismatch { columns: usize, summaries: usize },
}

pub type Result<T> = std::result::Result<T, ReportError>;
