use thiserror::Error;

/// Errors emitted while summarizing columns.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("chart rendering failed: {0}")]
    Chart(String),
    #[error("worker pool error: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    #[error("column {0} was never summarized")]
    WorkerLost(usize),
    #[error("dataset error: {0}")]
    Dataset(#[from] tabsummary_core::Error),
}
