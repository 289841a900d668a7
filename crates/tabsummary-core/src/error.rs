use thiserror::Error;

/// Core error type shared across tabsummary crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset violates internal invariants.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias for results returned by tabsummary crates.
pub type Result<T> = std::result::Result<T, Error>;
