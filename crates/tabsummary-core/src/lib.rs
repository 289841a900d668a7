//! Core contracts and helpers for tabsummary.
//!
//! This crate defines the in-memory dataset model (typed columns with
//! explicit missing cells), validation helpers, and CSV ingestion shared
//! by the summarizer, the report renderer and the CLI.

pub mod dataset;
pub mod error;
pub mod ingest;
pub mod types;
pub mod validation;

pub use dataset::{CellKey, Column, ColumnValues, DEFAULT_TABLE_NAME, Dataset};
pub use error::{Error, Result};
pub use types::DType;
pub use validation::validate_columns;
