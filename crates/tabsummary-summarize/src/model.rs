use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Report column holding the summary lines.
pub const STATS_FIELD: &str = "Stats / Values";
/// Report column holding frequencies or distinct counts.
pub const FREQS_FIELD: &str = "Freqs / (% of Valid)";
/// Report column holding the chart image.
pub const GRAPH_FIELD: &str = "Graph";

/// Options for summary generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Levels shown for categorical columns, and the cardinality at or below
    /// which numeric columns are summarized as categorical.
    pub max_level: usize,
    /// Render a chart per column.
    pub show_graph: bool,
    /// Directory where chart images are written.
    pub tmp_dir: PathBuf,
    /// Wrap the rendered table in a collapsible section.
    pub is_collapsible: bool,
    /// Number of workers summarizing columns in parallel.
    pub num_proc: usize,
    /// Maximum characters shown for a categorical value.
    pub max_str_len: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_level: 10,
            show_graph: true,
            tmp_dir: PathBuf::from("./tmp"),
            is_collapsible: false,
            num_proc: 1,
            max_str_len: 30,
        }
    }
}

/// Summary strategy picked for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Categorical,
    Boolean,
    Datetime,
    Numeric,
    Unsupported,
}

/// Chart written to disk and its embeddable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartImage {
    pub path: PathBuf,
    /// `data:image/png;base64, ...` URI of the file contents.
    pub data_uri: String,
}

impl ChartImage {
    /// Inline `<img>` markup for the chart.
    pub fn to_html(&self) -> String {
        format!("<img src=\"{}\"></img>", self.data_uri)
    }
}

/// Per-column result of the summarizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub kind: ColumnKind,
    /// Lines of the `Stats / Values` cell.
    pub stats: Vec<String>,
    /// Lines of the `Freqs / (% of Valid)` cell.
    pub freqs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<ChartImage>,
}
