use serde::{Deserialize, Serialize};
use tabsummary_core::Dataset;
use tabsummary_summarize::ColumnSummary;
use tabsummary_summarize::format::{group_thousands, percent};

use crate::errors::{ReportError, Result};
use crate::html::escape_html;

/// Dataset-level facts shown above the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    pub table_name: String,
    pub rows: usize,
    pub columns: usize,
    pub duplicates: usize,
}

impl Caption {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            table_name: dataset.name().to_string(),
            rows: dataset.height(),
            columns: dataset.width(),
            duplicates: dataset.duplicated_rows(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<strong>Data Frame Summary</strong><br>{}<br>Dimensions: {} x {}<br>Duplicates: {}",
            escape_html(&self.table_name),
            group_thousands(self.rows),
            group_thousands(self.columns),
            group_thousands(self.duplicates)
        )
    }
}

/// Missing cells of one column against the row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCount {
    pub count: usize,
    pub rows: usize,
}

impl MissingCount {
    /// Share of missing rows with one decimal; `0.0` for an empty dataset.
    pub fn percent(&self) -> String {
        percent(self.count, self.rows)
    }

    pub fn to_html(&self) -> String {
        format!("{}<br>({}%)", group_thousands(self.count), self.percent())
    }
}

/// One report row per dataset column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// 1-based column position.
    pub no: usize,
    pub name: String,
    pub dtype: String,
    pub summary: ColumnSummary,
    pub missing: MissingCount,
}

impl ReportRow {
    pub fn variable_html(&self) -> String {
        format!(
            "<strong>{}</strong><br>[{}]",
            escape_html(&self.name),
            escape_html(&self.dtype)
        )
    }

    pub fn stats_html(&self) -> String {
        join_lines(&self.summary.stats)
    }

    pub fn freqs_html(&self) -> String {
        join_lines(&self.summary.freqs)
    }

    pub fn graph_html(&self) -> String {
        self.summary
            .graph
            .as_ref()
            .map(|graph| graph.to_html())
            .unwrap_or_default()
    }
}

/// Caption plus rows, ready for styling or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub caption: Caption,
    pub rows: Vec<ReportRow>,
    pub show_graph: bool,
}

/// Pair every column with its summary, in column order.
pub fn assemble(
    dataset: &Dataset,
    summaries: Vec<ColumnSummary>,
    show_graph: bool,
) -> Result<Report> {
    let columns = dataset.columns();
    if columns.len() != summaries.len() {
        return Err(ReportError::ShapeMismatch {
            columns: columns.len(),
            summaries: summaries.len(),
        });
    }

    let rows = dataset.height();
    let report_rows = columns
        .iter()
        .zip(summaries)
        .enumerate()
        .map(|(index, (column, summary))| ReportRow {
            no: index + 1,
            name: column.name.clone(),
            dtype: column.dtype().to_string(),
            summary,
            missing: MissingCount {
                count: column.values.null_count(),
                rows,
            },
        })
        .collect();

    Ok(Report {
        caption: Caption::from_dataset(dataset),
        rows: report_rows,
        show_graph,
    })
}

fn join_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br>")
}
