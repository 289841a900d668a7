//! Data frame summary reports.
//!
//! [`df_summary`] runs the per-column summaries for a dataset and arranges
//! them into a styled HTML table, optionally wrapped in a collapsible
//! section. [`summarize_report`] stops before styling for callers that want
//! the structured rows.

pub mod assemble;
pub mod errors;
pub mod html;
pub mod widgets;

use tabsummary_core::Dataset;
use tabsummary_summarize::{SummaryEngine, SummaryOptions};

pub use assemble::{Caption, MissingCount, Report, ReportRow, assemble};
pub use errors::{ReportError, Result};
pub use html::{ColumnStyle, StyledReport, column_styles, escape_html};
pub use widgets::{collapsible, tabset};

/// Rendered report as returned by [`df_summary`].
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutput {
    Styled(StyledReport),
    /// Raw HTML of the styled table inside a `<details>` section.
    Collapsible(String),
}

impl SummaryOutput {
    pub fn to_html(&self) -> String {
        match self {
            SummaryOutput::Styled(styled) => styled.to_html(),
            SummaryOutput::Collapsible(html) => html.clone(),
        }
    }
}

/// Summarize every column and assemble the rows, without styling.
pub fn summarize_report(dataset: &Dataset, options: &SummaryOptions) -> Result<Report> {
    let engine = SummaryEngine::new(options.clone());
    let summaries = engine.run(dataset)?;
    assemble(dataset, summaries, options.show_graph)
}

/// Build the summary report for `dataset`.
pub fn df_summary(dataset: &Dataset, options: &SummaryOptions) -> Result<SummaryOutput> {
    let styled = StyledReport::new(summarize_report(dataset, options)?);

    tracing::info!(
        event = "report_built",
        table = dataset.name(),
        rows = styled.report().rows.len(),
        collapsible = options.is_collapsible
    );

    if options.is_collapsible {
        Ok(SummaryOutput::Collapsible(collapsible(
            &styled.to_html(),
            dataset.name(),
        )))
    } else {
        Ok(SummaryOutput::Styled(styled))
    }
}
