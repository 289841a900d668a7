use std::path::Path;

use tabsummary_core::Column;

use crate::chart::{HISTOGRAM_BINS, histogram_bins, render_bar_chart, render_histogram};
use crate::classify::classify;
use crate::errors::SummarizeError;
use crate::image::encode_png_file;
use crate::model::{ChartImage, ColumnKind, ColumnSummary, SummaryOptions};
use crate::stats::{DatetimeSummary, FrequencyTable, NumericSummary, StatLines};

/// Chart file name for the column at `index` of `table_name`.
pub fn chart_filename(table_name: &str, index: usize) -> String {
    format!("{table_name}_{index:03}.png")
}

/// Summarize one column. Charts are written under `options.tmp_dir` only
/// when `options.show_graph` is set.
pub fn summarize_column(
    column: &Column,
    index: usize,
    table_name: &str,
    options: &SummaryOptions,
) -> Result<ColumnSummary, SummarizeError> {
    let chart_path = options
        .show_graph
        .then(|| options.tmp_dir.join(chart_filename(table_name, index)));
    let dtype = column.dtype();
    let distinct = column.values.n_unique();
    let kind = classify(&dtype, distinct, options.max_level);

    let (lines, graph) = match kind {
        ColumnKind::Categorical | ColumnKind::Boolean => {
            let table = FrequencyTable::build(column.values.text_values(), options.max_level);
            if table.is_empty() {
                (StatLines::no_valid_values(), None)
            } else {
                let graph = match &chart_path {
                    Some(path) => {
                        Some(draw(path, |path| render_bar_chart(&table.shares(), path))?)
                    }
                    None => None,
                };
                (table.render(options.max_str_len), graph)
            }
        }
        ColumnKind::Numeric => {
            let values = column.values.numeric_values().unwrap_or_default();
            match NumericSummary::from_values(&values, distinct) {
                Some(summary) => {
                    let graph = histogram(chart_path.as_deref(), &values)?;
                    (summary.render(), graph)
                }
                None => (StatLines::no_valid_values(), None),
            }
        }
        ColumnKind::Datetime => {
            let values = column.values.datetime_values().unwrap_or_default();
            match DatetimeSummary::from_values(&values, distinct) {
                Some(summary) => {
                    let graph = histogram(chart_path.as_deref(), &summary.day_offsets(&values))?;
                    (summary.render(), graph)
                }
                None => (StatLines::no_valid_values(), None),
            }
        }
        ColumnKind::Unsupported => (
            StatLines {
                stats: vec![format!("Unsupported dtype {dtype}")],
                freqs: Vec::new(),
            },
            None,
        ),
    };

    tracing::debug!(
        event = "column_summarized",
        index,
        column = %column.name,
        kind = ?kind,
        distinct
    );

    Ok(ColumnSummary {
        kind,
        stats: lines.stats,
        freqs: lines.freqs,
        graph,
    })
}

fn histogram(path: Option<&Path>, values: &[f64]) -> Result<Option<ChartImage>, SummarizeError> {
    match path {
        Some(path) => {
            let bins = histogram_bins(values, HISTOGRAM_BINS);
            Ok(Some(draw(path, |path| render_histogram(&bins, path))?))
        }
        None => Ok(None),
    }
}

/// Render to `path`, then read the file back as an embeddable image.
fn draw<F>(path: &Path, render: F) -> Result<ChartImage, SummarizeError>
where
    F: FnOnce(&Path) -> Result<(), SummarizeError>,
{
    render(path)?;
    encode_png_file(path)
}

#[cfg(test)]
mod tests {
    use tabsummary_core::ColumnValues;

    use super::*;

    fn no_graph() -> SummaryOptions {
        SummaryOptions {
            show_graph: false,
            ..SummaryOptions::default()
        }
    }

    #[test]
    fn names_chart_files_by_position() {
        assert_eq!(chart_filename("df", 7), "df_007.png");
        assert_eq!(chart_filename("sales", 1234), "sales_1234.png");
    }

    #[test]
    fn low_cardinality_integers_use_frequencies() {
        let column = Column::new(
            "rating",
            ColumnValues::Int64(vec![Some(1), Some(2), Some(2), None]),
        );
        let summary = summarize_column(&column, 0, "df", &no_graph()).expect("summary");

        assert_eq!(summary.kind, ColumnKind::Categorical);
        assert_eq!(summary.stats, vec!["1. 2", "2. 1"]);
        assert_eq!(summary.freqs, vec!["2 (66.7%)", "1 (33.3%)"]);
        assert!(summary.graph.is_none());
    }

    #[test]
    fn booleans_render_like_categories() {
        let column = Column::new(
            "flag",
            ColumnValues::Bool(vec![Some(true), Some(true), Some(false)]),
        );
        let summary = summarize_column(&column, 0, "df", &no_graph()).expect("summary");
        assert_eq!(summary.kind, ColumnKind::Boolean);
        assert_eq!(summary.stats, vec!["1. true", "2. false"]);
    }

    #[test]
    fn high_cardinality_numbers_get_statistics() {
        let values = (1..=5).map(|v| Some(f64::from(v))).collect();
        let column = Column::new("x", ColumnValues::Float64(values));
        let options = SummaryOptions {
            max_level: 2,
            ..no_graph()
        };
        let summary = summarize_column(&column, 0, "df", &options).expect("summary");

        assert_eq!(summary.kind, ColumnKind::Numeric);
        assert_eq!(summary.stats[2], "1.0 < 3.0 < 5.0");
        assert_eq!(summary.freqs, vec!["5 distinct values"]);
    }

    #[test]
    fn low_cardinality_floats_keep_decimal_levels() {
        let column = Column::new(
            "ratio",
            ColumnValues::Float64(vec![Some(1.0), Some(1.0), Some(2.5)]),
        );
        let summary = summarize_column(&column, 0, "df", &no_graph()).expect("summary");
        assert_eq!(summary.kind, ColumnKind::Categorical);
        assert_eq!(summary.stats, vec!["1. 1.0", "2. 2.5"]);
    }

    #[test]
    fn signed_zeros_share_one_level() {
        let column = Column::new(
            "delta",
            ColumnValues::Float64(vec![Some(0.0), Some(-0.0), Some(1.0)]),
        );
        let summary = summarize_column(&column, 0, "df", &no_graph()).expect("summary");
        assert_eq!(summary.stats, vec!["1. 0.0", "2. 1.0"]);
        assert_eq!(summary.freqs, vec!["2 (66.7%)", "1 (33.3%)"]);
    }

    #[test]
    fn unsupported_types_degrade_to_a_notice() {
        let column = Column::new(
            "span",
            ColumnValues::Other {
                dtype: "timedelta".to_string(),
                values: vec![Some("1 day".to_string())],
            },
        );
        let summary = summarize_column(&column, 0, "df", &SummaryOptions::default())
            .expect("unsupported is not an error");

        assert_eq!(summary.kind, ColumnKind::Unsupported);
        assert_eq!(summary.stats, vec!["Unsupported dtype timedelta"]);
        assert!(summary.freqs.is_empty());
        assert!(summary.graph.is_none());
    }

    #[test]
    fn all_missing_text_column_has_placeholder() {
        let column = Column::new("note", ColumnValues::String(vec![None, None]));
        let summary = summarize_column(&column, 0, "df", &SummaryOptions::default())
            .expect("summary");
        assert_eq!(summary.kind, ColumnKind::Categorical);
        assert_eq!(summary.stats, vec!["No valid values"]);
        assert!(summary.graph.is_none());
    }

    #[test]
    fn empty_datetime_column_has_placeholder() {
        let column = Column::new("when", ColumnValues::Datetime(vec![None, None]));
        let summary = summarize_column(&column, 0, "df", &SummaryOptions::default())
            .expect("summary");
        assert_eq!(summary.stats, vec!["No valid values"]);
        assert!(summary.graph.is_none());
    }
}
