use std::fs;
use std::path::PathBuf;

use tabsummary_core::{Column, ColumnValues, Dataset};
use tabsummary_report::{
    ReportError, SummaryOutput, assemble, df_summary, summarize_report, tabset,
};
use tabsummary_summarize::{FREQS_FIELD, GRAPH_FIELD, STATS_FIELD, SummaryOptions};

fn temp_out_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tabsummary_report_{label}_{}", uuid::Uuid::new_v4()))
}

fn text(values: &[Option<&str>]) -> ColumnValues {
    ColumnValues::String(values.iter().map(|v| v.map(str::to_string)).collect())
}

fn options(label: &str, show_graph: bool) -> SummaryOptions {
    SummaryOptions {
        show_graph,
        tmp_dir: temp_out_dir(label),
        ..SummaryOptions::default()
    }
}

fn sample() -> Dataset {
    Dataset::new(vec![
        Column::new(
            "city",
            text(&[Some("Lyon"), Some("Oslo"), Some("Lyon"), None]),
        ),
        Column::new(
            "score",
            ColumnValues::Float64(vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
        ),
        Column::new("empty", text(&[None, None, None, None])),
    ])
    .expect("valid dataset")
    .with_name("visits")
}

#[test]
fn one_row_per_column_in_order() {
    let dataset = sample();
    let report = summarize_report(&dataset, &options("rows", false)).expect("report");

    let names: Vec<_> = report.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["city", "score", "empty"]);
    let numbers: Vec<_> = report.rows.iter().map(|row| row.no).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(report.rows[0].variable_html(), "<strong>city</strong><br>[string]");
}

#[test]
fn missing_field_covers_none_some_and_all() {
    let dataset = sample();
    let report = summarize_report(&dataset, &options("missing", false)).expect("report");

    assert_eq!(report.rows[0].missing.to_html(), "1<br>(25.0%)");
    assert_eq!(report.rows[1].missing.to_html(), "0<br>(0.0%)");
    assert_eq!(report.rows[2].missing.to_html(), "4<br>(100.0%)");
    assert_eq!(report.rows[2].summary.stats, vec!["No valid values"]);
}

#[test]
fn caption_reports_dimensions_and_duplicates() {
    let dataset = Dataset::new(vec![
        Column::new("a", ColumnValues::Int64(vec![Some(1), Some(1), None, None])),
        Column::new("b", text(&[Some("x"), Some("x"), None, None])),
    ])
    .expect("valid dataset");

    let report = summarize_report(&dataset, &options("caption", false)).expect("report");
    assert_eq!(
        report.caption.to_html(),
        "<strong>Data Frame Summary</strong><br>df<br>Dimensions: 4 x 2<br>Duplicates: 2"
    );
}

#[test]
fn styled_html_has_headers_caption_and_styles() {
    let dataset = sample();
    let output = df_summary(&dataset, &options("styled", true)).expect("summary");
    let SummaryOutput::Styled(styled) = &output else {
        panic!("expected styled output");
    };

    let html = output.to_html();
    assert_eq!(styled.table_id(), "T_visits");
    assert!(html.starts_with("<style type=\"text/css\">"));
    assert!(html.contains("#T_visits thead>tr>th { text-align: left; }"));
    assert!(html.contains("#T_visits td { text-align: left; font-size: 12px; vertical-align: middle; }"));
    assert!(html.contains("word-break: break-word;"));
    assert!(html.contains("<caption><strong>Data Frame Summary</strong><br>visits<br>"));
    for field in ["No", "Variable", STATS_FIELD, FREQS_FIELD, GRAPH_FIELD, "Missing"] {
        assert!(
            html.contains(&format!("\">{field}</th>")),
            "missing header {field}"
        );
    }
    assert_eq!(html.matches("<tr>").count(), 4);
    assert_eq!(html.matches("<img src=\"data:image/png;base64, ").count(), 2);
}

#[test]
fn no_graph_drops_the_graph_column() {
    let dataset = sample();
    let opts = options("nograph", false);
    let html = df_summary(&dataset, &opts).expect("summary").to_html();

    assert!(!html.contains(GRAPH_FIELD));
    assert!(!html.contains("<img"));
    assert_eq!(fs::read_dir(&opts.tmp_dir).expect("tmp dir").count(), 0);
}

#[test]
fn collapsible_wraps_the_styled_table() {
    let dataset = sample();
    let plain = df_summary(&dataset, &options("plain", false))
        .expect("summary")
        .to_html();

    let opts = SummaryOptions {
        is_collapsible: true,
        ..options("collapsed", false)
    };
    let output = df_summary(&dataset, &opts).expect("summary");
    let SummaryOutput::Collapsible(html) = output else {
        panic!("expected collapsible output");
    };

    assert!(html.starts_with("<details>\n<summary>visits</summary>\n"));
    assert!(html.ends_with("</details>\n"));
    assert!(html.contains(&plain));
}

#[test]
fn dataset_text_is_escaped() {
    let dataset = Dataset::new(vec![Column::new(
        "<script>",
        text(&[Some("a & b"), Some("<i>"), Some("a & b")]),
    )])
    .expect("valid dataset")
    .with_name("x\"y");

    let html = df_summary(&dataset, &options("escape", false))
        .expect("summary")
        .to_html();

    assert!(html.contains("<strong>&lt;script&gt;</strong>"));
    assert!(html.contains("1. a &amp; b"));
    assert!(html.contains("2. &lt;i&gt;"));
    assert!(html.contains("<br>x&quot;y<br>"));
    assert!(!html.contains("<i>"));
}

#[test]
fn summaries_must_match_columns() {
    let dataset = sample();
    let result = assemble(&dataset, Vec::new(), false);
    assert!(matches!(
        result,
        Err(ReportError::ShapeMismatch {
            columns: 3,
            summaries: 0
        })
    ));
}

#[test]
fn reports_serialize_to_json() {
    let dataset = sample();
    let opts = SummaryOptions {
        max_level: 2,
        ..options("json", false)
    };
    let report = summarize_report(&dataset, &opts).expect("report");
    let json = serde_json::to_value(&report).expect("serialize report");

    assert_eq!(json["caption"]["table_name"], "visits");
    assert_eq!(json["rows"][1]["summary"]["kind"], "numeric");
    assert_eq!(json["rows"][0]["missing"]["count"], 1);
}

#[test]
fn tabset_holds_several_reports() {
    let first = df_summary(&sample(), &options("tab_a", false))
        .expect("summary")
        .to_html();
    let second = df_summary(&sample().with_name("other"), &options("tab_b", false))
        .expect("summary")
        .to_html();

    let html = tabset(&[("visits", first.as_str()), ("other", second.as_str())]);
    assert!(html.contains("<label for=\"tabset_visits_other_0\">visits</label>"));
    assert!(html.contains(&first));
    assert!(html.contains(&second));
}
