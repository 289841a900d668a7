//! Styled HTML rendering of an assembled report.

use tabsummary_summarize::{FREQS_FIELD, GRAPH_FIELD, STATS_FIELD};

use crate::assemble::{Report, ReportRow};

/// Properties applied to every body cell.
const CELL_PROPS: &[(&str, &str)] = &[
    ("text-align", "left"),
    ("font-size", "12px"),
    ("vertical-align", "middle"),
];

/// Properties applied to header cells.
const HEADER_PROPS: &[(&str, &str)] = &[("text-align", "left")];

/// Width hints for one report column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnStyle {
    pub field: &'static str,
    pub props: &'static [(&'static str, &'static str)],
}

const NO_STYLE: ColumnStyle = ColumnStyle {
    field: "No",
    props: &[("width", "5%"), ("max-width", "50px"), ("min-width", "20px")],
};

const VARIABLE_STYLE: ColumnStyle = ColumnStyle {
    field: "Variable",
    props: &[
        ("width", "15%"),
        ("max-width", "200px"),
        ("min-width", "100px"),
        ("word-break", "break-word"),
    ],
};

const STATS_STYLE: ColumnStyle = ColumnStyle {
    field: STATS_FIELD,
    props: &[("width", "30%"), ("min-width", "100px")],
};

const FREQS_STYLE: ColumnStyle = ColumnStyle {
    field: FREQS_FIELD,
    props: &[("width", "25%"), ("min-width", "100px")],
};

const MISSING_STYLE: ColumnStyle = ColumnStyle {
    field: "Missing",
    props: &[("width", "10%")],
};

const GRAPH_STYLE: ColumnStyle = ColumnStyle {
    field: GRAPH_FIELD,
    props: &[("width", "20%"), ("min-width", "150px")],
};

/// Report columns in display order. `Graph` is present only when charts are
/// shown.
pub fn column_styles(show_graph: bool) -> Vec<ColumnStyle> {
    let mut styles = vec![NO_STYLE, VARIABLE_STYLE, STATS_STYLE, FREQS_STYLE];
    if show_graph {
        styles.push(GRAPH_STYLE);
    }
    styles.push(MISSING_STYLE);
    styles
}

/// A report paired with its presentation: caption, per-column style hints,
/// no index column.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledReport {
    report: Report,
    table_id: String,
}

impl StyledReport {
    pub fn new(report: Report) -> Self {
        let table_id = format!("T_{}", slug(&report.caption.table_name));
        Self { report, table_id }
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Element id of the rendered `<table>`.
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn column_styles(&self) -> Vec<ColumnStyle> {
        column_styles(self.report.show_graph)
    }

    /// Standalone HTML: a `<style>` block followed by the table.
    pub fn to_html(&self) -> String {
        let styles = self.column_styles();
        let id = &self.table_id;
        let mut lines = Vec::new();

        lines.push("<style type=\"text/css\">".to_string());
        lines.push(format!("#{id} thead>tr>th {{{}}}", css(HEADER_PROPS)));
        lines.push(format!("#{id} td {{{}}}", css(CELL_PROPS)));
        for (index, style) in styles.iter().enumerate() {
            lines.push(format!("#{id} .col{index} {{{}}}", css(style.props)));
        }
        lines.push("</style>".to_string());

        lines.push(format!("<table id=\"{id}\">"));
        lines.push(format!(
            "  <caption>{}</caption>",
            self.report.caption.to_html()
        ));
        lines.push("  <thead>".to_string());
        lines.push("    <tr>".to_string());
        for (index, style) in styles.iter().enumerate() {
            lines.push(format!(
                "      <th class=\"col_heading col{index}\">{}</th>",
                escape_html(style.field)
            ));
        }
        lines.push("    </tr>".to_string());
        lines.push("  </thead>".to_string());
        lines.push("  <tbody>".to_string());
        for row in &self.report.rows {
            lines.push("    <tr>".to_string());
            for (index, style) in styles.iter().enumerate() {
                lines.push(format!(
                    "      <td class=\"data col{index}\">{}</td>",
                    cell(row, style.field)
                ));
            }
            lines.push("    </tr>".to_string());
        }
        lines.push("  </tbody>".to_string());
        lines.push("</table>".to_string());

        let mut html = lines.join("\n");
        html.push('\n');
        html
    }
}

fn cell(row: &ReportRow, field: &str) -> String {
    match field {
        "No" => row.no.to_string(),
        "Variable" => row.variable_html(),
        STATS_FIELD => row.stats_html(),
        FREQS_FIELD => row.freqs_html(),
        GRAPH_FIELD => row.graph_html(),
        "Missing" => row.missing.to_html(),
        _ => String::new(),
    }
}

fn css(props: &[(&str, &str)]) -> String {
    props
        .iter()
        .map(|(name, value)| format!(" {name}: {value};"))
        .collect::<String>()
        + " "
}

/// Lowercase ASCII alphanumerics; everything else becomes `_`.
pub(crate) fn slug(value: &str) -> String {
    let slug: String = value
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if slug.is_empty() {
        "table".to_string()
    } else {
        slug
    }
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
