//! Small HTML containers for rendered reports.

use crate::html::{escape_html, slug};

/// Wrap `html` in a `<details>` section titled `title`, closed by default.
pub fn collapsible(html: &str, title: &str) -> String {
    format!(
        "<details>\n<summary>{}</summary>\n{html}</details>\n",
        escape_html(title)
    )
}

/// Lay several rendered reports out as CSS-only tabs, first tab selected.
///
/// The radio group name is derived from the titles so repeated calls with
/// the same tabs produce identical markup.
pub fn tabset<T, H>(tabs: &[(T, H)]) -> String
where
    T: AsRef<str>,
    H: AsRef<str>,
{
    let group = format!(
        "tabset_{}",
        slug(
            &tabs
                .iter()
                .map(|(title, _)| title.as_ref())
                .collect::<Vec<_>>()
                .join("_")
        )
    );

    let mut lines = Vec::new();
    lines.push("<style type=\"text/css\">".to_string());
    lines.push(format!("#{group} > input {{ display: none; }}"));
    lines.push(format!(
        "#{group} > label {{ display: inline-block; padding: 4px 12px; cursor: pointer; border-bottom: 2px solid transparent; }}"
    ));
    lines.push(format!(
        "#{group} > input:checked + label {{ border-bottom-color: currentColor; font-weight: bold; }}"
    ));
    lines.push(format!("#{group} > .tab-panel {{ display: none; order: 1; width: 100%; }}"));
    lines.push(format!(
        "#{group} > input:checked + label + .tab-panel {{ display: block; }}"
    ));
    lines.push(format!("#{group} {{ display: flex; flex-wrap: wrap; }}"));
    lines.push("</style>".to_string());

    lines.push(format!("<div class=\"tabset\" id=\"{group}\">"));
    for (index, (title, html)) in tabs.iter().enumerate() {
        let tab_id = format!("{group}_{index}");
        let checked = if index == 0 { " checked" } else { "" };
        lines.push(format!(
            "<input type=\"radio\" name=\"{group}\" id=\"{tab_id}\"{checked}>"
        ));
        lines.push(format!(
            "<label for=\"{tab_id}\">{}</label>",
            escape_html(title.as_ref())
        ));
        lines.push(format!("<div class=\"tab-panel\">\n{}</div>", html.as_ref()));
    }
    lines.push("</div>".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
