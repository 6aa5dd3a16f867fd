//! Summary cards and the catalog grid

use ptk_core::{Tool, ALL_CATEGORIES};

use crate::escape::escape_html;
use crate::links::Links;

/// Shown in place of the grid when nothing matches
pub const NO_RESULTS_HTML: &str = r#"
      <div class="card subtle">
        <p class="muted">No tools found. Try a different search term.</p>
      </div>
    "#;

/// Label of the catch-all category option
pub const ALL_CATEGORIES_LABEL: &str = "All categories";

/// Compact summary of one tool
pub fn render_card(tool: &Tool, links: &Links) -> String {
    format!(
        r#"
    <article class="tool-card">
      <div class="tool-meta">
        <span class="pill">{category}</span>
      </div>
      <h3>{title}</h3>
      <p class="muted">{subtitle}</p>
      <p class="small">{purpose}</p>
      <a class="btn" href="{href}">Open tool</a>
    </article>
  "#,
        category = escape_html(tool.category.as_str()),
        title = escape_html(tool.title.as_str()),
        subtitle = escape_html(tool.subtitle.as_deref()),
        purpose = escape_html(tool.purpose.as_str()),
        href = links.detail_href_attr(&tool.id),
    )
}

/// Cards for `tools` in order, or the no-results message when empty
pub fn render_grid<'a>(tools: impl IntoIterator<Item = &'a Tool>, links: &Links) -> String {
    let html: String = tools
        .into_iter()
        .map(|tool| render_card(tool, links))
        .collect();

    if html.is_empty() {
        NO_RESULTS_HTML.to_string()
    } else {
        html
    }
}

/// `<option>` elements for the category selector: the catch-all first, then
/// one per facet
pub fn render_category_options(facets: &[String]) -> String {
    let mut html = format!(
        r#"<option value="{ALL_CATEGORIES}">{ALL_CATEGORIES_LABEL}</option>"#
    );
    for facet in facets {
        let value = escape_html(facet.as_str());
        html.push_str(&format!(r#"<option value="{value}">{value}</option>"#));
    }
    html
}
