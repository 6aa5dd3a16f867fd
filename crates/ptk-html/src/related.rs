//! Related-tool summaries shown beside the detail view

use ptk_core::Related;

use crate::escape::escape_html;
use crate::links::Links;

/// Shown when a tool has no resolvable related tools
pub const NO_RELATED_HTML: &str =
    r#"<p class="muted small">Related tools will appear here as you add more.</p>"#;

/// Render resolved related tools, or the placeholder.
///
/// Never returns an empty fragment: a tool with no declared (or no
/// resolvable) related ids gets the placeholder message.
pub fn render_related(related: &Related<'_>, links: &Links) -> String {
    match related {
        Related::NoneDeclared | Related::Unresolved => NO_RELATED_HTML.to_string(),
        Related::Tools(tools) => tools
            .iter()
            .map(|tool| {
                format!(
                    r#"
    <a class="related-link" href="{href}">
      <div><strong>{title}</strong></div>
      <div class="small muted">{secondary}</div>
    </a>
  "#,
                    href = links.detail_href_attr(&tool.id),
                    title = escape_html(tool.title.as_str()),
                    secondary = escape_html(tool.subtitle_or_category()),
                )
            })
            .collect(),
    }
}
