//! Full detail view for a single tool
//!
//! The view is a sequence of independent sections. Each one tolerates missing
//! optional data and renders an empty list or paragraph instead.
//!
//! Copy affordances are identified by markup hooks the host page binds to:
//! - `#copyPromptBtn` copies the prompt text shown in `#promptBox`
//! - `[data-copy]` buttons carry their adjustment text; `data-adjustment`
//!   holds the row index

use ptk_core::Tool;

use crate::escape::escape_html;
use crate::links::Links;

/// Element id of the primary copy button
pub const PROMPT_BUTTON_ID: &str = "copyPromptBtn";

/// Heading used when a tool has no prompt title
pub const DEFAULT_PROMPT_TITLE: &str = "Copy & Paste Prompt";

/// `<li>` per entry, in source order
fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item.as_str())))
        .collect()
}

fn header_section(tool: &Tool) -> String {
    format!(
        r#"
    <section class="card">
      <div class="tool-title">
        <div>
          <h1>{title}</h1>
          <p class="muted">{subtitle}</p>
        </div>
        <span class="pill">{category}</span>
      </div>

      <h2>Purpose</h2>
      <p>{purpose}</p>

      <h2>When to Use This Tool</h2>
      <ul>{when}</ul>

      <h2>What You Need to Get Started</h2>
      <ul>{need}</ul>

      <div class="callout">
        <strong>FERPA Reminder:</strong>
        <div class="small">{ferpa}</div>
      </div>
    </section>
"#,
        title = escape_html(tool.title.as_str()),
        subtitle = escape_html(tool.subtitle.as_deref()),
        category = escape_html(tool.category.as_str()),
        purpose = escape_html(tool.purpose.as_str()),
        when = list_items(&tool.when_to_use),
        need = list_items(&tool.what_you_need),
        ferpa = escape_html(tool.ferpa_note.as_deref()),
    )
}

fn prompt_section(tool: &Tool, copy_label: &str) -> String {
    let prompt_title = tool.prompt_title.as_deref().unwrap_or(DEFAULT_PROMPT_TITLE);
    format!(
        r#"
    <section class="card">
      <div class="row-between">
        <h2>{title}</h2>
        <button class="btn secondary" id="{PROMPT_BUTTON_ID}">{label}</button>
      </div>

      <pre class="prompt" id="promptBox">{prompt}</pre>
      <div class="small muted">Tip: Review the output and personalize it before sending.</div>
    </section>
"#,
        title = escape_html(prompt_title),
        label = escape_html(copy_label),
        prompt = escape_html(tool.prompt_text.as_deref()),
    )
}

fn outcome_section(tool: &Tool) -> String {
    format!(
        r#"
    <section class="card">
      <h2>What You'll Get</h2>
      <ul>{get}</ul>
      <div class="small"><strong>Estimated time saved:</strong> {saved}</div>
    </section>
"#,
        get = list_items(&tool.what_you_get),
        saved = escape_html(tool.time_saved.as_deref()),
    )
}

fn adjustments_section(tool: &Tool, copy_label: &str) -> String {
    let label = escape_html(copy_label);
    let rows: String = tool
        .adjustments
        .iter()
        .enumerate()
        .map(|(idx, adjustment)| {
            let text = escape_html(adjustment.text.as_str());
            format!(
                r#"
        <div class="adjust-row">
          <div class="adjust-label">{name}</div>
          <div class="adjust-actions">
            <code class="inline-code" id="adj-{idx}">{text}</code>
            <button class="btn tiny secondary" data-adjustment="{idx}" data-copy="{text}">{label}</button>
          </div>
        </div>
"#,
                name = escape_html(adjustment.label.as_str()),
            )
        })
        .collect();

    format!(
        r#"
    <section class="card">
      <h2>Adjust the Output</h2>
      <p class="muted small">Copy a refinement line and paste it after the draft you generate.</p>
      <div class="adjustments">{rows}</div>
    </section>
"#
    )
}

fn example_section(tool: &Tool) -> String {
    format!(
        r#"
    <section class="card">
      <details>
        <summary><strong>Example Output (Optional)</strong></summary>
        <pre class="example">{example}</pre>
      </details>
    </section>
"#,
        example = escape_html(tool.example_output.as_deref()),
    )
}

fn closing_sections(tool: &Tool) -> String {
    format!(
        r#"
    <section class="card">
      <h2>Common Pitfalls to Avoid</h2>
      <ul>{pitfalls}</ul>
    </section>

    <section class="card">
      <h2>Where This Fits in Your Day</h2>
      <p>{fits}</p>
    </section>
"#,
        pitfalls = list_items(&tool.pitfalls),
        fits = escape_html(tool.where_it_fits.as_deref()),
    )
}

/// Labels shown on the copy buttons when the detail view is first rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyLabels {
    pub prompt: String,
    pub adjustment: String,
}

impl Default for CopyLabels {
    fn default() -> Self {
        Self {
            prompt: "Copy prompt".to_string(),
            adjustment: "Copy".to_string(),
        }
    }
}

/// Render every section of the detail view for `tool`
pub fn render_detail(tool: &Tool, labels: &CopyLabels) -> String {
    [
        header_section(tool),
        prompt_section(tool, &labels.prompt),
        outcome_section(tool),
        adjustments_section(tool, &labels.adjustment),
        example_section(tool),
        closing_sections(tool),
    ]
    .concat()
}

/// Fragment shown when the requested id is absent or unknown
pub fn render_not_found(links: &Links) -> String {
    format!(
        r#"
    <section class="card">
      <h1>Tool not found</h1>
      <p class="muted">Return to the homepage and select a tool.</p>
      <a class="btn" href="{href}">Back to tools</a>
    </section>
"#,
        href = links.index_href_attr(),
    )
}

/// Page title for a tool's detail view
pub fn document_title(tool: &Tool) -> String {
    format!("Tool | {}", tool.title)
}
