//! CLI command implementations
//!
//! Each command writes to the given writer and returns `Ok(true)` on success,
//! `Ok(false)` when the command ran but the outcome should exit non-zero
//! (unknown tool id, failed copy).

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use ptk_app::{
    load_settings, resolve_catalog_path, update_detail, ClipboardService, CopyTarget,
    DetailMessage, DetailState, LegacyCopy, LocalClipboard, Settings, UpdateAction,
};
use ptk_core::prelude::*;
use ptk_core::{Catalog, CategoryFilter, Related, Tool};
use ptk_html::{render_detail, render_not_found, render_related};

use crate::headless::HeadlessEvent;

/// Message shown for an absent or unknown tool id
pub const NOT_FOUND_MESSAGE: &str = "Tool not found. Run `ptk list` to see available tools.";

/// Placeholder shown when a tool has no resolvable related tools
pub const NO_RELATED_MESSAGE: &str = "Related tools will appear here as you add more.";

/// Loaded catalog plus settings for one CLI invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub catalog: Arc<Catalog>,
    pub settings: Settings,
    /// Emit NDJSON events instead of text
    pub json: bool,
}

impl Context {
    /// Load settings for `project` and the catalog they point at.
    ///
    /// `catalog_override` replaces the configured catalog path.
    pub fn load(project: &Path, catalog_override: Option<&Path>, json: bool) -> Result<Self> {
        let settings = load_settings(project);
        let catalog_path = match catalog_override {
            Some(path) => path.to_path_buf(),
            None => resolve_catalog_path(project, &settings),
        };
        debug!("Using catalog {}", catalog_path.display());
        let catalog = Catalog::load(&catalog_path)?;
        Ok(Self::new(catalog, settings, json))
    }

    pub fn new(catalog: Catalog, settings: Settings, json: bool) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings,
            json,
        }
    }
}

fn write_not_found(ctx: &Context, out: &mut impl Write, id: &str) -> io::Result<bool> {
    if ctx.json {
        HeadlessEvent::not_found(id).write_to(out)?;
    } else {
        writeln!(out, "{}", NOT_FOUND_MESSAGE)?;
    }
    Ok(false)
}

fn write_tool_line(ctx: &Context, out: &mut impl Write, tool: &Tool) -> io::Result<()> {
    if ctx.json {
        HeadlessEvent::tool(tool).write_to(out)
    } else {
        writeln!(out, "{}  {}  [{}]", tool.id, tool.title, tool.category)
    }
}

// ─────────────────────────────────────────────────────────────────
// list / categories
// ─────────────────────────────────────────────────────────────────

/// Tools matching `query` within `category`
pub fn list(ctx: &Context, out: &mut impl Write, query: &str, category: &CategoryFilter) -> io::Result<bool> {
    let results = ctx.catalog.filter(query, category);
    debug!(
        "Query {:?} in {:?} matched {} tools",
        query,
        category.as_str(),
        results.len()
    );
    if results.is_empty() && !ctx.json {
        writeln!(out, "No tools match your search yet.")?;
    }
    for tool in results {
        write_tool_line(ctx, out, tool)?;
    }
    Ok(true)
}

/// Distinct categories, sorted
pub fn categories(ctx: &Context, out: &mut impl Write) -> io::Result<bool> {
    for name in ctx.catalog.categories() {
        if ctx.json {
            HeadlessEvent::category(&name).write_to(out)?;
        } else {
            writeln!(out, "{}", name)?;
        }
    }
    Ok(true)
}

// ─────────────────────────────────────────────────────────────────
// show / related
// ─────────────────────────────────────────────────────────────────

/// Detail view for one tool, as text or markup fragments
pub fn show(ctx: &Context, out: &mut impl Write, id: &str, html: bool) -> io::Result<bool> {
    let Some(tool) = ctx.catalog.get(id) else {
        if html && !ctx.json {
            write!(out, "{}", render_not_found(&ctx.settings.links))?;
            return Ok(false);
        }
        return write_not_found(ctx, out, id);
    };
    let related = ctx.catalog.related(tool, ctx.settings.catalog.related_order);

    if ctx.json {
        let body = render_detail(tool, &ctx.settings.feedback.copy_labels());
        let related_html = render_related(&related, &ctx.settings.links);
        HeadlessEvent::detail(tool, body, related_html).write_to(out)?;
    } else if html {
        write!(out, "{}", render_detail(tool, &ctx.settings.feedback.copy_labels()))?;
        write!(out, "{}", render_related(&related, &ctx.settings.links))?;
    } else {
        write!(out, "{}", format_detail_text(tool, &related))?;
    }
    Ok(true)
}

/// Related tools of one tool
pub fn related(ctx: &Context, out: &mut impl Write, id: &str) -> io::Result<bool> {
    let Some(tool) = ctx.catalog.get(id) else {
        return write_not_found(ctx, out, id);
    };
    let related = ctx.catalog.related(tool, ctx.settings.catalog.related_order);

    if related.is_placeholder() {
        if ctx.json {
            HeadlessEvent::no_related(id).write_to(out)?;
        } else {
            writeln!(out, "{}", NO_RELATED_MESSAGE)?;
        }
        return Ok(true);
    }
    for tool in related.tools() {
        write_tool_line(ctx, out, tool)?;
    }
    Ok(true)
}

fn push_list(text: &mut String, heading: &str, items: &[String]) {
    text.push_str(heading);
    text.push('\n');
    for item in items {
        text.push_str("  - ");
        text.push_str(item);
        text.push('\n');
    }
    text.push('\n');
}

fn push_paragraph(text: &mut String, heading: &str, body: &str) {
    text.push_str(heading);
    text.push('\n');
    if !body.is_empty() {
        text.push_str(body);
        text.push('\n');
    }
    text.push('\n');
}

/// Plain-text detail view, sections in the same order as the markup
pub fn format_detail_text(tool: &Tool, related: &Related<'_>) -> String {
    let mut text = String::new();

    text.push_str(&tool.title);
    text.push('\n');
    let subtitle = tool.subtitle_or_empty();
    if !subtitle.is_empty() {
        text.push_str(subtitle);
        text.push('\n');
    }
    text.push_str(&format!("[{}]\n\n", tool.category));

    push_paragraph(&mut text, "Purpose", &tool.purpose);
    push_list(&mut text, "When to Use This Tool", &tool.when_to_use);
    push_list(&mut text, "What You Need to Get Started", &tool.what_you_need);
    push_paragraph(&mut text, "FERPA Reminder", tool.ferpa_note.as_deref().unwrap_or_default());

    let prompt_title = tool
        .prompt_title
        .as_deref()
        .unwrap_or(ptk_html::DEFAULT_PROMPT_TITLE);
    push_paragraph(&mut text, prompt_title, tool.prompt_text_or_empty());

    push_list(&mut text, "What You'll Get", &tool.what_you_get);
    push_paragraph(
        &mut text,
        "Estimated time saved",
        tool.time_saved.as_deref().unwrap_or_default(),
    );

    text.push_str("Adjust the Output\n");
    for (index, adjustment) in tool.adjustments.iter().enumerate() {
        text.push_str(&format!("  [{}] {}: {}\n", index, adjustment.label, adjustment.text));
    }
    text.push('\n');

    push_paragraph(
        &mut text,
        "Example Output",
        tool.example_output.as_deref().unwrap_or_default(),
    );
    push_list(&mut text, "Common Pitfalls to Avoid", &tool.pitfalls);
    push_paragraph(
        &mut text,
        "Where This Fits in Your Day",
        tool.where_it_fits.as_deref().unwrap_or_default(),
    );

    text.push_str("Related Tools\n");
    if related.is_placeholder() {
        text.push_str(NO_RELATED_MESSAGE);
        text.push('\n');
    } else {
        for tool in related.tools() {
            text.push_str(&format!("  - {} ({})\n", tool.title, tool.id));
        }
    }
    text
}

// ─────────────────────────────────────────────────────────────────
// copy
// ─────────────────────────────────────────────────────────────────

/// Copy a tool's prompt, or one of its adjustment lines, to the clipboard.
///
/// Drives the detail page controller the same way the browser does: request,
/// run the clipboard service, then report the button's feedback label.
pub async fn copy<P, F>(
    ctx: &Context,
    out: &mut impl Write,
    clipboard: &ClipboardService<P, F>,
    id: &str,
    adjustment: Option<usize>,
) -> io::Result<bool>
where
    P: LocalClipboard,
    F: LegacyCopy,
{
    let mut state = DetailState::open(Arc::clone(&ctx.catalog), Some(id), &ctx.settings);
    if state.tool().is_none() {
        return write_not_found(ctx, out, id);
    }

    let target = adjustment.map_or(CopyTarget::Prompt, CopyTarget::Adjustment);
    let result = update_detail(&mut state, DetailMessage::CopyRequested(target));
    let Some(UpdateAction::Copy { text, .. }) = result.action else {
        let message = format!("Tool {} has no adjustment {}", id, adjustment.unwrap_or_default());
        if ctx.json {
            HeadlessEvent::error(message, false).write_to(out)?;
        } else {
            writeln!(out, "{}", message)?;
        }
        return Ok(false);
    };

    let success = clipboard.copy(&text).await;
    // The process exits before any revert would fire
    update_detail(&mut state, DetailMessage::CopyFinished { target, success });

    let label = state.label(target);
    if ctx.json {
        HeadlessEvent::copied(id, target, success, label).write_to(out)?;
    } else {
        writeln!(out, "{}", label)?;
    }
    Ok(success)
}
