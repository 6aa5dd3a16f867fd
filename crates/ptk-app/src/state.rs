//! Page state for the catalog (index) and detail views
//!
//! Both states hold the catalog through an `Arc` and recompute their views
//! from it on every call; nothing derived is cached.

use std::sync::Arc;

use ptk_core::{Catalog, CategoryFilter, Related, RelatedOrder, Tool};
use ptk_html::{
    document_title, render_category_options, render_detail, render_grid, render_not_found,
    render_related, Links,
};

use crate::config::{FeedbackSettings, Settings};
use crate::copy_feedback::{CopyButton, CopyTarget};

// ─────────────────────────────────────────────────────────────────
// Index Page
// ─────────────────────────────────────────────────────────────────

/// Search query and category selection for the catalog view
#[derive(Debug, Clone)]
pub struct IndexState {
    catalog: Arc<Catalog>,
    links: Links,
    pub query: String,
    pub category: CategoryFilter,
}

impl IndexState {
    pub fn new(catalog: Arc<Catalog>, links: Links) -> Self {
        Self {
            catalog,
            links,
            query: String::new(),
            category: CategoryFilter::All,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Distinct categories for the selector
    pub fn facets(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// `<option>` markup for the category selector
    pub fn category_options(&self) -> String {
        render_category_options(&self.facets())
    }

    /// Tools matching the current query and category
    pub fn results(&self) -> Vec<&Tool> {
        self.catalog.filter(&self.query, &self.category)
    }

    /// Card grid for the current results
    pub fn view(&self) -> String {
        render_grid(self.results(), &self.links)
    }
}

// ─────────────────────────────────────────────────────────────────
// Detail Page
// ─────────────────────────────────────────────────────────────────

/// Rendered detail page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// The requested id is absent or unknown
    NotFound { html: String },
    Found {
        /// Document title (`Tool | {title}`)
        title: String,
        /// Detail sections
        body: String,
        /// Related-tool summaries or placeholder
        related: String,
    },
}

/// One tool's detail page, with feedback state per copy button
#[derive(Debug, Clone)]
pub struct DetailState {
    catalog: Arc<Catalog>,
    /// Position of the selected tool in the catalog
    selected: Option<usize>,
    prompt_button: CopyButton,
    adjustment_buttons: Vec<CopyButton>,
    pub feedback: FeedbackSettings,
    pub links: Links,
    pub related_order: RelatedOrder,
}

impl DetailState {
    /// Open the detail page for the id read from the page location.
    ///
    /// Lookup is by exact id; the first match wins. An absent id or a miss
    /// produces the not-found view.
    pub fn open(catalog: Arc<Catalog>, id: Option<&str>, settings: &Settings) -> Self {
        let selected = id.and_then(|id| catalog.iter().position(|tool| tool.id == id));
        let adjustment_count = selected
            .and_then(|index| catalog.tools().get(index))
            .map_or(0, |tool| tool.adjustments.len());

        Self {
            catalog,
            selected,
            prompt_button: CopyButton::new(),
            adjustment_buttons: vec![CopyButton::new(); adjustment_count],
            feedback: settings.feedback.clone(),
            links: settings.links.clone(),
            related_order: settings.catalog.related_order,
        }
    }

    /// The selected tool, if the lookup succeeded
    pub fn tool(&self) -> Option<&Tool> {
        self.selected.and_then(|index| self.catalog.tools().get(index))
    }

    /// Related tools of the selected tool
    pub fn related(&self) -> Option<Related<'_>> {
        self.tool()
            .map(|tool| self.catalog.related(tool, self.related_order))
    }

    pub fn view(&self) -> DetailView {
        match self.tool() {
            None => DetailView::NotFound {
                html: render_not_found(&self.links),
            },
            Some(tool) => DetailView::Found {
                title: document_title(tool),
                body: render_detail(tool, &self.feedback.copy_labels()),
                related: render_related(&self.catalog.related(tool, self.related_order), &self.links),
            },
        }
    }

    /// Text a copy button places on the clipboard.
    ///
    /// The prompt button copies the prompt text (empty when absent). `None`
    /// when no tool is selected or the adjustment index is out of range.
    pub fn copy_text(&self, target: CopyTarget) -> Option<&str> {
        let tool = self.tool()?;
        match target {
            CopyTarget::Prompt => Some(tool.prompt_text_or_empty()),
            CopyTarget::Adjustment(index) => {
                tool.adjustments.get(index).map(|adjustment| adjustment.text.as_str())
            }
        }
    }

    /// All copy buttons present on the page
    pub fn targets(&self) -> Vec<CopyTarget> {
        if self.tool().is_none() {
            return Vec::new();
        }
        std::iter::once(CopyTarget::Prompt)
            .chain((0..self.adjustment_buttons.len()).map(CopyTarget::Adjustment))
            .collect()
    }

    pub fn button(&self, target: CopyTarget) -> Option<&CopyButton> {
        match target {
            CopyTarget::Prompt => self.tool().map(|_| &self.prompt_button),
            CopyTarget::Adjustment(index) => self.adjustment_buttons.get(index),
        }
    }

    pub(crate) fn button_mut(&mut self, target: CopyTarget) -> Option<&mut CopyButton> {
        match target {
            CopyTarget::Prompt if self.selected.is_some() => Some(&mut self.prompt_button),
            CopyTarget::Prompt => None,
            CopyTarget::Adjustment(index) => self.adjustment_buttons.get_mut(index),
        }
    }

    /// Label currently displayed on a copy button
    pub fn label(&self, target: CopyTarget) -> &str {
        let feedback = self
            .button(target)
            .map(CopyButton::feedback)
            .unwrap_or_default();
        self.feedback.label(target, feedback)
    }
}
