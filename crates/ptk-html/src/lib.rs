//! # ptk-html - Markup Fragments
//!
//! Renders catalog data into self-contained markup fragments for a host page
//! to insert. Rendering is pure: every function maps tool data (plus link and
//! label settings) to a `String`, and every interpolated record field passes
//! through [`escape_html`].
//!
//! ## Fragments
//! - [`render_card()`], [`render_grid()`] - Catalog summary view
//! - [`render_category_options()`] - Category selector options
//! - [`render_detail()`] - Full detail view
//! - [`render_related()`] - Related-tool summaries or placeholder
//! - [`render_not_found()`] - Unknown or missing tool id

pub mod card;
pub mod detail;
pub mod escape;
pub mod links;
pub mod related;

pub use card::{
    render_card, render_category_options, render_grid, ALL_CATEGORIES_LABEL, NO_RESULTS_HTML,
};
pub use detail::{
    document_title, render_detail, render_not_found, CopyLabels, DEFAULT_PROMPT_TITLE,
    PROMPT_BUTTON_ID,
};
pub use escape::escape_html;
pub use links::{encode_component, Links};
pub use related::{render_related, NO_RELATED_HTML};
