//! # ptk-core - Core Domain Types
//!
//! Foundation crate for Principal Toolkit. Provides the tool record model, the
//! immutable catalog store, category facets, filtering, related-tool
//! resolution and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`tool`)
//! - [`Tool`] - One catalog entry (prompt template plus metadata)
//! - [`Adjustment`] - A labelled, copyable refinement line
//!
//! ### Catalog (`catalog`, `facets`, `filter`, `related`)
//! - [`Catalog`] - Read-only tool collection with id lookup
//! - [`build_facets()`] - Sorted, de-duplicated categories
//! - [`filter_tools()`], [`CategoryFilter`] - Query + category matching
//! - [`resolve_related()`], [`Related`], [`RelatedOrder`] - Related-tool lookup
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ptk_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod facets;
pub mod filter;
#[cfg(feature = "logging")]
pub mod logging;
pub mod prelude;
pub mod related;
pub mod tool;

// Re-export commonly used types at crate root for convenience
pub use catalog::Catalog;
pub use error::{Error, Result, ResultExt};
pub use facets::build_facets;
pub use filter::{filter_tools, CategoryFilter, TextQuery, ALL_CATEGORIES};
pub use related::{resolve_related, Related, RelatedOrder};
pub use tool::{Adjustment, Tool};
