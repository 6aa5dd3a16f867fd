//! Configuration file parsing for Principal Toolkit
//!
//! Supports:
//! - `.ptk/config.toml` - Catalog location, copy feedback and link settings

pub mod settings;
pub mod types;

pub use settings::{load_settings, read_settings, resolve_catalog_path, settings_path};
pub use types::*;
