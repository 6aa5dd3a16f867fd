//! Principal Toolkit Library
//!
//! Command-line host for the tool catalog: command implementations, native
//! clipboard backends and NDJSON headless output.

// Module declarations
pub mod clipboard;
pub mod commands;
pub mod headless;

// Re-export workspace crates for integration tests and embedders
pub use ptk_app as app;
pub use ptk_core as core;
pub use ptk_html as html;

pub use commands::Context;
