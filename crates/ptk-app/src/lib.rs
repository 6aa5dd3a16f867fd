//! # ptk-app - Page State and Orchestration
//!
//! This crate contains the page state and business logic for the Principal
//! Toolkit catalog. It implements the TEA (The Elm Architecture) pattern for
//! the two pages:
//!
//! - **Index**: [`IndexState`] + [`IndexMessage`] via [`update_index`]
//! - **Detail**: [`DetailState`] + [`DetailMessage`] via [`update_detail`],
//!   which returns [`UpdateAction`]s for the host to perform (run the
//!   clipboard service, schedule or replace a label revert timer)
//!
//! Hosts (the CLI and the browser site) own the event loop and the platform
//! backends for [`ClipboardService`].

pub mod clipboard;
pub mod config;
pub mod copy_feedback;
pub mod handler;
pub mod message;
pub mod state;

pub use clipboard::{Clipboard, ClipboardService, LegacyCopy, LocalClipboard, Unsupported};
pub use config::{
    load_settings, read_settings, resolve_catalog_path, CatalogSettings, FeedbackSettings,
    Settings,
};
pub use copy_feedback::{CopyButton, CopyFeedback, CopyTarget};
pub use handler::{update_detail, update_index, UpdateAction, UpdateResult};
pub use message::{DetailMessage, IndexMessage};
pub use state::{DetailState, DetailView, IndexState};
