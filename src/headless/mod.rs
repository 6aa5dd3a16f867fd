//! Headless mode - JSON event output for scripting
//!
//! With `--json`, every command reports through structured JSON events on
//! stdout instead of human-readable text. This enables reliable parsing in
//! scripts and tests.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"tool","id":"parent-email-response","title":"Parent Email Response Builder","category":"Communication","timestamp":1704700001000}
//! {"event":"copied","id":"parent-email-response","target":"prompt","success":true,"label":"Copied","timestamp":1704700002000}
//! ```

use std::io::{self, Write};

use chrono::Utc;
use ptk_app::CopyTarget;
use ptk_core::Tool;
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A tool in a listing or related-tools result
    Tool {
        id: String,
        title: String,
        category: String,
        timestamp: i64,
    },

    /// One category facet
    Category { name: String, timestamp: i64 },

    /// A rendered detail view
    Detail {
        id: String,
        title: String,
        html: String,
        related_html: String,
        timestamp: i64,
    },

    /// Related-tool lookup yielded no tools
    NoRelated { id: String, timestamp: i64 },

    /// Requested tool id is not in the catalog
    NotFound { id: String, timestamp: i64 },

    /// Copy finished
    Copied {
        id: String,
        target: String,
        success: bool,
        label: String,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one JSON line
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn tool(tool: &Tool) -> Self {
        Self::Tool {
            id: tool.id.clone(),
            title: tool.title.clone(),
            category: tool.category.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn category(name: &str) -> Self {
        Self::Category {
            name: name.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn detail(tool: &Tool, html: String, related_html: String) -> Self {
        Self::Detail {
            id: tool.id.clone(),
            title: tool.title.clone(),
            html,
            related_html,
            timestamp: Self::now(),
        }
    }

    pub fn no_related(id: &str) -> Self {
        Self::NoRelated {
            id: id.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn not_found(id: &str) -> Self {
        Self::NotFound {
            id: id.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn copied(id: &str, target: CopyTarget, success: bool, label: &str) -> Self {
        let target = match target {
            CopyTarget::Prompt => "prompt".to_string(),
            CopyTarget::Adjustment(index) => format!("adjustment:{index}"),
        };
        Self::Copied {
            id: id.to_string(),
            target,
            success,
            label: label.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let mut buf = Vec::new();
        event.write_to(&mut buf).expect("write failed");
        assert!(buf.ends_with(b"\n"));
        serde_json::from_slice(&buf).expect("invalid JSON")
    }

    #[test]
    fn test_tool_serialization() {
        let tool = Tool::new("parent-email", "Parent Email", "Communication");
        let value = to_value(&HeadlessEvent::tool(&tool));

        assert_eq!(value["event"], "tool");
        assert_eq!(value["id"], "parent-email");
        assert_eq!(value["title"], "Parent Email");
        assert_eq!(value["category"], "Communication");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_not_found_serialization() {
        let value = to_value(&HeadlessEvent::not_found("c"));
        assert_eq!(value["event"], "not_found");
        assert_eq!(value["id"], "c");
    }

    #[test]
    fn test_copied_serialization() {
        let value = to_value(&HeadlessEvent::copied(
            "a",
            CopyTarget::Adjustment(2),
            false,
            "Copy failed",
        ));
        assert_eq!(value["event"], "copied");
        assert_eq!(value["target"], "adjustment:2");
        assert_eq!(value["success"], false);
        assert_eq!(value["label"], "Copy failed");
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error("Duplicate tool id".to_string(), true));
        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "Duplicate tool id");
        assert_eq!(value["fatal"], true);
    }
}
