//! Configuration types for Principal Toolkit
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `CatalogSettings`, `FeedbackSettings` - Section types

use std::path::PathBuf;
use std::time::Duration;

use ptk_core::RelatedOrder;
use ptk_html::{CopyLabels, Links};
use serde::{Deserialize, Serialize};

use crate::copy_feedback::{CopyFeedback, CopyTarget};

/// Global settings from `.ptk/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub feedback: FeedbackSettings,
    pub links: Links,
}

/// Where the catalog comes from and how related tools are ordered
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON catalog file, relative to the project directory
    pub path: PathBuf,
    pub related_order: RelatedOrder,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("catalog/tools.json"),
            related_order: RelatedOrder::Catalog,
        }
    }
}

/// Copy button labels and how long transient feedback stays visible
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedbackSettings {
    /// Delay before a "Copied"/"Copy failed" label reverts (milliseconds)
    pub revert_delay_ms: u64,
    pub copied_label: String,
    pub failed_label: String,
    pub prompt_label: String,
    pub adjustment_label: String,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            revert_delay_ms: 1200,
            copied_label: "Copied".to_string(),
            failed_label: "Copy failed".to_string(),
            prompt_label: "Copy prompt".to_string(),
            adjustment_label: "Copy".to_string(),
        }
    }
}

impl FeedbackSettings {
    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }

    /// Resting label of a copy button
    pub fn idle_label(&self, target: CopyTarget) -> &str {
        match target {
            CopyTarget::Prompt => &self.prompt_label,
            CopyTarget::Adjustment(_) => &self.adjustment_label,
        }
    }

    /// Label to display for a button in the given feedback state
    pub fn label(&self, target: CopyTarget, feedback: CopyFeedback) -> &str {
        match feedback {
            CopyFeedback::Idle => self.idle_label(target),
            CopyFeedback::Copied => &self.copied_label,
            CopyFeedback::Failed => &self.failed_label,
        }
    }

    /// Labels the detail fragment is first rendered with
    pub fn copy_labels(&self) -> CopyLabels {
        CopyLabels {
            prompt: self.prompt_label.clone(),
            adjustment: self.adjustment_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.feedback.revert_delay(), Duration::from_millis(1200));
        assert_eq!(settings.catalog.path, PathBuf::from("catalog/tools.json"));
        assert_eq!(settings.catalog.related_order, RelatedOrder::Catalog);
        assert_eq!(settings.links, Links::default());
    }

    #[test]
    fn test_labels_by_state() {
        let feedback = FeedbackSettings::default();
        assert_eq!(feedback.label(CopyTarget::Prompt, CopyFeedback::Idle), "Copy prompt");
        assert_eq!(feedback.label(CopyTarget::Adjustment(2), CopyFeedback::Idle), "Copy");
        assert_eq!(feedback.label(CopyTarget::Prompt, CopyFeedback::Copied), "Copied");
        assert_eq!(
            feedback.label(CopyTarget::Adjustment(0), CopyFeedback::Failed),
            "Copy failed"
        );
    }

    #[test]
    fn test_parse_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
[catalog]
related_order = "declared"

[feedback]
revert_delay_ms = 500
"#,
        )
        .unwrap();
        assert_eq!(settings.catalog.related_order, RelatedOrder::Declared);
        assert_eq!(settings.catalog.path, PathBuf::from("catalog/tools.json"));
        assert_eq!(settings.feedback.revert_delay_ms, 500);
        assert_eq!(settings.feedback.copied_label, "Copied");
    }

    #[test]
    fn test_copy_labels_follow_settings() {
        let feedback = FeedbackSettings {
            prompt_label: "Copy it".to_string(),
            ..Default::default()
        };
        let labels = feedback.copy_labels();
        assert_eq!(labels.prompt, "Copy it");
        assert_eq!(labels.adjustment, "Copy");
    }
}
