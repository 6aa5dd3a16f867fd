//! Tool records: prompt templates with the metadata shown in the catalog

use serde::{Deserialize, Serialize};

/// A copyable refinement line offered under a tool's prompt
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Adjustment {
    /// Short label shown next to the copy button
    pub label: String,
    /// Text placed on the clipboard
    pub text: String,
}

impl Adjustment {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// One catalog entry
///
/// Field names follow the catalog source format (`whenToUse`,
/// `relatedToolIds`, ...). Sequences keep source order and default to empty;
/// optional text defaults to `None` and renders as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Unique identity key used for lookup and cross-references
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Open-ended; the set of categories is derived from the data
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub purpose: String,

    #[serde(default)]
    pub when_to_use: Vec<String>,
    #[serde(default)]
    pub what_you_need: Vec<String>,
    #[serde(default)]
    pub what_you_get: Vec<String>,
    #[serde(default)]
    pub pitfalls: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ferpa_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_saved: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub where_it_fits: Option<String>,

    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
    /// May name ids that are not in the catalog; those are skipped
    #[serde(default)]
    pub related_tool_ids: Vec<String>,
}

impl Tool {
    /// Create a tool with the fields every record needs
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// Subtitle, or the empty string when absent
    pub fn subtitle_or_empty(&self) -> &str {
        self.subtitle.as_deref().unwrap_or("")
    }

    /// Secondary line for related-tool summaries: the subtitle, or the
    /// category when the subtitle is absent or empty
    pub fn subtitle_or_category(&self) -> &str {
        match self.subtitle.as_deref() {
            Some(subtitle) if !subtitle.is_empty() => subtitle,
            _ => &self.category,
        }
    }

    /// Prompt text to copy; empty when the record has none
    pub fn prompt_text_or_empty(&self) -> &str {
        self.prompt_text.as_deref().unwrap_or("")
    }

    /// Builds the lower-cased search haystack: title, subtitle, category,
    /// purpose, then every "when to use" and "what you need" entry, joined by
    /// single spaces.
    pub fn haystack(&self) -> String {
        let fields = [
            self.title.as_str(),
            self.subtitle_or_empty(),
            self.category.as_str(),
            self.purpose.as_str(),
        ];

        fields
            .into_iter()
            .chain(self.when_to_use.iter().map(String::as_str))
            .chain(self.what_you_need.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
