//! Free-text and category filtering over the catalog

use serde::{Deserialize, Serialize};

use crate::tool::Tool;

/// Selector value that lets every category through
pub const ALL_CATEGORIES: &str = "all";

/// Category selector state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every tool passes
    #[default]
    All,
    /// Only tools whose category is exactly this value (case-sensitive)
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value; the `"all"` sentinel selects everything
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Selector value for this filter
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    /// Check if a tool passes the category test
    pub fn matches(&self, tool: &Tool) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => tool.category == *category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Normalized free-text query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    /// Trim and lower-case the raw input
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// An empty query matches every tool
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check if a tool's haystack contains the query as a contiguous substring
    pub fn matches(&self, tool: &Tool) -> bool {
        self.is_empty() || tool.haystack().contains(&self.needle)
    }
}

/// Tools passing both the category test and the text test, in input order.
///
/// The category test runs first; a tool that fails it never has its haystack
/// built.
pub fn filter_tools<'a>(tools: &'a [Tool], query: &str, category: &CategoryFilter) -> Vec<&'a Tool> {
    let query = TextQuery::new(query);
    tools
        .iter()
        .filter(|tool| category.matches(tool) && query.matches(tool))
        .collect()
}
