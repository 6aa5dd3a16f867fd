//! Catalog store: the immutable tool collection for a session
//!
//! A [`Catalog`] is built once from an external source and handed by
//! reference (or `Arc`) to whatever needs it. Facets, filtered views and
//! related-tool lists are recomputed from it on demand.

use std::collections::HashSet;
use std::path::Path;

use crate::facets::build_facets;
use crate::filter::{filter_tools, CategoryFilter};
use crate::prelude::*;
use crate::related::{resolve_related, Related, RelatedOrder};
use crate::tool::Tool;

/// Read-only tool collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn from_tools(tools: Vec<Tool>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tools.len());
        for tool in &tools {
            if !seen.insert(tool.id.as_str()) {
                warn!("Rejecting catalog: duplicate tool id {:?}", tool.id);
                return Err(Error::duplicate_tool_id(&tool.id));
            }
        }
        Ok(Self { tools })
    }

    /// Build a catalog without validating id uniqueness.
    ///
    /// Lookups on a catalog with duplicate ids return the first match.
    pub fn new_unchecked(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    /// Parse a JSON array of tool records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tools: Vec<Tool> = serde_json::from_str(json)?;
        let catalog = Self::from_tools(tools)?;
        debug!(
            "Loaded catalog: {} tools, {} categories",
            catalog.len(),
            catalog.categories().len()
        );
        Ok(catalog)
    }

    /// Load a JSON catalog file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::catalog_load(format!(
                "catalog file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
        info!("Loaded {} tools from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tool> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Exact-id lookup; the first match wins
    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    /// Lookup that treats a miss as an error
    pub fn require(&self, id: &str) -> Result<&Tool> {
        self.get(id).ok_or_else(|| Error::tool_not_found(id))
    }

    /// Distinct categories, ascending
    pub fn categories(&self) -> Vec<String> {
        build_facets(&self.tools)
    }

    /// Tools matching the query and category, in catalog order
    pub fn filter(&self, query: &str, category: &CategoryFilter) -> Vec<&Tool> {
        filter_tools(&self.tools, query, category)
    }

    /// Related tools for `tool`, resolved against this catalog
    pub fn related<'a>(&'a self, tool: &Tool, order: RelatedOrder) -> Related<'a> {
        resolve_related(tool, &self.tools, order)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Tool;
    type IntoIter = std::slice::Iter<'a, Tool>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}
