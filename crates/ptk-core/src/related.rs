//! Resolving a tool's related-tool ids against the catalog

use serde::{Deserialize, Serialize};

use crate::tool::Tool;

/// Ordering of resolved related tools
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelatedOrder {
    /// Catalog iteration order, regardless of the order ids are declared in
    #[default]
    Catalog,
    /// The order the tool's author declared `relatedToolIds` in
    Declared,
}

/// Outcome of resolving related tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Related<'a> {
    /// The tool declares no related ids
    NoneDeclared,
    /// Ids were declared but none of them is in the catalog
    Unresolved,
    /// At least one declared id resolved
    Tools(Vec<&'a Tool>),
}

impl<'a> Related<'a> {
    /// Resolved tools, empty for the placeholder cases
    pub fn tools(&self) -> &[&'a Tool] {
        match self {
            Related::Tools(tools) => tools,
            Related::NoneDeclared | Related::Unresolved => &[],
        }
    }

    /// Whether a placeholder should be shown instead of summaries
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, Related::Tools(_))
    }
}

/// Resolve `tool.related_tool_ids` against `all_tools`.
///
/// Ids that match nothing are skipped silently.
pub fn resolve_related<'a>(tool: &Tool, all_tools: &'a [Tool], order: RelatedOrder) -> Related<'a> {
    let ids = &tool.related_tool_ids;
    if ids.is_empty() {
        return Related::NoneDeclared;
    }

    let resolved: Vec<&Tool> = match order {
        RelatedOrder::Catalog => all_tools
            .iter()
            .filter(|candidate| ids.contains(&candidate.id))
            .collect(),
        RelatedOrder::Declared => ids
            .iter()
            .filter_map(|id| all_tools.iter().find(|candidate| candidate.id == *id))
            .collect(),
    };

    if resolved.is_empty() {
        Related::Unresolved
    } else {
        Related::Tools(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Tool> {
        vec![
            Tool::new("a", "Alpha", "X"),
            Tool::new("b", "Beta", "X"),
            Tool::new("c", "Gamma", "Y"),
        ]
    }

    fn with_related(ids: &[&str]) -> Tool {
        let mut tool = Tool::new("self", "Self", "X");
        tool.related_tool_ids = ids.iter().map(|s| s.to_string()).collect();
        tool
    }

    fn ids(related: &Related<'_>) -> Vec<String> {
        related.tools().iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_no_related_ids_is_placeholder() {
        let tools = catalog();
        let related = resolve_related(&with_related(&[]), &tools, RelatedOrder::Catalog);
        assert_eq!(related, Related::NoneDeclared);
        assert!(related.is_placeholder());
    }

    #[test]
    fn test_catalog_order_ignores_declared_order() {
        let tools = catalog();
        let related = resolve_related(&with_related(&["c", "a"]), &tools, RelatedOrder::Catalog);
        assert_eq!(ids(&related), vec!["a", "c"]);
    }

    #[test]
    fn test_declared_order() {
        let tools = catalog();
        let related = resolve_related(&with_related(&["c", "a"]), &tools, RelatedOrder::Declared);
        assert_eq!(ids(&related), vec!["c", "a"]);
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let tools = catalog();
        for order in [RelatedOrder::Catalog, RelatedOrder::Declared] {
            let related = resolve_related(&with_related(&["zzz", "b"]), &tools, order);
            assert_eq!(ids(&related), vec!["b"]);
        }
    }

    #[test]
    fn test_only_unknown_ids_is_unresolved() {
        let tools = catalog();
        let related = resolve_related(&with_related(&["zzz"]), &tools, RelatedOrder::Catalog);
        assert_eq!(related, Related::Unresolved);
        assert!(related.tools().is_empty());
        assert!(related.is_placeholder());
    }
}
