//! Category facets derived from the catalog

use std::collections::HashSet;

use crate::tool::Tool;

/// Distinct categories present in `tools`, ascending by UTF-16 code units
/// (the order of a JavaScript default string sort).
///
/// Nothing is synthesized: a tool with an empty category contributes an empty-string
/// facet.
pub fn build_facets(tools: &[Tool]) -> Vec<String> {
    let mut facets: Vec<String> = tools
        .iter()
        .map(|tool| tool.category.as_str())
        .collect::<HashSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();
    facets.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
    facets
}
