//! Integration tests for loading, filtering and looking up catalog tools

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use principal_toolkit::app::{DetailState, DetailView, IndexMessage, IndexState, Settings};
use principal_toolkit::commands::{self, Context};
use principal_toolkit::core::{Catalog, CategoryFilter, Error};
use principal_toolkit::html::Links;

/// Helper to create a project directory with a catalog and optional config
fn create_project(catalog_json: &str, config: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("catalog")).unwrap();
    fs::write(dir.path().join("catalog/tools.json"), catalog_json).unwrap();
    if let Some(config) = config {
        fs::create_dir_all(dir.path().join(".ptk")).unwrap();
        fs::write(dir.path().join(".ptk/config.toml"), config).unwrap();
    }
    dir
}

fn scenario_catalog() -> Catalog {
    Catalog::from_json_str(include_str!("fixtures/scenario_catalog.json")).unwrap()
}

fn ids(tools: &[&principal_toolkit::core::Tool]) -> Vec<String> {
    tools.iter().map(|tool| tool.id.clone()).collect()
}

#[test]
fn test_query_and_category_scenario() {
    let mut index = IndexState::new(Arc::new(scenario_catalog()), Links::default());

    principal_toolkit::app::update_index(&mut index, IndexMessage::QueryChanged("foo".to_string()));
    assert_eq!(ids(&index.results()), vec!["a"]);

    principal_toolkit::app::update_index(&mut index, IndexMessage::QueryChanged(String::new()));
    principal_toolkit::app::update_index(&mut index, IndexMessage::CategoryChanged("Y".to_string()));
    assert_eq!(ids(&index.results()), vec!["b"]);

    assert_eq!(index.facets(), vec!["X", "Y"]);
}

#[test]
fn test_unknown_id_renders_not_found() {
    let state = DetailState::open(Arc::new(scenario_catalog()), Some("c"), &Settings::default());
    match state.view() {
        DetailView::NotFound { html } => assert!(html.contains("Tool not found")),
        other => panic!("expected not-found view, got {other:?}"),
    }
}

#[test]
fn test_detail_view_skips_unresolvable_related_ids() {
    let state = DetailState::open(Arc::new(scenario_catalog()), Some("a"), &Settings::default());
    let DetailView::Found { title, related, .. } = state.view() else {
        panic!("expected detail view");
    };
    assert_eq!(title, "Tool | Foo bar");
    assert_eq!(related.matches("related-link").count(), 1);
    assert!(related.contains("Second &lt;tool&gt;"));
}

#[test]
fn test_context_loads_from_project_defaults() {
    let project = create_project(include_str!("fixtures/scenario_catalog.json"), None);
    let ctx = Context::load(project.path(), None, false).unwrap();
    assert_eq!(ctx.catalog.len(), 2);

    let mut out = Vec::new();
    assert!(commands::list(&ctx, &mut out, "", &CategoryFilter::All).unwrap());
    assert_eq!(String::from_utf8(out).unwrap(), "a  Foo bar  [X]\nb  Baz  [Y]\n");
}

#[test]
fn test_context_honors_configured_catalog_path() {
    let project = create_project("[]", Some("[catalog]\npath = \"data/other.json\"\n"));
    fs::create_dir_all(project.path().join("data")).unwrap();
    fs::write(
        project.path().join("data/other.json"),
        r#"[{ "id": "z", "title": "Zed", "category": "Z" }]"#,
    )
    .unwrap();

    let ctx = Context::load(project.path(), None, false).unwrap();
    assert!(ctx.catalog.get("z").is_some());
}

#[test]
fn test_catalog_override_wins() {
    let project = create_project("[]", None);
    let override_path = project.path().join("override.json");
    fs::write(&override_path, include_str!("fixtures/scenario_catalog.json")).unwrap();

    let ctx = Context::load(project.path(), Some(&override_path), false).unwrap();
    assert_eq!(ctx.catalog.len(), 2);
}

#[test]
fn test_duplicate_ids_fail_loudly() {
    let project = create_project(
        r#"[{ "id": "a", "title": "One" }, { "id": "a", "title": "Two" }]"#,
        None,
    );
    let err = Context::load(project.path(), None, false).unwrap_err();
    assert!(matches!(err, Error::DuplicateToolId { .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_missing_catalog_is_load_error() {
    let project = TempDir::new().unwrap();
    let err = Context::load(project.path(), None, false).unwrap_err();
    assert!(matches!(err, Error::CatalogLoad { .. }));
}

#[test]
fn test_shipped_catalog_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("catalog/tools.json");
    let catalog = Catalog::load(&path).unwrap();

    let tool = catalog.get("parent-email-response").expect("shipped tool");
    assert_eq!(tool.title, "Parent Email Response Builder");
    assert_eq!(tool.category, "Communication");
    assert_eq!(tool.adjustments.len(), 4);
    assert!(tool.related_tool_ids.is_empty());
    assert!(tool
        .prompt_text_or_empty()
        .starts_with("You are an experienced elementary school principal."));
    assert_eq!(catalog.categories(), vec!["Communication"]);
}
