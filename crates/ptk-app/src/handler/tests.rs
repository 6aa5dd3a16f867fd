//! Tests for the page update handlers

use std::sync::Arc;
use std::time::Duration;

use ptk_core::{Adjustment, Catalog, CategoryFilter, Tool};

use super::*;
use crate::config::Settings;
use crate::copy_feedback::{CopyFeedback, CopyTarget};
use crate::message::{DetailMessage, IndexMessage};
use crate::state::{DetailState, DetailView, IndexState};

fn test_catalog() -> Arc<Catalog> {
    let mut a = Tool::new("a", "Foo bar", "X");
    a.prompt_text = Some("Write the email.".to_string());
    a.adjustments = vec![
        Adjustment::new("Shorter", "Condense this."),
        Adjustment::new("Firmer", "Be more direct."),
    ];
    a.related_tool_ids = vec!["b".to_string()];
    let b = Tool::new("b", "Baz", "Y");
    Arc::new(Catalog::from_tools(vec![a, b]).unwrap())
}

fn open(id: Option<&str>) -> DetailState {
    DetailState::open(test_catalog(), id, &Settings::default())
}

fn result_ids(state: &IndexState) -> Vec<String> {
    state.results().iter().map(|t| t.id.clone()).collect()
}

// ─────────────────────────────────────────────────────────
// Index page
// ─────────────────────────────────────────────────────────

#[test]
fn test_index_initial_state_shows_everything() {
    let state = IndexState::new(test_catalog(), Default::default());
    assert_eq!(state.category, CategoryFilter::All);
    assert_eq!(result_ids(&state), vec!["a", "b"]);
    assert_eq!(state.facets(), vec!["X", "Y"]);
}

#[test]
fn test_index_query_change() {
    let mut state = IndexState::new(test_catalog(), Default::default());
    update_index(&mut state, IndexMessage::QueryChanged("foo".to_string()));
    assert_eq!(result_ids(&state), vec!["a"]);
}

#[test]
fn test_index_category_change() {
    let mut state = IndexState::new(test_catalog(), Default::default());
    update_index(&mut state, IndexMessage::CategoryChanged("Y".to_string()));
    assert_eq!(result_ids(&state), vec!["b"]);

    update_index(&mut state, IndexMessage::CategoryChanged("all".to_string()));
    assert_eq!(result_ids(&state), vec!["a", "b"]);
}

#[test]
fn test_index_view_empty_results() {
    let mut state = IndexState::new(test_catalog(), Default::default());
    update_index(&mut state, IndexMessage::QueryChanged("nothing matches".to_string()));
    assert!(state.view().contains("No tools found"));
}

#[test]
fn test_index_category_options() {
    let state = IndexState::new(test_catalog(), Default::default());
    let options = state.category_options();
    assert!(options.contains(r#"<option value="all">All categories</option>"#));
    assert!(options.contains(r#"<option value="Y">Y</option>"#));
}

// ─────────────────────────────────────────────────────────
// Detail page: lookup and view
// ─────────────────────────────────────────────────────────

#[test]
fn test_detail_found() {
    let state = open(Some("a"));
    assert_eq!(state.tool().map(|t| t.id.as_str()), Some("a"));
    match state.view() {
        DetailView::Found {
            title,
            body,
            related,
        } => {
            assert_eq!(title, "Tool | Foo bar");
            assert!(body.contains("Write the email."));
            assert!(related.contains("Baz"));
        }
        other => panic!("expected found view, got {other:?}"),
    }
}

#[test]
fn test_detail_unknown_id_is_not_found() {
    let state = open(Some("c"));
    assert!(state.tool().is_none());
    assert!(matches!(state.view(), DetailView::NotFound { html } if html.contains("Tool not found")));
    assert!(state.targets().is_empty());
}

#[test]
fn test_detail_missing_id_is_not_found() {
    let state = open(None);
    assert!(matches!(state.view(), DetailView::NotFound { .. }));
}

#[test]
fn test_detail_related_placeholder() {
    let state = open(Some("b"));
    match state.view() {
        DetailView::Found { related, .. } => {
            assert!(related.contains("Related tools will appear here"));
        }
        other => panic!("expected found view, got {other:?}"),
    }
}

#[test]
fn test_detail_targets() {
    let state = open(Some("a"));
    assert_eq!(
        state.targets(),
        vec![
            CopyTarget::Prompt,
            CopyTarget::Adjustment(0),
            CopyTarget::Adjustment(1)
        ]
    );
}

#[test]
fn test_copy_text() {
    let state = open(Some("a"));
    assert_eq!(state.copy_text(CopyTarget::Prompt), Some("Write the email."));
    assert_eq!(state.copy_text(CopyTarget::Adjustment(1)), Some("Be more direct."));
    assert_eq!(state.copy_text(CopyTarget::Adjustment(5)), None);

    // No prompt text still copies, as an empty string
    let state = open(Some("b"));
    assert_eq!(state.copy_text(CopyTarget::Prompt), Some(""));
}

// ─────────────────────────────────────────────────────────
// Detail page: copy flow
// ─────────────────────────────────────────────────────────

#[test]
fn test_copy_request_produces_copy_action() {
    let mut state = open(Some("a"));
    let result = update_detail(&mut state, DetailMessage::CopyRequested(CopyTarget::Adjustment(0)));
    assert_eq!(
        result.action,
        Some(UpdateAction::Copy {
            target: CopyTarget::Adjustment(0),
            text: "Condense this.".to_string(),
        })
    );
    // Label does not change until the copy finishes
    assert_eq!(state.label(CopyTarget::Adjustment(0)), "Copy");
}

#[test]
fn test_copy_success_schedules_revert() {
    let mut state = open(Some("a"));
    update_detail(&mut state, DetailMessage::CopyRequested(CopyTarget::Prompt));
    let result = update_detail(
        &mut state,
        DetailMessage::CopyFinished {
            target: CopyTarget::Prompt,
            success: true,
        },
    );

    assert_eq!(state.label(CopyTarget::Prompt), "Copied");
    let Some(UpdateAction::ScheduleRevert {
        target,
        generation,
        delay,
    }) = result.action
    else {
        panic!("expected ScheduleRevert");
    };
    assert_eq!(target, CopyTarget::Prompt);
    assert_eq!(delay, Duration::from_millis(1200));

    update_detail(&mut state, DetailMessage::RevertLabel { target, generation });
    assert_eq!(state.label(CopyTarget::Prompt), "Copy prompt");
}

#[test]
fn test_copy_failure_label() {
    let mut state = open(Some("a"));
    update_detail(
        &mut state,
        DetailMessage::CopyFinished {
            target: CopyTarget::Adjustment(1),
            success: false,
        },
    );
    assert_eq!(state.label(CopyTarget::Adjustment(1)), "Copy failed");
    // Other buttons are unaffected
    assert_eq!(state.label(CopyTarget::Adjustment(0)), "Copy");
    assert_eq!(state.label(CopyTarget::Prompt), "Copy prompt");
}

#[test]
fn test_rapid_repeat_copy_stale_revert_ignored() {
    let mut state = open(Some("a"));
    let target = CopyTarget::Prompt;

    update_detail(&mut state, DetailMessage::CopyRequested(target));
    let first = update_detail(&mut state, DetailMessage::CopyFinished { target, success: true });
    let Some(UpdateAction::ScheduleRevert { generation: first_gen, .. }) = first.action else {
        panic!("expected ScheduleRevert");
    };

    // Second activation before the first timer fires
    update_detail(&mut state, DetailMessage::CopyRequested(target));
    let second = update_detail(&mut state, DetailMessage::CopyFinished { target, success: false });
    let Some(UpdateAction::ScheduleRevert { generation: second_gen, .. }) = second.action else {
        panic!("expected ScheduleRevert");
    };
    assert!(second_gen > first_gen);

    // The first timer fires late: the fresher feedback survives
    update_detail(&mut state, DetailMessage::RevertLabel { target, generation: first_gen });
    assert_eq!(state.button(target).map(|b| b.feedback()), Some(CopyFeedback::Failed));
    assert_eq!(state.label(target), "Copy failed");

    update_detail(&mut state, DetailMessage::RevertLabel { target, generation: second_gen });
    assert_eq!(state.label(target), "Copy prompt");
}

#[test]
fn test_copy_on_not_found_page_is_ignored() {
    let mut state = open(Some("missing"));
    let result = update_detail(&mut state, DetailMessage::CopyRequested(CopyTarget::Prompt));
    assert!(result.action.is_none());

    let result = update_detail(
        &mut state,
        DetailMessage::CopyFinished {
            target: CopyTarget::Prompt,
            success: true,
        },
    );
    assert!(result.action.is_none());
}

#[test]
fn test_out_of_range_adjustment_is_ignored() {
    let mut state = open(Some("a"));
    let result = update_detail(&mut state, DetailMessage::CopyRequested(CopyTarget::Adjustment(9)));
    assert!(result.action.is_none());
}

#[test]
fn test_custom_feedback_settings() {
    let mut settings = Settings::default();
    settings.feedback.copied_label = "Done".to_string();
    settings.feedback.revert_delay_ms = 300;
    let mut state = DetailState::open(test_catalog(), Some("a"), &settings);

    let result = update_detail(
        &mut state,
        DetailMessage::CopyFinished {
            target: CopyTarget::Prompt,
            success: true,
        },
    );
    assert_eq!(state.label(CopyTarget::Prompt), "Done");
    assert!(matches!(
        result.action,
        Some(UpdateAction::ScheduleRevert { delay, .. }) if delay == Duration::from_millis(300)
    ));
}

#[test]
fn test_message_target() {
    let target = CopyTarget::Adjustment(3);
    assert_eq!(DetailMessage::CopyRequested(target).target(), target);
    assert_eq!(
        DetailMessage::RevertLabel {
            target,
            generation: 1
        }
        .target(),
        target
    );
}
