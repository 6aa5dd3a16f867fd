//! Tool detail page
//!
//! The detail fragment is inserted as markup, so copy buttons are bound with
//! one delegated click handler on the page host. Button labels are updated
//! in place from [`DetailState::label`] after every message.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;
use ptk_app::{update_detail, CopyTarget, DetailMessage, DetailState, DetailView, UpdateAction};
use ptk_html::PROMPT_BUTTON_ID;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::clipboard::web_clipboard;
use crate::data;
use crate::timers::RevertTimers;

#[component]
pub fn ToolPage() -> impl IntoView {
    let query = use_query_map();

    // Re-render when a related link changes the id
    move || {
        let id = query.with(|q| q.get("id"));
        view! { <ToolDetail id=id /> }
    }
}

#[component]
fn ToolDetail(id: Option<String>) -> impl IntoView {
    let state = StoredValue::new(DetailState::open(data::catalog(), id.as_deref(), &data::settings()));
    let timers = StoredValue::new_local(RevertTimers::default());
    on_cleanup(move || {
        timers.try_update_value(RevertTimers::cancel_all);
    });

    let on_click = move |ev: MouseEvent| {
        if let Some(target) = copy_target_of(&ev) {
            dispatch(state, timers, DetailMessage::CopyRequested(target));
        }
    };

    match state.with_value(DetailState::view) {
        DetailView::NotFound { html } => view! {
            <main class="container">
                <div id="toolPage" inner_html=html></div>
            </main>
        }
        .into_any(),
        DetailView::Found { title, body, related } => view! {
            <Title text=title />
            <main class="container tool-layout">
                <div id="toolPage" on:click=on_click inner_html=body></div>
                <aside class="card">
                    <h2>"Related Tools"</h2>
                    <div id="relatedTools" inner_html=related></div>
                </aside>
            </main>
        }
        .into_any(),
    }
}

/// Run one message through the controller and perform its action
fn dispatch(
    state: StoredValue<DetailState>,
    timers: StoredValue<RevertTimers, LocalStorage>,
    message: DetailMessage,
) {
    let target = message.target();
    let Some(result) = state.try_update_value(|s| update_detail(s, message)) else {
        // Page was torn down while a copy or timer was in flight
        return;
    };
    state.with_value(|s| set_button_label(target, s.label(target)));

    match result.action {
        Some(UpdateAction::Copy { target, text }) => {
            leptos::task::spawn_local(async move {
                let success = web_clipboard().copy(&text).await;
                dispatch(state, timers, DetailMessage::CopyFinished { target, success });
            });
        }
        Some(UpdateAction::ScheduleRevert {
            target,
            generation,
            delay,
        }) => {
            timers.update_value(|t| {
                t.schedule(target, delay, move || {
                    timers.try_update_value(|t| t.fired(target));
                    dispatch(state, timers, DetailMessage::RevertLabel { target, generation });
                })
            });
        }
        None => {}
    }
}

/// Copy button under the click, if any
fn copy_target_of(ev: &MouseEvent) -> Option<CopyTarget> {
    let element = ev.target()?.dyn_into::<Element>().ok()?;
    let prompt_selector = format!("#{PROMPT_BUTTON_ID}");
    if element.closest(&prompt_selector).ok().flatten().is_some() {
        return Some(CopyTarget::Prompt);
    }
    let button = element.closest("[data-adjustment]").ok().flatten()?;
    button
        .get_attribute("data-adjustment")?
        .parse()
        .ok()
        .map(CopyTarget::Adjustment)
}

fn button_element(target: CopyTarget) -> Option<Element> {
    let document = web_sys::window()?.document()?;
    match target {
        CopyTarget::Prompt => document.get_element_by_id(PROMPT_BUTTON_ID),
        CopyTarget::Adjustment(index) => document
            .query_selector(&format!("[data-adjustment=\"{index}\"]"))
            .ok()
            .flatten(),
    }
}

fn set_button_label(target: CopyTarget, label: &str) {
    if let Some(button) = button_element(target) {
        button.set_text_content(Some(label));
    }
}
