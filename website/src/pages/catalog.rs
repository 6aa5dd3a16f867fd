use leptos::prelude::*;
use ptk_app::{update_index, IndexMessage, IndexState};

use crate::data;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let state = RwSignal::new(IndexState::new(data::catalog(), data::links()));
    let options = state.with_untracked(IndexState::category_options);

    let on_query = move |ev| {
        let query = event_target_value(&ev);
        state.update(|s| update_index(s, IndexMessage::QueryChanged(query)));
    };
    let on_category = move |ev| {
        let value = event_target_value(&ev);
        state.update(|s| update_index(s, IndexMessage::CategoryChanged(value)));
    };

    view! {
        <main class="container">
            <section class="hero">
                <h1>"Principal AI Toolkit"</h1>
                <p class="muted">
                    "Ready-to-use prompts for everyday school leadership tasks. Pick a tool, copy the prompt, and adjust the draft."
                </p>
            </section>

            <div class="controls">
                <input
                    id="searchInput"
                    type="search"
                    placeholder="Search tools"
                    aria-label="Search tools"
                    on:input=on_query
                />
                <select
                    id="categorySelect"
                    aria-label="Filter by category"
                    on:change=on_category
                    inner_html=options
                ></select>
            </div>

            <div id="toolGrid" class="grid" inner_html=move || state.with(IndexState::view)></div>
        </main>
    }
}
