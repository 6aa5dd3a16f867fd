use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container small muted">
                <p>
                    "\u{00A9} " <span id="year">{year}</span>
                    " Principal AI Toolkit. Review every draft before you send it."
                </p>
            </div>
        </footer>
    }
}
