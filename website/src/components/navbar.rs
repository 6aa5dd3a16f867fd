use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="topbar">
            <div class="container row-between">
                <A href="/" attr:class="brand">
                    "Principal AI Toolkit"
                </A>
                <nav>
                    <A href="/" attr:class="nav-link">"All tools"</A>
                </nav>
            </div>
        </header>
    }
}
