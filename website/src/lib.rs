pub mod clipboard;
pub mod components;
pub mod data;
pub mod logging;
pub mod pages;
pub mod timers;

use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::catalog::CatalogPage;
use pages::tool::ToolPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <ScrollToTop />
            <div class="page">
                <Navbar />
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=CatalogPage />
                    <Route path=path!("/tool") view=ToolPage />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        let _ = location.search.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}
