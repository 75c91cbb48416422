pub mod components;
pub mod pages;
pub mod services;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::{EventsPage, FilterPage, LogoutPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Eventboard"/>
        <Meta name="description" content="Find events, vote on them and grab a ticket"/>

        <Router>
            <nav class="nav">
                <a href="/" class="nav__brand">"Eventboard"</a>
                <a href="/events/filter" class="nav__link">"Filter"</a>
                <a href="/logout" class="nav__link" rel="external">"Log out"</a>
            </nav>
            <main class="container">
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=EventsPage/>
                    <Route path=path!("/events/filter") view=FilterPage/>
                    <Route path=path!("/logout") view=LogoutPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
