//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::components::Router;

use crate::components::Header;
use crate::config::load_header_config;

/// Application shell: supplies the router context the header routes under
#[component]
pub fn App() -> impl IntoView {
    let config = load_header_config();

    view! {
        <Router>
            <div class="app">
                <Header config />
            </div>
        </Router>
    }
}
