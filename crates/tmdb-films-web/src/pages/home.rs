//! Home page component

use leptos::prelude::*;
use tmdb_films_core::Page;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page page-home">
            <h2>{Page::Home.title()}</h2>
            <div class="page-content">
                <p class="hint">"Trending films and series."</p>
            </div>
        </div>
    }
}
