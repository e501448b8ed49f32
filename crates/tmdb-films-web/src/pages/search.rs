//! Search page component

use leptos::prelude::*;
use tmdb_films_core::Page;

/// Search page - landing route
#[component]
pub fn Search() -> impl IntoView {
    view! {
        <div class="page page-search">
            <h2>{Page::Search.title()}</h2>
            <div class="page-content">
                <p class="hint">"Find films and series by title."</p>
            </div>
        </div>
    }
}
