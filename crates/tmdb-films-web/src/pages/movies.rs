//! Movies page component

use leptos::prelude::*;
use tmdb_films_core::Page;

/// Movies page - film catalogue
#[component]
pub fn Movies() -> impl IntoView {
    view! {
        <div class="page page-movies">
            <h2>{Page::Movies.title()}</h2>
            <div class="page-content">
                <p class="hint">"Browse films by genre and popularity."</p>
            </div>
        </div>
    }
}
