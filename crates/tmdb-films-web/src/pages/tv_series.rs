//! TV series page component

use leptos::prelude::*;
use tmdb_films_core::Page;

#[component]
pub fn TvSeries() -> impl IntoView {
    view! {
        <div class="page page-tv-series">
            <h2>{Page::TvSeries.title()}</h2>
            <div class="page-content">
                <p class="hint">"Browse series by genre and popularity."</p>
            </div>
        </div>
    }
}
