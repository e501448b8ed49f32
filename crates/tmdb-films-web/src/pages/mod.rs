//! Page components mounted in the content region

mod home;
mod movies;
mod search;
mod tv_series;

pub use home::Home;
pub use movies::Movies;
pub use search::Search;
pub use tv_series::TvSeries;

use leptos::prelude::*;
use tmdb_films_core::Page;

/// View for a page resolved from the route table
pub fn page_view(page: Page) -> AnyView {
    match page {
        Page::Search => view! { <Search /> }.into_any(),
        Page::Home => view! { <Home /> }.into_any(),
        Page::Movies => view! { <Movies /> }.into_any(),
        Page::TvSeries => view! { <TvSeries /> }.into_any(),
    }
}
