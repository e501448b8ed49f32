//! Route table for the content region
//!
//! Four exact-match routes, no fallback. An unmatched path resolves to `None`
//! and the content region stays empty.

use serde::{Deserialize, Serialize};

/// Page-level views mounted under the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Search,
    Home,
    Movies,
    TvSeries,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Search => "Search",
            Page::Home => "Home",
            Page::Movies => "Movies",
            Page::TvSeries => "TV Series",
        }
    }
}

/// A single `(pattern, page)` declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub pattern: &'static str,
    pub page: Page,
}

/// Declared routes, in matching order
pub const ROUTE_TABLE: [Route; 4] = [
    Route {
        pattern: "/",
        page: Page::Search,
    },
    Route {
        pattern: "/home",
        page: Page::Home,
    },
    Route {
        pattern: "/movies",
        page: Page::Movies,
    },
    Route {
        pattern: "/tv-series",
        page: Page::TvSeries,
    },
];

/// Resolve a location to the page it mounts
///
/// Query string and fragment are ignored, as is a single trailing slash.
pub fn resolve(location: &str) -> Option<Page> {
    let path = normalize(location);
    ROUTE_TABLE
        .iter()
        .find(|route| route.pattern == path)
        .map(|route| route.page)
}

fn normalize(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ if path.is_empty() => "/",
        _ => path,
    }
}
