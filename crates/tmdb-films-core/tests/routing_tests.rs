//! Integration tests for the route table

use std::collections::HashSet;

use tmdb_films_core::{resolve, NavItem, Page, ROUTE_TABLE};

#[test]
fn test_declared_routes_resolve() {
    assert_eq!(resolve("/"), Some(Page::Search));
    assert_eq!(resolve("/home"), Some(Page::Home));
    assert_eq!(resolve("/movies"), Some(Page::Movies));
    assert_eq!(resolve("/tv-series"), Some(Page::TvSeries));
}

#[test]
fn test_unmatched_paths_render_nothing() {
    for path in ["/unknown", "/movies/42", "/home/extra", "/tv", "/Search", "home"] {
        assert_eq!(resolve(path), None, "{path} should not match");
    }
}

#[test]
fn test_trailing_slash_and_query() {
    assert_eq!(resolve("/movies/"), Some(Page::Movies));
    assert_eq!(resolve("/tv-series?page=3"), Some(Page::TvSeries));
    assert_eq!(resolve("/?query=alien"), Some(Page::Search));
}

#[test]
fn test_every_nav_item_has_a_route() {
    for item in NavItem::ALL {
        assert!(
            resolve(item.path()).is_some(),
            "{} has no route",
            item.path()
        );
    }
}

#[test]
fn test_each_page_declared_once() {
    let pages: Vec<Page> = ROUTE_TABLE.iter().map(|r| r.page).collect();
    let distinct: HashSet<Page> = pages.iter().copied().collect();
    assert_eq!(distinct.len(), ROUTE_TABLE.len());
    assert_eq!(
        pages,
        vec![Page::Search, Page::Home, Page::Movies, Page::TvSeries]
    );
}
