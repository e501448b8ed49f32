//! tmdb-films-web - Web frontend for TMDB Films using Leptos

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod config;
pub mod pages;

pub use app::App;
pub use config::load_header_config;
