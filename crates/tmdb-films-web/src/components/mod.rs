//! Leptos UI components

mod header;
mod nav_drawer;
mod settings_menu;

pub use header::{Header, HeaderSignal, HostWindow};
pub use nav_drawer::NavDrawer;
pub use settings_menu::SettingsMenu;
