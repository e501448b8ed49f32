//! tmdb-films-core - Core library for the TMDB Films client
//!
//! Toolkit-independent model of the navigation header: static navigation data,
//! the route table, drawer and popover controllers, and header configuration.

pub mod config;
pub mod disclosure;
pub mod error;
pub mod header;
pub mod menu_anchor;
pub mod nav;
pub mod routes;
pub mod theme;

pub use config::HeaderConfig;
pub use disclosure::Disclosure;
pub use error::{CoreError, Result};
pub use header::{HeaderEvent, HeaderState, NavTarget};
pub use menu_anchor::{AnchorRect, MenuAnchor, Placement, Positioner, TopRightPositioner};
pub use nav::{NavItem, SettingsItem};
pub use routes::{resolve, Page, Route, ROUTE_TABLE};
pub use theme::{responsive_css, Breakpoints, Layout};
