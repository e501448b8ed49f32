//! Static navigation data
//!
//! The header renders two fixed lists: navigation items (inline buttons and
//! drawer entries) and settings items (avatar popover). Both are read-only and
//! keep their declaration order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level sections reachable from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavItem {
    Home,
    Movies,
    TvSeries,
}

impl NavItem {
    /// All navigation items, in display order
    pub const ALL: [NavItem; 3] = [NavItem::Home, NavItem::Movies, NavItem::TvSeries];

    /// Label shown on buttons and list entries (styled capitalized by CSS)
    pub fn slug(&self) -> &'static str {
        match self {
            NavItem::Home => "home",
            NavItem::Movies => "movies",
            NavItem::TvSeries => "tv-series",
        }
    }

    /// Absolute path the drawer entry navigates to
    pub fn path(&self) -> &'static str {
        match self {
            NavItem::Home => "/home",
            NavItem::Movies => "/movies",
            NavItem::TvSeries => "/tv-series",
        }
    }
}

impl fmt::Display for NavItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Entries of the user settings popover
///
/// Selecting one only dismisses the popover; no action is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingsItem {
    Profile,
    Account,
    Dashboard,
}

impl SettingsItem {
    /// All settings items, in display order
    pub const ALL: [SettingsItem; 3] = [
        SettingsItem::Profile,
        SettingsItem::Account,
        SettingsItem::Dashboard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsItem::Profile => "Profile",
            SettingsItem::Account => "Account",
            SettingsItem::Dashboard => "Dashboard",
        }
    }
}

impl fmt::Display for SettingsItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_fixed_order() {
        let slugs: Vec<_> = NavItem::ALL.iter().map(|i| i.slug()).collect();
        assert_eq!(slugs, vec!["home", "movies", "tv-series"]);
    }

    #[test]
    fn test_settings_items_fixed_order() {
        let labels: Vec<_> = SettingsItem::ALL.iter().map(|i| i.label()).collect();
        assert_eq!(labels, vec!["Profile", "Account", "Dashboard"]);
    }

    #[test]
    fn test_nav_item_paths_are_absolute() {
        for item in NavItem::ALL {
            assert_eq!(item.path(), format!("/{}", item.slug()));
        }
    }

    #[test]
    fn test_nav_item_serde_uses_slug() {
        let json = serde_json::to_string(&NavItem::TvSeries).unwrap();
        assert_eq!(json, "\"tv-series\"");
    }
}
