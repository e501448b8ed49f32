//! Header configuration
//!
//! Branding, avatar and layout tokens. Every field has a default, so a partial
//! JSON document only overrides what it names.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Tunable values for the navigation header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderConfig {
    /// Text of the brand link in the app bar and drawer
    pub brand_title: String,
    /// Width of the temporary drawer panel, in px
    pub drawer_width: u32,
    /// Viewport width at which the inline nav replaces the drawer trigger, in px
    pub sm_breakpoint: u32,
    /// Vertical gap between the avatar and the settings popover, in px
    pub menu_offset_y: f64,
    pub avatar_alt: String,
    pub avatar_src: String,
    /// Tooltip on the avatar trigger
    pub settings_tooltip: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            brand_title: "TMDB Films".to_string(),
            drawer_width: 240,
            sm_breakpoint: 600,
            menu_offset_y: 45.0,
            avatar_alt: "Remy Sharp".to_string(),
            avatar_src: "/static/images/avatar/2.jpg".to_string(),
            settings_tooltip: "Open settings".to_string(),
        }
    }
}

impl HeaderConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: HeaderConfig =
            serde_json::from_str(content).map_err(|source| CoreError::ConfigParse {
                message: source.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.brand_title.trim().is_empty() {
            return Err(CoreError::InvalidConfig {
                field: "brandTitle",
                reason: "must not be empty".to_string(),
            });
        }
        if self.drawer_width == 0 {
            return Err(CoreError::InvalidConfig {
                field: "drawerWidth",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.sm_breakpoint == 0 {
            return Err(CoreError::InvalidConfig {
                field: "smBreakpoint",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !self.menu_offset_y.is_finite() || self.menu_offset_y < 0.0 {
            return Err(CoreError::InvalidConfig {
                field: "menuOffsetY",
                reason: format!("expected a non-negative number, got {}", self.menu_offset_y),
            });
        }
        Ok(())
    }
}
