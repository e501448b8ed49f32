//! Breakpoint tokens and the responsive visibility rules built on them
//!
//! Below the `sm` breakpoint the header shows a drawer trigger; at or above it
//! the inline navigation row. The rules are emitted as CSS so the browser
//! applies them without any state.

use crate::config::HeaderConfig;

/// Viewport width thresholds, in px
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub sm: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self { sm: 600 }
    }
}

impl From<&HeaderConfig> for Breakpoints {
    fn from(config: &HeaderConfig) -> Self {
        Self {
            sm: config.sm_breakpoint,
        }
    }
}

/// Header presentation for a range of viewport widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Drawer trigger, no inline links
    Compact,
    /// Inline links, no drawer
    Wide,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Compact, Layout::Wide];

    /// Header parts that must not show in this layout
    pub fn hidden_selectors(&self) -> &'static str {
        match self {
            Layout::Compact => ".header-inline-nav, .header-brand",
            Layout::Wide => ".header-drawer-trigger, .nav-drawer",
        }
    }
}

impl Breakpoints {
    /// Media condition selecting `layout`
    ///
    /// The two conditions never overlap and leave no gap between them.
    pub fn media_query(&self, layout: Layout) -> String {
        match layout {
            Layout::Compact => format!("(max-width: {}px)", self.sm.saturating_sub(1)),
            Layout::Wide => format!("(min-width: {}px)", self.sm),
        }
    }
}

/// Media rules hiding whichever presentation does not apply
pub fn responsive_css(config: &HeaderConfig) -> String {
    let breakpoints = Breakpoints::from(config);
    let mut css: String = Layout::ALL
        .iter()
        .map(|layout| {
            format!(
                "@media {} {{ {} {{ display: none; }} }}\n",
                breakpoints.media_query(*layout),
                layout.hidden_selectors()
            )
        })
        .collect();
    css.push_str(&format!(
        ".nav-drawer-panel {{ width: {}px; }}\n",
        config.drawer_width
    ));
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_queries_meet_at_breakpoint() {
        let bp = Breakpoints::default();
        assert_eq!(bp.media_query(Layout::Compact), "(max-width: 599px)");
        assert_eq!(bp.media_query(Layout::Wide), "(min-width: 600px)");
    }

    #[test]
    fn test_trigger_and_inline_nav_are_exclusive() {
        let compact = Layout::Compact.hidden_selectors();
        let wide = Layout::Wide.hidden_selectors();
        assert!(compact.contains(".header-inline-nav"));
        assert!(!compact.contains(".header-drawer-trigger"));
        assert!(wide.contains(".header-drawer-trigger"));
        assert!(!wide.contains(".header-inline-nav"));
    }

    #[test]
    fn test_breakpoints_from_config() {
        let config = HeaderConfig {
            sm_breakpoint: 720,
            ..HeaderConfig::default()
        };
        assert_eq!(Breakpoints::from(&config).sm, 720);
    }

    #[test]
    fn test_responsive_css_uses_config() {
        let css = responsive_css(&HeaderConfig::default());
        assert!(css.contains(
            "@media (max-width: 599px) { .header-inline-nav, .header-brand { display: none; } }"
        ));
        assert!(css.contains(
            "@media (min-width: 600px) { .header-drawer-trigger, .nav-drawer { display: none; } }"
        ));
        assert!(css.contains(".nav-drawer-panel { width: 240px; }"));
    }
}
