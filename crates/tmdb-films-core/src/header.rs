//! Header state machine
//!
//! Owns the drawer disclosure and the settings popover anchor for one header
//! instance. Every user interaction is a [`HeaderEvent`]; handling one is a
//! total, synchronous function of `(state, event)` that may ask the caller to
//! navigate.

use crate::disclosure::Disclosure;
use crate::menu_anchor::MenuAnchor;
use crate::nav::{NavItem, SettingsItem};
use tracing::debug;

/// User interactions the header reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderEvent<A> {
    /// Hamburger icon in the app bar
    DrawerTriggerClicked,
    /// Backdrop click or drawer close request
    DrawerDismissed,
    /// Entry in the drawer list
    DrawerItemSelected(NavItem),
    /// Brand link inside the drawer
    DrawerBrandSelected,
    /// Button in the wide-viewport inline row
    InlineItemSelected(NavItem),
    /// Avatar trigger, carrying the element it anchors to
    AvatarClicked(A),
    /// Click outside the popover
    MenuDismissed,
    SettingsItemSelected(SettingsItem),
    EscapePressed,
}

/// Location the caller should navigate to after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTarget(pub &'static str);

impl NavTarget {
    pub fn path(&self) -> &'static str {
        self.0
    }
}

/// Transient UI state of one navigation header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState<A> {
    pub drawer: Disclosure,
    pub menu: MenuAnchor<A>,
}

impl<A> Default for HeaderState<A> {
    fn default() -> Self {
        Self {
            drawer: Disclosure::new(),
            menu: MenuAnchor::new(),
        }
    }
}

impl<A> HeaderState<A> {
    /// Drawer closed, popover closed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer.is_open()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn handle(&mut self, event: HeaderEvent<A>) -> Option<NavTarget> {
        match event {
            HeaderEvent::DrawerTriggerClicked => {
                self.drawer.toggle();
                debug!(open = self.drawer.is_open(), "Drawer toggled");
                None
            }
            HeaderEvent::DrawerDismissed => {
                self.drawer.close();
                debug!("Drawer dismissed");
                None
            }
            HeaderEvent::DrawerItemSelected(item) => {
                let target = NavTarget(item.path());
                self.drawer.close();
                debug!(item = %item, path = target.path(), "Drawer item selected");
                Some(target)
            }
            HeaderEvent::DrawerBrandSelected => {
                let target = NavTarget("/");
                self.drawer.close();
                debug!("Drawer brand selected");
                Some(target)
            }
            HeaderEvent::InlineItemSelected(item) => {
                // Inline buttons are not wired to the router
                debug!(item = %item, "Inline nav item clicked");
                None
            }
            HeaderEvent::AvatarClicked(anchor) => {
                self.menu.open(anchor);
                debug!("Settings menu opened");
                None
            }
            HeaderEvent::MenuDismissed => {
                self.menu.close();
                debug!("Settings menu dismissed");
                None
            }
            HeaderEvent::SettingsItemSelected(item) => {
                self.menu.close();
                debug!(item = %item, "Settings item selected");
                None
            }
            HeaderEvent::EscapePressed => {
                if self.menu.is_open() {
                    self.menu.close();
                    debug!("Settings menu closed by Escape");
                } else if self.drawer.is_open() {
                    self.drawer.close();
                    debug!("Drawer closed by Escape");
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = HeaderState<&'static str>;

    #[test]
    fn test_initial_state() {
        let state = State::new();
        assert!(!state.drawer_open());
        assert!(!state.menu_open());
    }

    #[test]
    fn test_trigger_toggles_drawer() {
        let mut state = State::new();
        assert_eq!(state.handle(HeaderEvent::DrawerTriggerClicked), None);
        assert!(state.drawer_open());
        state.handle(HeaderEvent::DrawerTriggerClicked);
        assert!(!state.drawer_open());
    }

    #[test]
    fn test_drawer_item_navigates_then_closes() {
        let mut state = State::new();
        state.handle(HeaderEvent::DrawerTriggerClicked);

        let target = state.handle(HeaderEvent::DrawerItemSelected(NavItem::Movies));
        assert_eq!(target, Some(NavTarget("/movies")));
        assert!(!state.drawer_open());
    }

    #[test]
    fn test_drawer_brand_goes_home() {
        let mut state = State::new();
        state.handle(HeaderEvent::DrawerTriggerClicked);

        let target = state.handle(HeaderEvent::DrawerBrandSelected);
        assert_eq!(target.map(|t| t.path()), Some("/"));
        assert!(!state.drawer_open());
    }

    #[test]
    fn test_inline_item_is_inert() {
        let mut state = State::new();
        state.handle(HeaderEvent::AvatarClicked("avatar"));
        let before = state;

        for item in NavItem::ALL {
            assert_eq!(state.handle(HeaderEvent::InlineItemSelected(item)), None);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_settings_item_closes_menu() {
        for item in SettingsItem::ALL {
            let mut state = State::new();
            state.handle(HeaderEvent::AvatarClicked("avatar"));
            assert!(state.menu_open());

            assert_eq!(state.handle(HeaderEvent::SettingsItemSelected(item)), None);
            assert!(!state.menu_open());
        }
    }

    #[test]
    fn test_escape_closes_menu_before_drawer() {
        let mut state = State::new();
        state.handle(HeaderEvent::DrawerTriggerClicked);
        state.handle(HeaderEvent::AvatarClicked("avatar"));

        state.handle(HeaderEvent::EscapePressed);
        assert!(!state.menu_open());
        assert!(state.drawer_open());

        state.handle(HeaderEvent::EscapePressed);
        assert!(!state.drawer_open());

        // Nothing left to close
        state.handle(HeaderEvent::EscapePressed);
        assert_eq!(state, State::new());
    }

    #[test]
    fn test_controllers_are_independent() {
        let mut state = State::new();
        state.handle(HeaderEvent::AvatarClicked("avatar"));
        state.handle(HeaderEvent::DrawerTriggerClicked);
        state.handle(HeaderEvent::DrawerDismissed);
        assert!(state.menu_open());

        state.handle(HeaderEvent::DrawerTriggerClicked);
        state.handle(HeaderEvent::MenuDismissed);
        assert!(state.drawer_open());
    }
}
