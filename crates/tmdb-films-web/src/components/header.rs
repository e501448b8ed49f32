//! Header component
//!
//! Fixed app bar with brand link, inline navigation, drawer trigger and the
//! avatar that opens the settings popover. Also hosts the content region
//! where the routed page is mounted.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};
use tmdb_films_core::{
    resolve, responsive_css, AnchorRect, HeaderConfig, HeaderEvent, HeaderState, NavItem,
    NavTarget,
};
use tracing::warn;

use super::{NavDrawer, SettingsMenu};
use crate::pages::page_view;

/// Reactive header state shared with the overlay components
pub type HeaderSignal = RwSignal<HeaderState<AnchorRect>>;

/// Supplies an alternate window (for example an iframe host) to portal into
pub type HostWindow = fn() -> web_sys::Window;

/// Apply `event` to the header state, returning any requested navigation
pub(crate) fn dispatch(state: HeaderSignal, event: HeaderEvent<AnchorRect>) -> Option<NavTarget> {
    state.try_update(|s| s.handle(event)).flatten()
}

/// Navigation header with responsive drawer and settings popover
#[component]
pub fn Header(
    /// Branding, avatar and layout tokens
    #[prop(optional)]
    config: HeaderConfig,
    /// Alternate window whose body hosts the drawer
    #[prop(optional)]
    window: Option<HostWindow>,
) -> impl IntoView {
    let state: HeaderSignal = RwSignal::new(HeaderState::new());
    let drawer_open = Memo::new(move |_| state.with(|s| s.drawer_open()));
    let avatar_ref = NodeRef::<leptos::html::Button>::new();

    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            dispatch(state, HeaderEvent::EscapePressed);
        }
    });
    on_cleanup(move || escape.remove());

    let open_menu = move |_| {
        let anchor = match avatar_ref.get_untracked() {
            Some(button) => measure(&button),
            None => {
                warn!("Avatar trigger not mounted, anchoring settings menu at origin");
                AnchorRect::default()
            }
        };
        dispatch(state, HeaderEvent::AvatarClicked(anchor));
    };

    let css = responsive_css(&config);
    let brand = config.brand_title.clone();

    view! {
        <div class="main-header">
            <style>{css}</style>
            <header class="app-bar">
                <nav class="toolbar">
                    <button
                        class="header-drawer-trigger icon-button"
                        aria-label="open drawer"
                        aria-expanded=move || drawer_open.get().to_string()
                        on:click=move |_| {
                            dispatch(state, HeaderEvent::DrawerTriggerClicked);
                        }
                    >
                        <span class="hamburger-icon">"☰"</span>
                    </button>

                    <div class="header-brand">
                        <A href="/" attr:class="main__link">
                            {brand}
                        </A>
                    </div>

                    <div class="header-inline-nav">
                        {NavItem::ALL
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <button
                                        class="inline-nav-button"
                                        on:click=move |_| {
                                            dispatch(state, HeaderEvent::InlineItemSelected(item));
                                        }
                                    >
                                        {item.slug()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="header-user">
                        <button
                            node_ref=avatar_ref
                            class="avatar-trigger"
                            title=config.settings_tooltip.clone()
                            aria-haspopup="true"
                            aria-controls="menu-appbar"
                            on:click=open_menu
                        >
                            <img
                                class="avatar"
                                alt=config.avatar_alt.clone()
                                src=config.avatar_src.clone()
                            />
                        </button>
                        <SettingsMenu state offset_y=config.menu_offset_y />
                    </div>
                </nav>
            </header>

            <NavDrawer state brand_title=config.brand_title.clone() window />

            <main class="content">
                <div class="toolbar-spacer"></div>
                <ContentRegion />
            </main>
        </div>
    }
}

/// Page for the current location, looked up in the core route table
///
/// No fallback: unmatched paths leave the region empty.
#[component]
fn ContentRegion() -> impl IntoView {
    let location = use_location();
    move || location.pathname.with(|path| resolve(path)).map(page_view)
}

fn measure(element: &web_sys::Element) -> AnchorRect {
    let rect = element.get_bounding_client_rect();
    AnchorRect::new(rect.top(), rect.left(), rect.width(), rect.height())
}
