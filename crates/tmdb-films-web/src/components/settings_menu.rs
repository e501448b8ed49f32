//! User settings popover

use leptos::prelude::*;
use tmdb_films_core::{
    AnchorRect, HeaderEvent, HeaderState, Positioner, SettingsItem, TopRightPositioner,
};

use super::header::{dispatch, HeaderSignal};

/// Rendered width of `.settings-menu`, in px (kept in sync with main.css)
pub(crate) const MENU_WIDTH: f64 = 160.0;

/// Inline placement for the popover, empty while no anchor is held
///
/// The anchor is measured in the page's own document, so `viewport_width`
/// must come from that same window.
pub(crate) fn menu_style(
    state: &HeaderState<AnchorRect>,
    positioner: &impl Positioner,
    viewport_width: f64,
) -> String {
    state
        .menu
        .anchor()
        .map(|anchor| {
            positioner
                .place(anchor, MENU_WIDTH, viewport_width)
                .to_style()
        })
        .unwrap_or_default()
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}

/// Popover anchored to the avatar trigger
///
/// Mounted only while the header state holds an anchor. Items carry no
/// action of their own: picking one just closes the menu.
#[component]
pub fn SettingsMenu(
    state: HeaderSignal,
    /// Gap between the avatar and the popover, in px
    offset_y: f64,
) -> impl IntoView {
    let positioner = TopRightPositioner { offset_y };
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open()));

    let style = move || {
        let width = viewport_width();
        state.with(|s| menu_style(s, &positioner, width))
    };

    view! {
        <Show when=move || menu_open.get()>
            <div
                class="menu-backdrop"
                on:click=move |_| {
                    dispatch(state, HeaderEvent::MenuDismissed);
                }
            ></div>
            <ul id="menu-appbar" class="settings-menu" role="menu" style=style>
                {SettingsItem::ALL
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li
                                class="settings-menu-item"
                                role="menuitem"
                                on:click=move |_| {
                                    dispatch(state, HeaderEvent::SettingsItemSelected(item));
                                }
                            >
                                {item.label()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Show>
    }
}
