//! Temporary navigation drawer for narrow viewports

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use tmdb_films_core::{HeaderEvent, NavItem};

use super::header::{dispatch, HeaderSignal, HostWindow};

/// Slide-in drawer listing the navigation items
///
/// Stays mounted while closed so opening it does not rebuild the list.
/// Selecting an entry navigates, then closes the drawer.
#[component]
pub fn NavDrawer(
    state: HeaderSignal,
    brand_title: String,
    window: Option<HostWindow>,
) -> impl IntoView {
    let drawer_open = Memo::new(move |_| state.with(|s| s.drawer_open()));
    let container = window
        .map(|host| host())
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .map(web_sys::Element::from);

    view! {
        <DrawerHost container>
            <div
                class="nav-drawer"
                class:nav-drawer-open=move || drawer_open.get()
                aria-hidden=move || (!drawer_open.get()).to_string()
            >
                <div
                    class="nav-drawer-backdrop"
                    on:click=move |_| {
                        dispatch(state, HeaderEvent::DrawerDismissed);
                    }
                ></div>
                <aside class="nav-drawer-panel">
                    <DrawerLinks state brand_title=brand_title.clone() />
                </aside>
            </div>
        </DrawerHost>
    }
}

/// Brand link, divider and item list inside the drawer panel
#[component]
fn DrawerLinks(state: HeaderSignal, brand_title: String) -> impl IntoView {
    let navigate = use_navigate();

    let go_home = {
        let navigate = navigate.clone();
        move |e: web_sys::MouseEvent| {
            e.prevent_default();
            if let Some(target) = dispatch(state, HeaderEvent::DrawerBrandSelected) {
                navigate(target.path(), Default::default());
            }
        }
    };

    view! {
        <h6 class="nav-drawer-brand">
            <a href="/" class="nav-drawer-brand-link" on:click=go_home>
                {brand_title}
            </a>
        </h6>
        <hr class="divider" />
        <ul class="nav-drawer-list">
            {NavItem::ALL
                .into_iter()
                .map(|item| {
                    let navigate = navigate.clone();
                    view! {
                        <li class="nav-drawer-item">
                            <button
                                class="nav-drawer-link"
                                on:click=move |_| {
                                    if let Some(target) = dispatch(
                                        state,
                                        HeaderEvent::DrawerItemSelected(item),
                                    ) {
                                        navigate(target.path(), Default::default());
                                    }
                                }
                            >
                                {item.slug()}
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Mounts the drawer into `container` when one is supplied
#[cfg(target_arch = "wasm32")]
#[component]
fn DrawerHost(container: Option<web_sys::Element>, children: ChildrenFn) -> impl IntoView {
    use leptos::portal::Portal;

    match container {
        Some(mount) => view! { <Portal mount>{children()}</Portal> }.into_any(),
        None => children().into_any(),
    }
}

// Portals need a live DOM; off-browser builds render in place
#[cfg(not(target_arch = "wasm32"))]
#[component]
fn DrawerHost(container: Option<web_sys::Element>, children: ChildrenFn) -> impl IntoView {
    let _ = container;
    children()
}
