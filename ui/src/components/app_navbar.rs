use dioxus::prelude::*;

use crate::core::navbar::{self, NavbarView};
use crate::core::{
    activate, default_transition, LinkOrigin, MenuState, RouterNavigator, SharedTransition, NAV_ENTRIES,
};
use crate::i18n::{self, nav_label};
use crate::t;

use super::nav_link::NavLink;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const LOGO: Asset = asset!("/assets/logo.svg");

/// Fixed site header: brand, desktop links and the mobile menu.
///
/// The platform shell mounts this from its router layout and passes the
/// current route as a string, so `ui` stays independent of each platform's
/// `Route` enum:
///
/// ```ignore
/// #[component]
/// fn WebNavbar() -> Element {
///     let route = use_route::<Route>();
///     rsx! {
///         AppNavbar { current_path: route.to_string() }
///         Outlet::<Route> {}
///     }
/// }
/// ```
///
/// The entrance animation comes from a [`SharedTransition`] context when one
/// is provided, [`crate::core::SpringTransition`] otherwise.
#[component]
pub fn AppNavbar(current_path: String) -> Element {
    i18n::init();

    let mut menu = use_signal(MenuState::default);
    let transition = try_use_context::<SharedTransition>().unwrap_or_else(default_transition);
    let navigator = RouterNavigator::new(use_navigator(), current_path.clone());

    // A route change from anywhere (links, brand, history) closes the panel.
    let mut last_route = use_signal(|| current_path.clone());
    use_effect(use_reactive((&current_path,), move |(path,)| {
        let previous = last_route.peek().clone();
        let mut state = *menu.peek();
        if state.route_changed(&previous, &path) {
            menu.set(state);
        }
        if previous != path {
            last_route.set(path);
        }
    }));

    let on_activate = move |path: &'static str, origin: LinkOrigin| {
        let navigator = navigator.clone();
        move |_: ()| {
            let mut menu = menu;
            if let Err(err) = activate(path, origin, &navigator, || menu.write().close()) {
                tracing::warn!(%err, ?origin, "navigation request failed");
            }
        }
    };

    let NavbarView {
        brand_path,
        desktop_links,
        menu: menu_state,
        mobile_links,
    } = navbar::render(&NAV_ENTRIES, menu(), &current_path);

    tracing::debug!(route = %current_path, open = menu_state.is_open(), "AppNavbar render");

    let header_class = transition.header_class();
    let panel_class = transition.panel_class();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar {header_class}",
            div { class: "navbar__inner",
                NavLink {
                    href: brand_path,
                    class: "navbar__brand",
                    onactivate: on_activate(brand_path, LinkOrigin::Brand),
                    img { class: "navbar__logo", src: LOGO, alt: t!("brand-logo-alt") }
                    span { class: "navbar__brand-name", {t!("brand-name")} }
                }

                nav { class: "navbar__links",
                    for link in desktop_links {
                        NavLink {
                            key: "{link.entry.path}",
                            href: link.entry.path,
                            class: link.class().to_string(),
                            active: link.active,
                            onactivate: on_activate(link.entry.path, LinkOrigin::Desktop),
                            {nav_label(link.entry.label)}
                        }
                    }
                }

                div { class: "navbar__toggle-wrap",
                    button {
                        r#type: "button",
                        class: "navbar__toggle",
                        aria_controls: "mobile-menu",
                        aria_expanded: menu_state.aria_expanded(),
                        onclick: move |_| menu.write().toggle(),
                        span { class: "visually-hidden", {t!("nav-open-menu")} }
                        MenuIcon {}
                    }
                }
            }

            if let Some(links) = mobile_links {
                div { id: "mobile-menu", class: "navbar__mobile {panel_class}",
                    div { class: "navbar__mobile-links",
                        for link in links {
                            NavLink {
                                key: "{link.entry.path}",
                                href: link.entry.path,
                                class: link.class().to_string(),
                                active: link.active,
                                onactivate: on_activate(link.entry.path, LinkOrigin::MobilePanel),
                                {nav_label(link.entry.label)}
                            }
                        }
                    }
                }
            }
        }

        // Keeps page content clear of the fixed header.
        div { class: "navbar-spacer", aria_hidden: "true" }
    }
}

#[component]
fn MenuIcon() -> Element {
    rsx! {
        svg {
            class: "navbar__toggle-icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path { stroke_linecap: "round", d: "M4 6h16M4 12h16M4 18h16" }
        }
    }
}
