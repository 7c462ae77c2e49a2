//! Headless navbar model.
//!
//! [`render`] turns (entries, menu state, current route) into a [`NavbarView`]
//! that the Dioxus component maps onto markup one-to-one, and [`activate`]
//! applies a link click: route change first, then closing the menu when the
//! click came from the mobile panel. Keeping both pure lets the interaction
//! be tested without a renderer or a router.

use super::entries::{NavigationEntry, BRAND_PATH};
use super::menu::MenuState;
use super::navigator::{NavigationError, Navigator};

/// Where a link was activated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOrigin {
    Brand,
    Desktop,
    MobilePanel,
}

/// One rendered link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkView {
    pub entry: NavigationEntry,
    pub active: bool,
}

impl LinkView {
    pub fn class(&self) -> &'static str {
        if self.active {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarView {
    pub brand_path: &'static str,
    /// Desktop row; always rendered, hidden on narrow screens by CSS.
    pub desktop_links: Vec<LinkView>,
    pub menu: MenuState,
    /// Present only while the menu is open.
    pub mobile_links: Option<Vec<LinkView>>,
}

pub fn render(entries: &[NavigationEntry], menu: MenuState, current_route: &str) -> NavbarView {
    let links: Vec<LinkView> = entries
        .iter()
        .map(|entry| LinkView {
            entry: *entry,
            active: entry.is_active(current_route),
        })
        .collect();

    NavbarView {
        brand_path: BRAND_PATH,
        mobile_links: menu.is_open().then(|| links.clone()),
        desktop_links: links,
        menu,
    }
}

/// Applies a click on `path`.
///
/// The route change is always requested, even when `path` is already the
/// current route (the router treats it as a no-op). `close_menu` runs only
/// for a mobile-panel click, after the request, whether or not the router
/// accepted the navigation.
pub fn activate<N, F>(
    path: &str,
    origin: LinkOrigin,
    navigator: &N,
    close_menu: F,
) -> Result<(), NavigationError>
where
    N: Navigator + ?Sized,
    F: FnOnce(),
{
    if navigator.current_path() == path {
        tracing::debug!(path, "re-activating current route");
    }

    let result = navigator.navigate_to(path);

    if origin == LinkOrigin::MobilePanel {
        close_menu();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entries::NAV_ENTRIES;
    use std::cell::RefCell;

    struct Recording {
        current: String,
        pushed: RefCell<Vec<String>>,
        refuse: bool,
    }

    impl Recording {
        fn at(current: &str) -> Self {
            Self {
                current: current.into(),
                pushed: RefCell::new(Vec::new()),
                refuse: false,
            }
        }
    }

    impl Navigator for Recording {
        fn current_path(&self) -> String {
            self.current.clone()
        }

        fn navigate_to(&self, path: &str) -> Result<(), NavigationError> {
            self.pushed.borrow_mut().push(path.to_string());
            if self.refuse {
                Err(NavigationError::External { path: path.into() })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn closed_menu_has_no_mobile_panel() {
        let view = render(&NAV_ENTRIES, MenuState::Closed, "/");
        assert!(view.mobile_links.is_none());
        assert_eq!(view.desktop_links.len(), 3);
    }

    #[test]
    fn open_menu_mirrors_desktop_links() {
        let view = render(&NAV_ENTRIES, MenuState::Open, "/contact");
        assert_eq!(view.mobile_links.as_ref(), Some(&view.desktop_links));
    }

    #[test]
    fn active_link_gets_modifier_class() {
        let view = render(&NAV_ENTRIES, MenuState::Closed, "/");
        let home = view.desktop_links[0];
        let services = view.desktop_links[1];
        assert_eq!(home.class(), "navbar__link navbar__link--active");
        assert_eq!(services.class(), "navbar__link");
    }

    #[test]
    fn close_callback_runs_only_for_mobile_panel() {
        let nav = Recording::at("/");
        let mut closes = 0;
        for origin in [LinkOrigin::Brand, LinkOrigin::Desktop, LinkOrigin::MobilePanel] {
            activate("/services", origin, &nav, || closes += 1).unwrap();
        }
        assert_eq!(closes, 1);
        assert_eq!(nav.pushed.borrow().len(), 3);
    }

    #[test]
    fn desktop_click_navigates_without_touching_menu() {
        let nav = Recording::at("/");
        let mut menu = MenuState::Open;
        activate("/services", LinkOrigin::Desktop, &nav, || menu.close()).unwrap();
        assert_eq!(*nav.pushed.borrow(), ["/services"]);
        assert_eq!(menu, MenuState::Open);
    }

    #[test]
    fn mobile_click_on_current_route_still_navigates_and_closes() {
        let nav = Recording::at("/contact");
        let mut menu = MenuState::Open;
        activate("/contact", LinkOrigin::MobilePanel, &nav, || menu.close()).unwrap();
        assert_eq!(*nav.pushed.borrow(), ["/contact"]);
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn refused_navigation_still_closes_menu() {
        let nav = Recording {
            refuse: true,
            ..Recording::at("/")
        };
        let mut menu = MenuState::Open;
        let err = activate("/contact", LinkOrigin::MobilePanel, &nav, || menu.close()).unwrap_err();
        assert_eq!(
            err,
            NavigationError::External {
                path: "/contact".into()
            }
        );
        assert_eq!(menu, MenuState::Closed);
    }
}
