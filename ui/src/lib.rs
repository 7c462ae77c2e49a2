//! Shared UI crate for the VR Tech Solutions site: navigation model, the
//! site header and the page views. Platform crates own the router.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    mod app_navbar;
    mod nav_link;

    pub use app_navbar::AppNavbar;
    pub use nav_link::NavLink;
}
