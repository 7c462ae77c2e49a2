//! Route-agnostic navigation logic shared by every platform shell.

pub mod entries;
pub mod menu;
pub mod navbar;
pub mod navigator;
pub mod transition;

pub use entries::{is_active, NavigationEntry, BRAND_PATH, NAV_ENTRIES};
pub use menu::MenuState;
pub use navbar::{activate, render, LinkOrigin, LinkView, NavbarView};
pub use navigator::{NavigationError, Navigator, RouterNavigator};
pub use transition::{default_transition, NoTransition, SharedTransition, SpringTransition, Transition};
