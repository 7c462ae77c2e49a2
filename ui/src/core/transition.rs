//! Cosmetic entrance animations for the navbar.
//!
//! Implementations only hand out class names; the keyframes live in
//! `assets/styling/navbar.css`. Nothing behavioural depends on them.

use std::rc::Rc;

pub trait Transition {
    /// Class applied to the header on mount.
    fn header_class(&self) -> &'static str;
    /// Class applied to the mobile panel each time it opens.
    fn panel_class(&self) -> &'static str;
}

/// Spring slide-down header and fade-down mobile panel.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpringTransition;

impl Transition for SpringTransition {
    fn header_class(&self) -> &'static str {
        "navbar--spring-in"
    }

    fn panel_class(&self) -> &'static str {
        "navbar__mobile--fade-in"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoTransition;

impl Transition for NoTransition {
    fn header_class(&self) -> &'static str {
        ""
    }

    fn panel_class(&self) -> &'static str {
        ""
    }
}

/// Context value a platform can provide to swap the navbar animation.
pub type SharedTransition = Rc<dyn Transition>;

pub fn default_transition() -> SharedTransition {
    Rc::new(SpringTransition)
}
