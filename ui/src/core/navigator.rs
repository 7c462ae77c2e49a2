//! Router capability used by the navbar.
//!
//! The navbar never talks to a router directly: it asks a [`Navigator`] for
//! the current path and for route changes. [`RouterNavigator`] backs it with
//! the Dioxus router; tests supply a recording implementation.

use dioxus::prelude::Navigator as DioxusNavigator;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("router refused external navigation to `{path}`")]
    External { path: String },
}

pub trait Navigator {
    fn current_path(&self) -> String;

    /// Request a client-side route change (no full page reload).
    fn navigate_to(&self, path: &str) -> Result<(), NavigationError>;
}

/// [`Navigator`] over the Dioxus router.
///
/// The current path is captured at render time from the platform's route
/// (the `ui` crate does not know the platform `Route` enum).
#[derive(Clone)]
pub struct RouterNavigator {
    inner: DioxusNavigator,
    current: String,
}

impl RouterNavigator {
    pub fn new(inner: DioxusNavigator, current: impl Into<String>) -> Self {
        Self {
            inner,
            current: current.into(),
        }
    }
}

impl Navigator for RouterNavigator {
    fn current_path(&self) -> String {
        self.current.clone()
    }

    fn navigate_to(&self, path: &str) -> Result<(), NavigationError> {
        match self.inner.push(path) {
            None => Ok(()),
            Some(_) => Err(NavigationError::External {
                path: path.to_string(),
            }),
        }
    }
}
