//! Mobile menu open/closed state.

/// Visibility of the mobile navigation panel. Starts `Closed` on mount.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggle(&mut self) {
        *self = match *self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
        tracing::debug!(state = ?self, "mobile menu toggled");
    }

    /// Idempotent.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("mobile menu closed");
        }
        *self = Self::Closed;
    }

    /// Navigation events close the menu. Returns whether the state changed,
    /// so callers can skip a write when it did not.
    pub fn route_changed(&mut self, previous: &str, next: &str) -> bool {
        if previous == next || !self.is_open() {
            return false;
        }
        tracing::debug!(previous, next, "route changed; closing mobile menu");
        self.close();
        true
    }

    /// Value for the toggle button's `aria-expanded`.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn open_iff_odd_number_of_toggles() {
        let mut state = MenuState::default();
        for count in 1..=9 {
            state.toggle();
            assert_eq!(state.is_open(), count % 2 == 1, "after {count} toggles");
        }
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = MenuState::Open;
        state.close();
        assert_eq!(state, MenuState::Closed);
        state.close();
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn route_change_closes_open_menu() {
        let mut state = MenuState::Open;
        assert!(state.route_changed("/", "/services"));
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn same_route_keeps_menu_open() {
        let mut state = MenuState::Open;
        assert!(!state.route_changed("/services", "/services"));
        assert_eq!(state, MenuState::Open);
    }

    #[test]
    fn route_change_on_closed_menu_is_a_no_op() {
        let mut state = MenuState::Closed;
        assert!(!state.route_changed("/", "/contact"));
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn aria_expanded_follows_state() {
        assert_eq!(MenuState::Closed.aria_expanded(), "false");
        assert_eq!(MenuState::Open.aria_expanded(), "true");
    }
}
