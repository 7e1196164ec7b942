//! Mobile menu open/closed state and the body scroll lock tied to it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn from_open(open: bool) -> Self {
        if open { MenuState::Open } else { MenuState::Closed }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Hamburger click.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Link click inside the panel.
    pub fn closed(self) -> Self {
        MenuState::Closed
    }

    /// Value for `body.style.overflow`.
    pub fn body_overflow(self) -> &'static str {
        match self {
            MenuState::Open => "hidden",
            MenuState::Closed => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Click {
        Hamburger,
        Link,
    }

    #[test]
    fn test_lock_tracks_open_state() {
        let clicks = [
            Click::Hamburger,
            Click::Link,
            Click::Hamburger,
            Click::Hamburger,
            Click::Link,
            Click::Link,
            Click::Hamburger,
        ];
        let mut state = MenuState::default();
        for click in clicks {
            state = match click {
                Click::Hamburger => state.toggled(),
                Click::Link => state.closed(),
            };
            assert_eq!(state.body_overflow() == "hidden", state.is_open());
        }
        assert!(state.is_open());
    }

    #[test]
    fn test_link_click_when_closed_is_noop() {
        assert_eq!(MenuState::Closed.closed(), MenuState::Closed);
        assert_eq!(MenuState::Closed.body_overflow(), "");
    }
}
