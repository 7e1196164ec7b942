//! Navigation dropdowns: click-to-toggle on narrow viewports, outside-click dismissal.

pub const DEFAULT_BREAKPOINT: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

impl DropdownState {
    pub fn from_open(open: bool) -> Self {
        if open { DropdownState::Open } else { DropdownState::Closed }
    }

    pub fn is_open(self) -> bool {
        self == DropdownState::Open
    }

    /// Trigger click. Returns `None` on wide viewports, where the click is
    /// left to the browser and hover styling opens the menu.
    pub fn on_trigger(self, viewport_width: f64, breakpoint: f64) -> Option<Self> {
        if !intercepts_trigger(viewport_width, breakpoint) {
            return None;
        }
        Some(match self {
            DropdownState::Closed => DropdownState::Open,
            DropdownState::Open => DropdownState::Closed,
        })
    }

    /// Any click on the document; `inside` is whether the dropdown contains
    /// the click target.
    pub fn on_document_click(self, inside: bool) -> Self {
        if inside { self } else { DropdownState::Closed }
    }
}

/// Whether trigger clicks should be intercepted at this viewport width.
pub fn intercepts_trigger(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_only_below_breakpoint() {
        let bp = DEFAULT_BREAKPOINT;
        assert_eq!(DropdownState::Closed.on_trigger(1280.0, bp), None);
        assert_eq!(DropdownState::Closed.on_trigger(1024.0, bp), Some(DropdownState::Open));
        assert_eq!(DropdownState::Open.on_trigger(375.0, bp), Some(DropdownState::Closed));
    }

    #[test]
    fn test_outside_click_closes() {
        assert_eq!(DropdownState::Open.on_document_click(false), DropdownState::Closed);
        assert_eq!(DropdownState::Open.on_document_click(true), DropdownState::Open);
        assert_eq!(DropdownState::Closed.on_document_click(true), DropdownState::Closed);
    }

    #[test]
    fn test_trigger_click_survives_its_own_bubbling() {
        // The trigger click bubbles to the document with a target inside the dropdown.
        let opened = DropdownState::Closed
            .on_trigger(800.0, DEFAULT_BREAKPOINT)
            .unwrap();
        assert!(opened.on_document_click(true).is_open());
    }
}
