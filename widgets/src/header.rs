//! Header transparent/solid state.

use crate::dom_contract::{HEADER_SOLID, HEADER_TRANSPARENT};

pub const DEFAULT_SOLID_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Transparent,
    Solid,
}

impl HeaderState {
    /// No hysteresis: the state depends only on the last observed offset.
    pub fn from_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y >= threshold {
            HeaderState::Solid
        } else {
            HeaderState::Transparent
        }
    }

    /// `(class, present)` pairs to apply to the header element.
    pub fn markers(self) -> [(&'static str, bool); 2] {
        let solid = self == HeaderState::Solid;
        [(HEADER_TRANSPARENT, !solid), (HEADER_SOLID, solid)]
    }
}

/// Hero `padding-top` value for a header of the given rendered height.
pub fn hero_padding(header_height: f64) -> String {
    format!("{}px", header_height.max(0.0).round())
}
