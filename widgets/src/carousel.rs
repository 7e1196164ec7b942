//! Pagination math for the stories carousel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Viewports at or below this width show one card per page.
    pub narrow_breakpoint: f64,
    pub narrow_per_page: usize,
    pub wide_per_page: usize,
    /// Horizontal gap between cards, in px.
    pub gap: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 768.0,
            narrow_per_page: 1,
            wide_per_page: 3,
            gap: 32.0,
        }
    }
}

impl CarouselConfig {
    pub fn cards_per_page(&self, viewport_width: f64) -> usize {
        let per_page = if viewport_width <= self.narrow_breakpoint {
            self.narrow_per_page
        } else {
            self.wide_per_page
        };
        per_page.max(1)
    }
}

/// `ceil(cards / per_page)`, never more than one dot per card.
pub fn dot_count(cards: usize, per_page: usize) -> usize {
    cards.div_ceil(per_page.max(1)).min(cards)
}

/// How card positions are known when inferring the active dot.
#[derive(Debug, Clone, PartialEq)]
pub enum CardGeometry {
    /// All cards share one width and are separated by a fixed gap.
    Uniform { card_width: f64, gap: f64 },
    /// Left edge of every card, relative to the first card.
    Measured(Vec<f64>),
}

impl CardGeometry {
    /// Prefer measured offsets; fall back to uniform spacing when the
    /// measurement is unusable (e.g. cards not laid out yet).
    pub fn from_measurements(offsets: Vec<f64>, first_width: f64, gap: f64) -> Self {
        let increasing = offsets.windows(2).all(|w| w[1] > w[0]);
        if offsets.len() > 1 && increasing {
            CardGeometry::Measured(offsets)
        } else {
            CardGeometry::Uniform { card_width: first_width, gap }
        }
    }

    /// Index of the card whose left edge is nearest to `scroll_left`.
    pub fn nearest_card(&self, scroll_left: f64) -> usize {
        match self {
            CardGeometry::Uniform { card_width, gap } => {
                let stride = card_width + gap;
                if stride <= 0.0 || !scroll_left.is_finite() {
                    return 0;
                }
                let index = (scroll_left / stride).round();
                if index <= 0.0 { 0 } else { index as usize }
            }
            CardGeometry::Measured(offsets) => offsets
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    (*a - scroll_left).abs().total_cmp(&(*b - scroll_left).abs())
                })
                .map(|(i, _)| i)
                .unwrap_or(0),
        }
    }
}

/// Dot to mark active after a scroll. Clamped to the last dot so exactly one
/// dot is always active.
pub fn active_dot(scroll_left: f64, geometry: &CardGeometry, dots: usize) -> usize {
    geometry
        .nearest_card(scroll_left)
        .min(dots.saturating_sub(1))
}

/// Accessible label of dot `index` (zero-based).
pub fn dot_label(index: usize) -> String {
    format!("Slide {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_count() {
        assert_eq!(dot_count(7, 3), 3);
        assert_eq!(dot_count(7, 1), 7);
        assert_eq!(dot_count(6, 3), 2);
        assert_eq!(dot_count(2, 3), 1);
        assert_eq!(dot_count(0, 3), 0);
        assert_eq!(dot_count(4, 0), 4);
    }

    #[test]
    fn test_cards_per_page_breakpoint() {
        let config = CarouselConfig::default();
        assert_eq!(config.cards_per_page(375.0), 1);
        assert_eq!(config.cards_per_page(768.0), 1);
        assert_eq!(config.cards_per_page(769.0), 3);
    }

    #[test]
    fn test_uniform_rounds_to_nearest() {
        let g = CardGeometry::Uniform { card_width: 368.0, gap: 32.0 };
        assert_eq!(g.nearest_card(0.0), 0);
        assert_eq!(g.nearest_card(199.0), 0);
        assert_eq!(g.nearest_card(201.0), 1);
        assert_eq!(g.nearest_card(800.0), 2);
        assert_eq!(g.nearest_card(-20.0), 0);
    }

    #[test]
    fn test_zero_width_cards_do_not_divide_by_zero() {
        let g = CardGeometry::Uniform { card_width: 0.0, gap: 0.0 };
        assert_eq!(g.nearest_card(500.0), 0);
    }

    #[test]
    fn test_measured_handles_mixed_widths() {
        // 300px, 500px, 200px cards with a 32px gap.
        let g = CardGeometry::Measured(vec![0.0, 332.0, 864.0, 1096.0]);
        assert_eq!(g.nearest_card(320.0), 1);
        assert_eq!(g.nearest_card(700.0), 2);
        assert_eq!(g.nearest_card(1000.0), 3);
    }

    #[test]
    fn test_unusable_measurements_fall_back() {
        let g = CardGeometry::from_measurements(vec![0.0, 0.0, 0.0], 300.0, 32.0);
        assert_eq!(g, CardGeometry::Uniform { card_width: 300.0, gap: 32.0 });
        let g = CardGeometry::from_measurements(vec![0.0, 332.0], 300.0, 32.0);
        assert!(matches!(g, CardGeometry::Measured(_)));
    }

    #[test]
    fn test_active_dot_clamped() {
        let g = CardGeometry::Uniform { card_width: 300.0, gap: 32.0 };
        assert_eq!(active_dot(332.0 * 5.0, &g, 3), 2);
        assert_eq!(active_dot(332.0, &g, 3), 1);
        assert_eq!(active_dot(332.0, &g, 0), 0);
    }

    #[test]
    fn test_dot_label() {
        assert_eq!(dot_label(0), "Slide 1");
    }
}
