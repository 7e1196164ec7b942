//! One-shot scroll reveals.

/// Animation family of a reveal target, picked from its trigger class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    FadeIn,
    FadeInLeft,
    FadeInRight,
    StaggerChildren,
}

impl RevealKind {
    /// Checked in this order; the first match wins.
    pub const ALL: [RevealKind; 4] = [
        RevealKind::FadeIn,
        RevealKind::FadeInLeft,
        RevealKind::FadeInRight,
        RevealKind::StaggerChildren,
    ];

    pub fn trigger_class(self) -> &'static str {
        match self {
            RevealKind::FadeIn => "fade-in",
            RevealKind::FadeInLeft => "fade-in-left",
            RevealKind::FadeInRight => "fade-in-right",
            RevealKind::StaggerChildren => "stagger-children",
        }
    }

    pub fn visible_class(self) -> &'static str {
        match self {
            RevealKind::FadeIn => "fade-in--visible",
            RevealKind::FadeInLeft => "fade-in-left--visible",
            RevealKind::FadeInRight => "fade-in-right--visible",
            RevealKind::StaggerChildren => "stagger-children--visible",
        }
    }

    /// Kind for an element, given a class membership test. Falls back to
    /// [`RevealKind::FadeIn`].
    pub fn detect(has_class: impl Fn(&str) -> bool) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| has_class(kind.trigger_class()))
            .unwrap_or(RevealKind::FadeIn)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Reveal bookkeeping for one observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub kind: RevealKind,
    pub state: RevealState,
}

impl Reveal {
    /// Rebuild from the element's classes. An element already carrying its
    /// visible marker counts as revealed.
    pub fn from_classes(has_class: impl Fn(&str) -> bool) -> Self {
        let kind = RevealKind::detect(&has_class);
        let state = if has_class(kind.visible_class()) {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        };
        Self { kind, state }
    }

    /// Intersection callback. Returns the class to add the first time the
    /// element intersects and `None` forever after.
    pub fn intersect(&mut self, is_intersecting: bool) -> Option<&'static str> {
        if !is_intersecting || self.state == RevealState::Revealed {
            return None;
        }
        self.state = RevealState::Revealed;
        Some(self.kind.visible_class())
    }
}

/// Settings for the intersection observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverSettings {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverSettings {
    fn default() -> Self {
        Self {
            threshold: 0.12,
            root_margin: "0px 0px -40px 0px".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(list: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |c| list.iter().any(|l| *l == c)
    }

    #[test]
    fn test_detect_order_and_fallback() {
        assert_eq!(RevealKind::detect(classes(&["fade-in-right"])), RevealKind::FadeInRight);
        assert_eq!(
            RevealKind::detect(classes(&["stagger-children", "fade-in-left"])),
            RevealKind::FadeInLeft
        );
        assert_eq!(RevealKind::detect(classes(&["card"])), RevealKind::FadeIn);
    }

    #[test]
    fn test_fires_exactly_once() {
        let mut reveal = Reveal::from_classes(classes(&["stagger-children"]));
        assert_eq!(reveal.intersect(false), None);
        assert_eq!(reveal.intersect(true), Some("stagger-children--visible"));
        assert_eq!(reveal.intersect(true), None);
        assert_eq!(reveal.intersect(false), None);
        assert_eq!(reveal.state, RevealState::Revealed);
    }

    #[test]
    fn test_already_visible_never_fires() {
        let mut reveal = Reveal::from_classes(classes(&["fade-in", "fade-in--visible"]));
        assert_eq!(reveal.state, RevealState::Revealed);
        assert_eq!(reveal.intersect(true), None);
    }

    #[test]
    fn test_default_observer_settings() {
        let settings = ObserverSettings::default();
        assert_eq!(settings.threshold, 0.12);
        assert_eq!(settings.root_margin, "0px 0px -40px 0px");
    }
}
