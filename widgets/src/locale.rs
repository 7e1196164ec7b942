//! Supported locales and per-element text variants.

use crate::error::WidgetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two display languages of the site.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    /// Code stored in `localStorage`, `data-lang` and `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Attribute holding this locale's text on annotated elements.
    pub fn attribute(self) -> &'static str {
        match self {
            Locale::En => "data-en",
            Locale::Ru => "data-ru",
        }
    }

    /// Resolve the persisted value, falling back to `default` when it is
    /// missing or not a known code.
    pub fn restore(stored: Option<&str>, default: Locale) -> Locale {
        stored
            .and_then(|code| code.parse().ok())
            .unwrap_or(default)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(WidgetError::UnknownLocale(other.to_string())),
        }
    }
}

/// Text variants read from one annotated element.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocaleVariants {
    pub en: Option<String>,
    pub ru: Option<String>,
}

impl LocaleVariants {
    /// Build from an attribute reader, e.g. `|name| element.get_attribute(name)`.
    pub fn read(mut attr: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            en: attr(Locale::En.attribute()),
            ru: attr(Locale::Ru.attribute()),
        }
    }

    pub fn variant(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::En => self.en.as_deref(),
            Locale::Ru => self.ru.as_deref(),
        }
    }

    /// Content for `<meta name="description">`. Only swapped when both
    /// translations are present and non-empty.
    pub fn meta_content(&self, locale: Locale) -> Option<&str> {
        match (self.en.as_deref(), self.ru.as_deref()) {
            (Some(en), Some(ru)) if !en.is_empty() && !ru.is_empty() => Some(match locale {
                Locale::En => en,
                Locale::Ru => ru,
            }),
            _ => None,
        }
    }

    /// Locales this element has no text for.
    pub fn missing(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.variant(*locale).is_none())
            .collect()
    }

}

/// Where an annotated element displays its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    /// `placeholder` attribute of form fields.
    Placeholder,
    /// Inner HTML of everything else.
    Content,
}

impl TextSlot {
    pub fn for_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") {
            TextSlot::Placeholder
        } else {
            TextSlot::Content
        }
    }
}

/// An element annotated with `data-en` / `data-ru`.
pub trait Localized {
    fn attribute(&self, name: &str) -> Option<String>;
    fn tag(&self) -> String;
    fn set_text(&self, slot: TextSlot, text: &str);
}

/// Show `locale`'s variant on `element`. An element without that variant
/// keeps whatever it shows. Returns whether the text was replaced.
pub fn swap_text(element: &impl Localized, locale: Locale) -> bool {
    let variants = LocaleVariants::read(|name| element.attribute(name));
    let Some(text) = variants.variant(locale) else {
        return false;
    };
    element.set_text(TextSlot::for_tag(&element.tag()), text);
    true
}

/// Active flags for a row of language toggles.
///
/// Each toggle is described by the locale its `data-lang` names (if any); the
/// result marks exactly the toggles for `active`.
pub fn toggle_markers(toggles: &[Option<Locale>], active: Locale) -> Vec<bool> {
    toggles.iter().map(|t| *t == Some(active)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn greeting() -> LocaleVariants {
        LocaleVariants {
            en: Some("Hello".into()),
            ru: Some("Привет".into()),
        }
    }

    #[test]
    fn test_restore_defaults_when_unset() {
        assert_eq!(Locale::restore(None, Locale::En), Locale::En);
        assert_eq!(Locale::restore(None, Locale::Ru), Locale::Ru);
    }

    #[test]
    fn test_restore_ignores_garbage() {
        assert_eq!(Locale::restore(Some("de"), Locale::En), Locale::En);
        assert_eq!(Locale::restore(Some(""), Locale::En), Locale::En);
        assert_eq!(Locale::restore(Some("ru"), Locale::En), Locale::Ru);
    }

    #[test]
    fn test_parse_reports_unknown_code() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, WidgetError::UnknownLocale(code) if code == "fr"));
    }

    #[test]
    fn test_codes_and_attributes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>().unwrap(), locale);
            assert_eq!(locale.attribute(), format!("data-{}", locale));
        }
    }

    #[test]
    fn test_exactly_one_toggle_active() {
        let toggles = [Some(Locale::En), Some(Locale::Ru), None];
        for locale in Locale::ALL {
            let markers = toggle_markers(&toggles, locale);
            assert_eq!(markers.iter().filter(|m| **m).count(), 1);
            let idx = markers.iter().position(|m| *m).unwrap();
            assert_eq!(toggles[idx], Some(locale));
        }
    }

    /// In-memory stand-in for an annotated element.
    struct Node {
        tag: &'static str,
        attrs: Vec<(&'static str, &'static str)>,
        content: RefCell<String>,
        placeholder: RefCell<String>,
    }

    impl Node {
        fn new(tag: &'static str, attrs: Vec<(&'static str, &'static str)>, shown: &str) -> Self {
            Self {
                tag,
                attrs,
                content: RefCell::new(shown.to_string()),
                placeholder: RefCell::new(shown.to_string()),
            }
        }

        fn content(&self) -> String {
            self.content.borrow().clone()
        }
    }

    impl Localized for Node {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }

        fn tag(&self) -> String {
            self.tag.to_string()
        }

        fn set_text(&self, slot: TextSlot, text: &str) {
            let target = match slot {
                TextSlot::Placeholder => &self.placeholder,
                TextSlot::Content => &self.content,
            };
            *target.borrow_mut() = text.to_string();
        }
    }

    #[test]
    fn test_missing_variant_keeps_prior_text() {
        let only_en = Node::new("P", vec![("data-en", "Book a session")], "Book a session");
        assert!(!swap_text(&only_en, Locale::Ru));
        assert_eq!(only_en.content(), "Book a session");
        let variants = LocaleVariants::read(|name| only_en.attribute(name));
        assert_eq!(variants.missing(), vec![Locale::Ru]);
        assert!(swap_text(&only_en, Locale::En));
        assert_eq!(only_en.content(), "Book a session");
    }

    #[test]
    fn test_switch_back_and_forth_restores_text() {
        let title = Node::new("H1", vec![("data-en", "Hello"), ("data-ru", "Привет")], "Hello");
        swap_text(&title, Locale::Ru);
        assert_eq!(title.content(), "Привет");
        swap_text(&title, Locale::En);
        assert_eq!(title.content(), "Hello");
        swap_text(&title, Locale::Ru);
        assert_eq!(title.content(), "Привет");
    }

    #[test]
    fn test_form_fields_swap_placeholder() {
        let field = Node::new("INPUT", vec![("data-en", "Your name"), ("data-ru", "Ваше имя")], "");
        swap_text(&field, Locale::Ru);
        assert_eq!(*field.placeholder.borrow(), "Ваше имя");
        assert_eq!(field.content(), "");
        assert_eq!(TextSlot::for_tag("textarea"), TextSlot::Placeholder);
        assert_eq!(TextSlot::for_tag("DIV"), TextSlot::Content);
    }

    #[test]
    fn test_meta_requires_both_variants() {
        assert_eq!(greeting().meta_content(Locale::Ru), Some("Привет"));
        let partial = LocaleVariants {
            en: Some("Hello".into()),
            ru: Some(String::new()),
        };
        assert_eq!(partial.meta_content(Locale::En), None);
    }

    #[test]
    fn test_read_uses_mapping_table() {
        let v = LocaleVariants::read(|name| match name {
            "data-en" => Some("A".into()),
            "data-ru" => Some("Б".into()),
            _ => None,
        });
        assert_eq!(v, LocaleVariants { en: Some("A".into()), ru: Some("Б".into()) });
    }
}
