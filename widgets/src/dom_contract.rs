//! Class names, selectors and attributes the markup must carry.
//!
//! Widgets only ever touch elements matching their own selectors here, which
//! is what keeps them from interfering with each other.

// Language
pub const LANG_TOGGLE: &str = ".lang-toggle__btn";
pub const LANG_TOGGLE_ACTIVE: &str = "lang-toggle__btn--active";
pub const LANG_TOGGLE_ATTR: &str = "data-lang";
/// Elements carrying translated text. `<meta>` is handled separately.
pub const LOCALIZED: &str = "[data-en]:not(meta), [data-ru]:not(meta)";
pub const META_DESCRIPTION: &str = "meta[name=\"description\"]";

// Header
pub const HEADER: &str = ".header";
pub const HEADER_TRANSPARENT: &str = "header--transparent";
pub const HEADER_SOLID: &str = "header--solid";
pub const HERO: &str = ".hero--home";

// Mobile menu
pub const HAMBURGER: &str = ".hamburger";
pub const HAMBURGER_OPEN: &str = "hamburger--open";
pub const MOBILE_MENU: &str = ".mobile-menu";
pub const MOBILE_MENU_OPEN: &str = "mobile-menu--open";

// Dropdown
pub const DROPDOWN: &str = ".dropdown";
pub const DROPDOWN_TRIGGER: &str = ".header__link";
pub const DROPDOWN_OPEN: &str = "dropdown--open";

// Reveal
pub const REVEAL_TARGETS: &str = ".fade-in, .fade-in-left, .fade-in-right, .stagger-children";

// Typewriter
pub const TYPEWRITER: &str = ".typewriter-text";
/// Global constructor exposed by the TypeIt script.
pub const TYPEWRITER_GLOBAL: &str = "TypeIt";

// Carousel
pub const CAROUSEL: &str = ".stories__carousel";
pub const CAROUSEL_CARD: &str = ".story-card";
pub const CAROUSEL_NAV: &str = ".stories__nav";
pub const CAROUSEL_DOT: &str = "stories__dot";
pub const CAROUSEL_DOT_ACTIVE: &str = "stories__dot--active";

// Smooth scroll
pub const ANCHOR_LINK: &str = "a[href^=\"#\"]";

// Accordion
pub const ACCORDION: &str = ".accordion";
pub const ACCORDION_ITEM: &str = ".accordion__item";
pub const ACCORDION_ITEM_OPEN: &str = "accordion__item--open";
pub const ACCORDION_TRIGGER: &str = ".accordion__trigger";
pub const ACCORDION_CONTENT: &str = ".accordion__content";

// Configuration
pub const CONFIG_SCRIPT_ID: &str = "awa-config";
