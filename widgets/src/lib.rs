//! # awaken-widgets
//!
//! Browser-free core of the Awaken with Amelia site widgets.
//!
//! Every interactive element on the marketing site (language toggle, header,
//! mobile menu, dropdowns, scroll reveals, typewriter, carousel, smooth scroll,
//! accordion) is a tiny state machine whose state lives in CSS marker classes.
//! This crate models those machines as plain Rust enums and functions so they
//! can be tested natively, without a rendered document. The `awaken-wasm` crate
//! binds them to the real DOM.
//!
//! ## Quick Start
//!
//! ```rust
//! use awaken_widgets::{header::HeaderState, locale::Locale, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let state = HeaderState::from_scroll(120.0, config.header.solid_threshold);
//! assert_eq!(state, HeaderState::Solid);
//!
//! let locale = Locale::restore(Some("ru"), config.default_locale);
//! assert_eq!(locale.attribute(), "data-ru");
//! ```
//!
//! ## Architecture
//!
//! - [`locale`] - locales, persisted state and per-element text variants
//! - [`header`], [`menu`], [`dropdown`], [`accordion`] - marker-class state machines
//! - [`reveal`] - one-shot scroll reveals
//! - [`typewriter`] - localized phrase sets and the type/delete script
//! - [`carousel`] - pagination math
//! - [`smooth_scroll`] - anchor fragment resolution
//! - [`dom_contract`] - class names and attributes shared with the markup
//! - [`config`] - optional page-level overrides
//!
//! ---
//! Built for awakenwithamelia.com

pub mod accordion;
pub mod carousel;
pub mod config;
pub mod dom_contract;
pub mod dropdown;
pub mod error;
pub mod header;
pub mod locale;
pub mod menu;
pub mod reveal;
pub mod smooth_scroll;
pub mod storage;
pub mod typewriter;

pub use config::SiteConfig;
pub use error::WidgetError;
pub use locale::Locale;
