//! Optional page-level configuration.
//!
//! Pages may embed a `<script type="application/json" id="awa-config">` block
//! with any subset of these fields (camelCase). Missing fields keep their
//! defaults; callers replace an unparsable block with defaults.

use crate::carousel::CarouselConfig;
use crate::error::Result;
use crate::header::DEFAULT_SOLID_THRESHOLD;
use crate::locale::Locale;
use crate::reveal::ObserverSettings;
use crate::typewriter::TypewriterTiming;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// `localStorage` key holding the locale code.
    pub storage_key: String,
    /// Locale used when nothing valid is stored.
    pub default_locale: Locale,
    /// Maximum level forwarded to the browser console.
    pub log_level: String,
    pub header: HeaderConfig,
    pub dropdown: DropdownConfig,
    pub reveal: RevealConfig,
    pub carousel: CarouselConfig,
    pub typewriter: TypewriterTiming,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "awa-lang".to_string(),
            default_locale: Locale::En,
            log_level: "warn".to_string(),
            header: HeaderConfig::default(),
            dropdown: DropdownConfig::default(),
            reveal: RevealConfig::default(),
            carousel: CarouselConfig::default(),
            typewriter: TypewriterTiming::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    /// Scroll offset (px) at which the header turns solid.
    pub solid_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            solid_threshold: DEFAULT_SOLID_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownConfig {
    /// Widest viewport (px) on which triggers toggle on click.
    pub breakpoint: f64,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            breakpoint: crate::dropdown::DEFAULT_BREAKPOINT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        let settings = ObserverSettings::default();
        Self {
            threshold: settings.threshold,
            root_margin: settings.root_margin,
        }
    }
}

impl From<&RevealConfig> for ObserverSettings {
    fn from(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold.clamp(0.0, 1.0),
            root_margin: config.root_margin.clone(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the embedded block. A missing or blank block means defaults.
    pub fn from_page(json: Option<&str>) -> Result<Self> {
        match json.map(str::trim).filter(|j| !j.is_empty()) {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }
}
