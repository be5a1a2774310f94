//! Localization configuration.
//!
//! The bundled settings live in `ui/i18n.toml` and are embedded at compile
//! time. A broken file never takes the page down: [`I18nConfig::bundled`]
//! logs the problem and falls back to [`I18nConfig::default`].

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::core::timing::SETTLE_DURATION;
use crate::i18n::LanguageCode;

const BUNDLED_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n.toml"));

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed i18n config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no supported languages configured")]
    NoLanguages,
    #[error("default language `{0}` is not in the supported list")]
    UnsupportedDefault(LanguageCode),
    #[error("language `{0}` is listed more than once")]
    DuplicateLanguage(LanguageCode),
}

/// Maps a secondary marker attribute to the attribute that receives the
/// translated value, e.g. `data-translate-title` → `title`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttributeBinding {
    pub marker: String,
    pub attribute: String,
}

impl AttributeBinding {
    pub fn new(marker: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            attribute: attribute.into(),
        }
    }
}

/// Attribute names that make up the document binding contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Primary marker; its value is the dictionary key.
    pub content: String,
    /// Secondary markers that write into an attribute instead of content.
    pub attributes: Vec<AttributeBinding>,
    /// Attribute written instead of content on input-capable targets.
    pub input_attribute: String,
    /// Class held on the document root while a pass is in flight.
    pub pass_class: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            content: "data-translate".into(),
            attributes: vec![
                AttributeBinding::new("data-translate-title", "title"),
                AttributeBinding::new("data-translate-aria-label", "aria-label"),
            ],
            input_attribute: "placeholder".into(),
            pass_class: "lang-change-active".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub supported_languages: Vec<LanguageCode>,
    pub default_language: LanguageCode,
    pub settle_ms: u64,
    pub markers: Markers,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            supported_languages: vec![LanguageCode::from("es"), LanguageCode::from("en")],
            default_language: LanguageCode::from("en"),
            settle_ms: SETTLE_DURATION.as_millis() as u64,
            markers: Markers::default(),
        }
    }
}

impl I18nConfig {
    /// Configuration embedded from `i18n.toml`, or the defaults if it is unusable.
    pub fn bundled() -> Self {
        match Self::from_toml_str(BUNDLED_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                warn!("[i18n] bundled config rejected ({err}); using defaults");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supported_languages.is_empty() {
            return Err(ConfigError::NoLanguages);
        }
        let mut seen = HashSet::new();
        for code in &self.supported_languages {
            if !seen.insert(code) {
                return Err(ConfigError::DuplicateLanguage(code.clone()));
            }
        }
        if !seen.contains(&self.default_language) {
            return Err(ConfigError::UnsupportedDefault(self.default_language.clone()));
        }
        Ok(())
    }

    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}
