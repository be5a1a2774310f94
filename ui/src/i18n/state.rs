//! Current-language store: persistence and initial-language detection.
//!
//! Resolution order on start-up:
//! 1. a stored `language` preference, if it names a supported language;
//! 2. the primary subtag of the host locale, if supported;
//! 3. the configured default.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use super::LanguageCode;
use crate::core::config::I18nConfig;
use crate::core::platform::primary_subtag;
use crate::core::storage::{load_preference, save_preference, PreferenceStore, LANGUAGE_KEY};

pub struct LanguageState {
    store: Rc<dyn PreferenceStore>,
    supported: Vec<LanguageCode>,
    default: LanguageCode,
    current: RefCell<LanguageCode>,
}

impl LanguageState {
    /// Starts on the configured default until [`initialize`](Self::initialize) runs.
    pub fn new(store: Rc<dyn PreferenceStore>, config: &I18nConfig) -> Self {
        Self {
            store,
            supported: config.supported_languages.clone(),
            default: config.default_language.clone(),
            current: RefCell::new(config.default_language.clone()),
        }
    }

    pub fn current(&self) -> LanguageCode {
        self.current.borrow().clone()
    }

    pub fn supported(&self) -> &[LanguageCode] {
        &self.supported
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.iter().any(|supported| *supported == code)
    }

    /// Resolve the start-up language and commit it. `env_locale` is only
    /// called when no usable preference is stored.
    pub fn initialize(&self, env_locale: impl FnOnce() -> Option<String>) -> LanguageCode {
        let resolved = match load_preference(self.store.as_ref(), LANGUAGE_KEY) {
            Some(saved) if self.is_supported(&saved) => {
                debug!("[i18n] using stored language `{saved}`");
                LanguageCode::from(saved)
            }
            saved => {
                if let Some(saved) = saved {
                    info!("[i18n] ignoring stored language `{saved}` (not supported)");
                }
                self.detect(env_locale().as_deref())
            }
        };
        self.commit(resolved.clone());
        resolved
    }

    /// Supported language matching the locale's primary subtag, else the default.
    pub fn detect(&self, env_locale: Option<&str>) -> LanguageCode {
        env_locale
            .and_then(primary_subtag)
            .and_then(|subtag| self.supported.iter().find(|code| **code == subtag.as_str()))
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// Language that follows the current one in the supported list (wrapping).
    pub fn next(&self) -> LanguageCode {
        let current = self.current.borrow();
        match self.supported.iter().position(|code| *code == *current) {
            Some(index) => self.supported[(index + 1) % self.supported.len()].clone(),
            None => self
                .supported
                .first()
                .cloned()
                .unwrap_or_else(|| self.default.clone()),
        }
    }

    /// Persist `code`, then make it current.
    pub fn commit(&self, code: LanguageCode) {
        save_preference(self.store.as_ref(), LANGUAGE_KEY, code.as_str());
        *self.current.borrow_mut() = code;
    }
}

impl std::fmt::Debug for LanguageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageState")
            .field("supported", &self.supported)
            .field("default", &self.default)
            .field("current", &self.current.borrow())
            .finish_non_exhaustive()
    }
}
