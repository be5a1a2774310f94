//! Internationalization (i18n) for `folio-ui`.
//!
//! This module wires together:
//! - [`Dictionary`]: static per-language tables embedded from `ui/i18n/*.json`
//! - [`LanguageState`]: current language, persistence, locale detection
//! - [`ChangeNotifier`]: ordered subscribers told about language changes
//! - [`Resolver`]: key → display string, falling back to the key itself
//! - [`Orchestrator`]: re-renders mounted markup in place after a change
//!
//! [`I18n`] is the composition root. The application builds exactly one
//! (see [`provider::use_i18n_provider`]) and hands it to consumers through
//! Dioxus context; nothing here is a global.
//!
//! Usage in a component:
//! ```ignore
//! let i18n = ui::i18n::use_i18n();
//! rsx! { a { "data-translate": "home", {i18n.t("home")} } }
//! ```
//!
//! Every change runs the same sequence: persist → `<html lang>` → notify
//! subscribers → orchestrator pass.

pub mod binding;
pub mod dictionary;
pub mod dom;
pub mod notifier;
pub mod provider;
pub mod resolver;
pub mod state;

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use binding::{Binding, BindingAdapter, BindingError, Orchestrator, TransitionState};
pub use dictionary::{Dictionary, DictionaryError, Entry, LIST_SEPARATOR};
pub use notifier::{ChangeNotifier, Subscriber};
pub use provider::{use_i18n, use_i18n_provider, I18nContext};
pub use resolver::Resolver;
pub use state::LanguageState;

use crate::core::config::I18nConfig;
use crate::core::storage::PreferenceStore;
use crate::core::timing::Scheduler;

/// Short language identifier such as `"es"` or `"en"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("language `{0}` is not supported")]
    UnsupportedLanguage(String),
}

/// Localization context: dictionary, language state, notifier and
/// orchestrator behind one handle.
pub struct I18n<A: BindingAdapter> {
    dictionary: Rc<Dictionary>,
    state: LanguageState,
    notifier: ChangeNotifier,
    orchestrator: Orchestrator<A>,
}

impl<A: BindingAdapter + 'static> I18n<A> {
    pub fn new(
        dictionary: Rc<Dictionary>,
        config: &I18nConfig,
        store: Rc<dyn PreferenceStore>,
        adapter: Rc<A>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            dictionary,
            state: LanguageState::new(store, config),
            notifier: ChangeNotifier::new(),
            orchestrator: Orchestrator::new(
                adapter,
                scheduler,
                config.markers.clone(),
                config.settle_duration(),
            ),
        }
    }

    /// Resolve and apply the start-up language.
    ///
    /// `env_locale` is only called when storage holds no usable language.
    /// Subscribers are only notified if this moves away from the language the
    /// context was constructed with; the document is re-rendered regardless.
    pub fn initialize(&self, env_locale: impl FnOnce() -> Option<String>) -> LanguageCode {
        let before = self.state.current();
        let resolved = self.state.initialize(env_locale);
        info!("[i18n] initialized with `{resolved}`");
        self.orchestrator
            .adapter()
            .set_document_language(&resolved);
        if resolved != before {
            self.notifier.emit(&resolved);
        }
        self.orchestrator.run_pass(self.resolver());
        resolved
    }

    pub fn current(&self) -> LanguageCode {
        self.state.current()
    }

    pub fn supported_languages(&self) -> &[LanguageCode] {
        self.state.supported()
    }

    /// Resolver bound to the current language.
    pub fn resolver(&self) -> Resolver {
        Resolver::new(Rc::clone(&self.dictionary), self.state.current())
    }

    pub fn translate(&self, key: &str) -> String {
        self.resolver().translate(key)
    }

    /// Advance to the next supported language (flip, with two).
    pub fn toggle(&self) -> LanguageCode {
        let next = self.state.next();
        self.apply(next.clone());
        next
    }

    pub fn set_language(&self, code: &str) -> Result<LanguageCode, I18nError> {
        if !self.state.is_supported(code) {
            return Err(I18nError::UnsupportedLanguage(code.to_string()));
        }
        let code = LanguageCode::from(code);
        self.apply(code.clone());
        Ok(code)
    }

    pub fn subscribe(&self, callback: Subscriber) {
        self.notifier.subscribe(callback);
    }

    pub fn unsubscribe(&self, callback: &Subscriber) -> bool {
        self.notifier.unsubscribe(callback)
    }

    fn apply(&self, code: LanguageCode) {
        info!("[i18n] switching to `{code}`");
        self.state.commit(code.clone());
        self.orchestrator.adapter().set_document_language(&code);
        self.notifier.emit(&code);
        self.orchestrator.run_pass(self.resolver());
    }
}

impl<A: BindingAdapter> fmt::Debug for I18n<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("state", &self.state)
            .field("notifier", &self.notifier)
            .field("orchestrator", &self.orchestrator)
            .finish_non_exhaustive()
    }
}
