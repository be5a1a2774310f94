//! Dioxus integration: builds the platform [`I18n`] once at the app root and
//! exposes it to components through context.
//!
//! ```ignore
//! #[component]
//! fn App() -> Element {
//!     ui::i18n::use_i18n_provider();
//!     rsx! { Router::<Route> {} }
//! }
//!
//! #[component]
//! fn Greeting() -> Element {
//!     let i18n = ui::i18n::use_i18n();
//!     rsx! { span { "data-translate": "greeting", {i18n.t("greeting")} } }
//! }
//! ```
//!
//! `t()` does not subscribe the component to language changes; marked
//! elements are rewritten in place by the orchestrator. Components whose
//! structure depends on the language read [`I18nContext::language`], which is
//! a signal kept in sync through a notifier subscription.

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use super::{Dictionary, I18n, I18nError, LanguageCode, Subscriber};
use crate::core::config::I18nConfig;
use crate::core::platform::{preferred_locale, Platform};
use crate::core::storage::PreferenceStore;
use crate::core::timing::Scheduler;

#[cfg(target_arch = "wasm32")]
pub type PlatformAdapter = super::dom::DomAdapter;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformAdapter = super::dom::HeadlessAdapter;

pub type AppI18n = I18n<PlatformAdapter>;

#[cfg(target_arch = "wasm32")]
pub(crate) fn platform_store() -> Rc<dyn PreferenceStore> {
    Rc::new(crate::core::storage::LocalStorage)
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn platform_store() -> Rc<dyn PreferenceStore> {
    Rc::new(crate::core::storage::MemoryStore::new())
}

#[cfg(target_arch = "wasm32")]
fn platform_scheduler() -> Rc<dyn Scheduler> {
    Rc::new(crate::core::timing::BrowserScheduler)
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_scheduler() -> Rc<dyn Scheduler> {
    Rc::new(crate::core::timing::InlineScheduler)
}

/// Bundled dictionaries, or an empty one (every key renders as itself).
pub fn bundled_dictionary() -> Rc<Dictionary> {
    match Dictionary::bundled() {
        Ok(dictionary) => Rc::new(dictionary),
        Err(err) => {
            warn!("[i18n] bundled dictionaries unusable ({err}); rendering raw keys");
            Rc::new(Dictionary::default())
        }
    }
}

/// Construct the platform localization context. Not yet initialized.
pub fn build_app_i18n(config: &I18nConfig, store: Rc<dyn PreferenceStore>) -> AppI18n {
    I18n::new(
        bundled_dictionary(),
        config,
        store,
        Rc::new(PlatformAdapter::default()),
        platform_scheduler(),
    )
}

/// Handle provided to components.
#[derive(Clone)]
pub struct I18nContext {
    i18n: Rc<AppI18n>,
    language: Signal<LanguageCode>,
}

impl I18nContext {
    /// Translate `key` in the current language.
    pub fn t(&self, key: &str) -> String {
        self.i18n.translate(key)
    }

    /// Current language (reactive).
    pub fn language(&self) -> LanguageCode {
        self.language.read().clone()
    }

    pub fn toggle(&self) -> LanguageCode {
        self.i18n.toggle()
    }

    pub fn set_language(&self, code: &str) -> Result<LanguageCode, I18nError> {
        self.i18n.set_language(code)
    }

    pub fn supported_languages(&self) -> Vec<LanguageCode> {
        self.i18n.supported_languages().to_vec()
    }

    pub fn i18n(&self) -> &Rc<AppI18n> {
        &self.i18n
    }
}

impl PartialEq for I18nContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.i18n, &other.i18n) && self.language == other.language
    }
}

/// Root hook: build, provide and (after the first mount) initialize the
/// localization context.
pub fn use_i18n_provider() -> I18nContext {
    let i18n = use_hook(|| Rc::new(build_app_i18n(&I18nConfig::bundled(), platform_store())));
    let language = use_signal(|| i18n.current());
    let context = use_context_provider(|| I18nContext {
        i18n: Rc::clone(&i18n),
        language,
    });

    let subscriber = use_hook(|| {
        let mirror: Subscriber = Rc::new(move |code: &LanguageCode| {
            let mut language = language;
            language.set(code.clone());
        });
        i18n.subscribe(Rc::clone(&mirror));
        mirror
    });

    use_drop({
        let i18n = Rc::clone(&i18n);
        move || {
            i18n.unsubscribe(&subscriber);
        }
    });

    // Marked elements only exist once the tree is mounted.
    use_effect({
        let i18n = Rc::clone(&i18n);
        move || {
            i18n.initialize(|| {
                let locale = preferred_locale();
                debug!("[i18n] {:?} host locale: {locale:?}", Platform::current());
                locale
            });
        }
    });

    context
}

/// Context provided by [`use_i18n_provider`].
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>()
}
