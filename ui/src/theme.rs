//! Dark/light appearance.
//!
//! Same shape as the language store, minus the orchestration: a stored
//! `theme` preference wins, otherwise the host's prefers-dark signal decides.
//! Applying a theme sets `dark` or `light` on the document root.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::core::platform::prefers_dark;
use crate::core::storage::{load_preference, save_preference, PreferenceStore, THEME_KEY};
use crate::i18n::provider::{platform_store, PlatformAdapter};
use crate::i18n::BindingAdapter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

pub struct ThemeState<A: BindingAdapter> {
    store: Rc<dyn PreferenceStore>,
    adapter: Rc<A>,
    current: Cell<Theme>,
}

impl<A: BindingAdapter> ThemeState<A> {
    pub fn new(store: Rc<dyn PreferenceStore>, adapter: Rc<A>) -> Self {
        Self {
            store,
            adapter,
            current: Cell::new(Theme::Light),
        }
    }

    /// Apply the stored theme, or the host preference when nothing valid is
    /// stored. `prefers_dark` is not called in the first case.
    pub fn initialize(&self, prefers_dark: impl FnOnce() -> bool) -> Theme {
        let theme = load_preference(self.store.as_ref(), THEME_KEY)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_else(|| if prefers_dark() { Theme::Dark } else { Theme::Light });
        self.apply(theme);
        theme
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.apply(next);
        next
    }

    pub fn apply(&self, theme: Theme) {
        debug!("[theme] applying {}", theme.as_str());
        self.adapter.set_root_class(theme.as_str(), true);
        self.adapter
            .set_root_class(theme.toggled().as_str(), false);
        save_preference(self.store.as_ref(), THEME_KEY, theme.as_str());
        self.current.set(theme);
    }
}

/// Handle provided to components.
#[derive(Clone)]
pub struct ThemeContext {
    state: Rc<ThemeState<PlatformAdapter>>,
    current: Signal<Theme>,
}

impl ThemeContext {
    /// Current theme (reactive).
    pub fn theme(&self) -> Theme {
        *self.current.read()
    }

    pub fn toggle(&self) -> Theme {
        let theme = self.state.toggle();
        let mut current = self.current;
        current.set(theme);
        theme
    }
}

impl PartialEq for ThemeContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state) && self.current == other.current
    }
}

pub fn use_theme_provider() -> ThemeContext {
    let state = use_hook(|| {
        Rc::new(ThemeState::new(
            platform_store(),
            Rc::new(PlatformAdapter::default()),
        ))
    });
    let current = use_signal(|| state.current());
    use_effect({
        let state = Rc::clone(&state);
        move || {
            let theme = state.initialize(prefers_dark);
            let mut current = current;
            current.set(theme);
        }
    });
    use_context_provider(|| ThemeContext { state, current })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::test_utils::{FailingStore, FakeAdapter};

    fn state(store: Rc<dyn PreferenceStore>) -> (ThemeState<FakeAdapter>, Rc<FakeAdapter>) {
        let adapter = Rc::new(FakeAdapter::new());
        (ThemeState::new(store, Rc::clone(&adapter)), adapter)
    }

    #[test]
    fn stored_theme_wins_over_environment() {
        let (theme, adapter) = state(Rc::new(MemoryStore::with_value(THEME_KEY, "light")));
        assert_eq!(
            theme.initialize(|| panic!("prefers-dark read despite stored theme")),
            Theme::Light
        );
        assert!(adapter.has_root_class("light"));
        assert!(!adapter.has_root_class("dark"));
    }

    #[test]
    fn environment_decides_when_nothing_is_stored() {
        let store = Rc::new(MemoryStore::new());
        let (theme, adapter) = state(store.clone());
        assert_eq!(theme.initialize(|| true), Theme::Dark);
        assert!(adapter.has_root_class("dark"));
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn garbage_in_storage_is_ignored() {
        let (theme, _) = state(Rc::new(MemoryStore::with_value(THEME_KEY, "sepia")));
        assert_eq!(theme.initialize(|| false), Theme::Light);
    }

    #[test]
    fn toggle_swaps_classes_and_persists() {
        let store = Rc::new(MemoryStore::new());
        let (theme, adapter) = state(store.clone());
        theme.initialize(|| false);

        assert_eq!(theme.toggle(), Theme::Dark);
        assert!(adapter.has_root_class("dark"));
        assert!(!adapter.has_root_class("light"));
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(theme.toggle(), Theme::Light);
        assert_eq!(theme.current(), Theme::Light);
    }

    #[test]
    fn works_without_storage() {
        let (theme, _) = state(Rc::new(FailingStore));
        assert_eq!(theme.initialize(|| true), Theme::Dark);
        assert_eq!(theme.toggle(), Theme::Light);
    }
}
