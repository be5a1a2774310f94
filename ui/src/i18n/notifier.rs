//! Ordered subscriber list notified on language changes.
//!
//! Independent of Dioxus signals: the provider bridges notifications into a
//! signal, but any code holding the context can subscribe a plain callback.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tracing::warn;

use super::LanguageCode;

/// Callback invoked with the new language. Identity is the `Rc` allocation.
pub type Subscriber = Rc<dyn Fn(&LanguageCode)>;

#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: RefCell<Vec<Subscriber>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `callback`. Registering the same `Rc` twice makes it fire twice.
    pub fn subscribe(&self, callback: Subscriber) {
        self.subscribers.borrow_mut().push(callback);
    }

    /// Remove the first registration of `callback`. Returns whether one was found.
    pub fn unsubscribe(&self, callback: &Subscriber) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let position = subscribers
            .iter()
            .position(|existing| std::ptr::addr_eq(Rc::as_ptr(existing), Rc::as_ptr(callback)));
        match position {
            Some(index) => {
                subscribers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every subscriber in registration order.
    ///
    /// Works on a snapshot, so callbacks may (un)subscribe; changes apply to
    /// the next emit. A panicking callback is logged and skipped where panics
    /// unwind. On `wasm32-unknown-unknown` panics abort, so there a panicking
    /// subscriber takes the app down with it and callbacks must not panic.
    pub fn emit(&self, language: &LanguageCode) {
        let snapshot: Vec<Subscriber> = self.subscribers.borrow().clone();
        for (index, callback) in snapshot.iter().enumerate() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| callback(language)));
            if outcome.is_err() {
                warn!("[i18n] language subscriber #{index} panicked on `{language}`; continuing");
            }
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.len())
            .finish()
    }
}
