use std::rc::Rc;

use super::{Dictionary, LanguageCode};

/// Resolves keys against one language of a shared [`Dictionary`].
///
/// Cheap to clone; the orchestrator carries one into its deferred callbacks
/// so a pass always renders the language it was started for.
#[derive(Debug, Clone)]
pub struct Resolver {
    dictionary: Rc<Dictionary>,
    language: LanguageCode,
}

impl Resolver {
    pub fn new(dictionary: Rc<Dictionary>, language: LanguageCode) -> Self {
        Self {
            dictionary,
            language,
        }
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Display string for `key`; the key itself when no translation exists.
    pub fn translate(&self, key: &str) -> String {
        match self.dictionary.lookup(self.language.as_str(), key) {
            Some(entry) => entry.display().into_owned(),
            None => key.to_string(),
        }
    }
}
