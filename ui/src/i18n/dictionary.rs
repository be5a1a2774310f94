//! Static translation tables.
//!
//! One flat JSON object per language is embedded from `ui/i18n/` at compile
//! time (`i18n/<code>.json`, the file stem is the language code). Values are
//! either a string or a non-empty array of strings:
//!
//! ```json
//! {
//!   "home": "Inicio",
//!   "about.skills.frontend.items": ["Vue.js", "React", "TypeScript", "Tailwind CSS"]
//! }
//! ```
//!
//! A [`Dictionary`] is built once at start-up and never mutated afterwards.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use rust_embed::Embed;
use serde::Deserialize;

use super::LanguageCode;

/// Separator used when a list entry is displayed as one string.
pub const LIST_SEPARATOR: &str = ", ";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("dictionary `{language}` is not valid JSON: {source}")]
    Parse {
        language: LanguageCode,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{key}` in `{language}` is an empty list")]
    EmptyList { language: LanguageCode, key: String },
    #[error("dictionary file `{0}` is not UTF-8")]
    InvalidUtf8(String),
    #[error("no dictionaries found")]
    NoLanguages,
}

/// A single translation value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    List(Vec<String>),
}

impl Entry {
    /// Display form: lists are joined with [`LIST_SEPARATOR`] in order.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            Entry::Text(text) => Cow::Borrowed(text),
            Entry::List(items) => Cow::Owned(items.join(LIST_SEPARATOR)),
        }
    }
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Entry::Text(text.to_string())
    }
}

impl From<Vec<&str>> for Entry {
    fn from(items: Vec<&str>) -> Self {
        Entry::List(items.into_iter().map(str::to_string).collect())
    }
}

type Table = BTreeMap<String, Entry>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    languages: BTreeMap<LanguageCode, Table>,
}

impl Dictionary {
    /// Every dictionary embedded under `ui/i18n/`.
    pub fn bundled() -> Result<Self, DictionaryError> {
        let mut sources = Vec::new();
        for path in Localizations::iter() {
            let Some(stem) = path.strip_suffix(".json") else {
                continue;
            };
            let Some(file) = Localizations::get(&path) else {
                continue;
            };
            let text = String::from_utf8(file.data.into_owned())
                .map_err(|_| DictionaryError::InvalidUtf8(path.to_string()))?;
            sources.push((LanguageCode::from(stem), text));
        }
        if sources.is_empty() {
            return Err(DictionaryError::NoLanguages);
        }
        Self::from_json_sources(sources)
    }

    /// Parse `(language, json)` pairs. A later source for the same language
    /// replaces the earlier one.
    pub fn from_json_sources<I, C, S>(sources: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = (C, S)>,
        C: Into<LanguageCode>,
        S: AsRef<str>,
    {
        let mut languages = BTreeMap::new();
        for (code, json) in sources {
            let language = code.into();
            let table: Table = serde_json::from_str(json.as_ref()).map_err(|source| {
                DictionaryError::Parse {
                    language: language.clone(),
                    source,
                }
            })?;
            languages.insert(language, table);
        }
        let dictionary = Self { languages };
        dictionary.validate()?;
        Ok(dictionary)
    }

    /// Build from in-memory tables.
    pub fn from_tables<L, C, E, K, V>(tables: L) -> Result<Self, DictionaryError>
    where
        L: IntoIterator<Item = (C, E)>,
        C: Into<LanguageCode>,
        E: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Entry>,
    {
        let languages = tables
            .into_iter()
            .map(|(code, entries)| {
                let table = entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect();
                (code.into(), table)
            })
            .collect();
        let dictionary = Self { languages };
        dictionary.validate()?;
        Ok(dictionary)
    }

    fn validate(&self) -> Result<(), DictionaryError> {
        for (language, table) in &self.languages {
            for (key, entry) in table {
                if matches!(entry, Entry::List(items) if items.is_empty()) {
                    return Err(DictionaryError::EmptyList {
                        language: language.clone(),
                        key: key.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn lookup(&self, language: &str, key: &str) -> Option<&Entry> {
        self.languages.get(language)?.get(key)
    }

    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.languages.keys()
    }

    /// Keys defined for `language` (empty if the language is unknown).
    pub fn keys(&self, language: &str) -> BTreeSet<&str> {
        self.languages
            .get(language)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Keys present in `reference` but missing from `other`.
    pub fn missing_keys(&self, reference: &str, other: &str) -> BTreeSet<&str> {
        let present = self.keys(other);
        self.keys(reference)
            .into_iter()
            .filter(|key| !present.contains(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ES: &str = r#"{
        "home": "Inicio",
        "about.skills.frontend.items": ["Vue.js", "React", "TypeScript", "Tailwind CSS"]
    }"#;
    const EN: &str = r#"{ "home": "Home" }"#;

    #[test]
    fn parses_scalar_and_list_entries() {
        let dict = Dictionary::from_json_sources([("es", ES), ("en", EN)]).unwrap();
        assert_eq!(dict.lookup("es", "home"), Some(&Entry::from("Inicio")));
        assert_eq!(
            dict.lookup("es", "about.skills.frontend.items")
                .map(|e| e.display().into_owned()),
            Some("Vue.js, React, TypeScript, Tailwind CSS".to_string())
        );
    }

    #[test]
    fn lookup_of_unknown_language_or_key_is_absent() {
        let dict = Dictionary::from_json_sources([("en", EN)]).unwrap();
        assert_eq!(dict.lookup("en", "missing"), None);
        assert_eq!(dict.lookup("fr", "home"), None);
        assert!(!dict.contains_language("fr"));
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = Dictionary::from_json_sources([("en", r#"{ "items": [] }"#)]).unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyList { key, .. } if key == "items"));
    }

    #[test]
    fn non_string_values_are_rejected() {
        let err = Dictionary::from_json_sources([("en", r#"{ "count": 3 }"#)]).unwrap_err();
        assert!(matches!(err, DictionaryError::Parse { language, .. } if language == "en"));
    }

    #[test]
    fn reports_missing_keys_between_languages() {
        let dict = Dictionary::from_json_sources([("es", ES), ("en", EN)]).unwrap();
        let missing = dict.missing_keys("es", "en");
        assert_eq!(
            missing.into_iter().collect::<Vec<_>>(),
            vec!["about.skills.frontend.items"]
        );
        assert!(dict.missing_keys("en", "es").is_empty());
    }

    #[test]
    fn bundled_dictionaries_load() {
        let dict = Dictionary::bundled().expect("bundled dictionaries parse");
        assert!(dict.contains_language("es"));
        assert!(dict.contains_language("en"));
        assert_eq!(dict.lookup("es", "home").map(|e| e.display()), Some("Inicio".into()));
    }
}
