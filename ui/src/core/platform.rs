//! Platform detection helpers and read-once environment signals.

use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

/// Locale reported by the host (`navigator.language` in the browser).
#[cfg(target_arch = "wasm32")]
pub fn preferred_locale() -> Option<String> {
    web_sys::window().and_then(|w| w.navigator().language())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn preferred_locale() -> Option<String> {
    sys_locale::get_locale()
}

/// Whether the host asks for a dark appearance.
#[cfg(target_arch = "wasm32")]
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_dark() -> bool {
    false
}

/// Lower-cased primary language subtag: `"es-MX"` → `"es"`.
///
/// Returns `None` for empty input and for the undetermined tag `und`.
pub fn primary_subtag(locale: &str) -> Option<String> {
    let locale = locale.trim();
    if locale.is_empty() {
        return None;
    }

    let subtag = match locale.parse::<LanguageIdentifier>() {
        Ok(id) => id.language.as_str().to_string(),
        // POSIX-style values such as `fr_FR.UTF-8` are not BCP 47.
        Err(_) => locale
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase(),
    };

    if subtag.is_empty() || subtag == "und" {
        None
    } else {
        Some(subtag)
    }
}
