#![cfg(test)]
/*!
Theme selector lint.

The binding orchestrator and the theme switch toggle class names from Rust;
the stylesheet has to define them or a language switch happens without any
visible transition. A substring check is enough as an early warning.

If you rename a class, update `ui/src/i18n/dom.rs` (or `ui/src/theme.rs`)
and REQUIRED_SELECTORS together.
*/

use ui::i18n::dom::TRANSITION_CLASSES;

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Selectors / tokens that components rely on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Theme
    "html.dark",
    "html.light",
    // Whole-pass marker on the root
    "html.lang-change-active",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn every_transition_class_is_styled() {
    for class in TRANSITION_CLASSES {
        let selector = format!(".{class} {{");
        assert!(
            THEME_CSS.contains(&selector),
            "transition class {class} has no rule in main.css"
        );
    }
}

#[test]
fn configured_pass_class_is_styled() {
    let config = ui::core::config::I18nConfig::bundled();
    assert!(
        THEME_CSS.contains(&format!(".{}", config.markers.pass_class)),
        "pass class {} has no rule in main.css",
        config.markers.pass_class
    );
}

#[test]
fn navbar_styles_language_toggle() {
    for sel in [".navbar {", ".navbar__toggle {", ".navbar__link {", ".navbar__lang-code {"] {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css lacks {sel}");
    }
}
