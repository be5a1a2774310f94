use crate::i18n::use_i18n;
use crate::theme::use_theme;
use dioxus::prelude::*;

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// In-page anchors and the dictionary key of their label.
const NAV_LINKS: &[(&str, &str)] = &[
    ("#top", "home"),
    ("#projects", "projects"),
    ("#about", "about"),
    ("#contact", "contact"),
];

/// Site header with section links, the language switch and the theme switch.
///
/// Labels carry `data-translate` markers so a language switch rewrites them in
/// place; this component does not re-render for it. The theme button does
/// re-render (its label key depends on the theme), so the label is split into
/// two branches and Dioxus replaces the whole span instead of patching text
/// the orchestrator may already have rewritten.
#[component]
pub fn AppNavbar() -> Element {
    let i18n = use_i18n();
    let theme = use_theme();
    let dark = theme.theme().is_dark();
    let theme_key = if dark { "light-mode" } else { "dark-mode" };

    let on_language = {
        let i18n = i18n.clone();
        move |_: MouseEvent| {
            i18n.toggle();
        }
    };
    let on_theme = move |_: MouseEvent| {
        theme.toggle();
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                a {
                    class: "navbar__brand",
                    href: "#top",
                    "data-translate": "portfolio",
                    {i18n.t("portfolio")}
                }

                nav { class: "navbar__links",
                    { NAV_LINKS.iter().map(|(anchor, key)| {
                        rsx! {
                            a {
                                key: "{key}",
                                class: "navbar__link",
                                href: *anchor,
                                "data-translate": *key,
                                {i18n.t(key)}
                            }
                        }
                    })}
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "navbar__toggle navbar__toggle--lang",
                        "data-translate-title": "switch-lang",
                        title: i18n.t("switch-lang"),
                        onclick: on_language,
                        span { "data-translate": "switch-lang", {i18n.t("switch-lang")} }
                        LanguageBadge {}
                    }

                    button {
                        r#type: "button",
                        class: "navbar__toggle navbar__toggle--theme",
                        "data-translate-aria-label": theme_key,
                        aria_label: i18n.t(theme_key),
                        onclick: on_theme,
                        if dark {
                            span { "data-translate": "light-mode", {i18n.t("light-mode")} }
                        } else {
                            span { "data-translate": "dark-mode", {i18n.t("dark-mode")} }
                        }
                    }
                }
            }
        }
    }
}

/// Code of the active language next to the switch label. Reads the language
/// signal, so a switch re-renders this badge and nothing else in the header.
#[component]
fn LanguageBadge() -> Element {
    let code = use_i18n().language();
    let label = code.as_str().to_ascii_uppercase();

    rsx! {
        span { class: "navbar__lang-code", lang: "{code}", "{label}" }
    }
}
