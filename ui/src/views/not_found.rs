use dioxus::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let i18n = use_i18n();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page-not-found",
            h1 { "data-translate": "not-found.title", {i18n.t("not-found.title")} }
            p { class: "page-not-found__path", code { "{path}" } }
            p { "data-translate": "not-found.description", {i18n.t("not-found.description")} }
            a {
                class: "button button--primary",
                href: "/",
                "data-translate": "not-found.back-home",
                {i18n.t("not-found.back-home")}
            }
        }
    }
}
