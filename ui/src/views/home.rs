use dioxus::prelude::*;

use crate::i18n::{use_i18n, I18nContext};

const FEATURE_KEYS: &[&str] = &[
    "fullstack-projects",
    "technical-solutions",
    "clean-code",
    "user-experience",
];

/// Skill groups; each has `about.skills.<group>.title` and a list-valued
/// `about.skills.<group>.items` entry.
const SKILL_GROUPS: &[&str] = &["frontend", "backend", "tools"];

const PROJECT_COUNT: usize = 1;

#[component]
pub fn Home() -> Element {
    let i18n = use_i18n();

    // Render trace. Language switches rewrite text in place, so they should
    // not show up here.
    #[cfg(debug_assertions)]
    tracing::debug!("[i18n] Home render (lang={})", i18n.i18n().current());

    rsx! {
        main { id: "top", class: "page page-home",
            {hero(&i18n)}
            {projects(&i18n)}
            {about(&i18n)}
            {contact(&i18n)}
        }
    }
}

fn hero(i18n: &I18nContext) -> Element {
    rsx! {
        section { class: "hero",
            div {
                class: "hero__avatar",
                role: "img",
                "data-translate-title": "profile-image-alt",
                "data-translate-aria-label": "profile-image-alt",
                title: i18n.t("profile-image-alt"),
                aria_label: i18n.t("profile-image-alt"),
            }
            p { class: "hero__greeting", "data-translate": "greeting", {i18n.t("greeting")} }
            h1 { class: "hero__role", "data-translate": "role", {i18n.t("role")} }
            p { class: "hero__description", "data-translate": "hero-description", {i18n.t("hero-description")} }
            div { class: "hero__actions",
                a { class: "button button--primary", href: "#projects", "data-translate": "view-projects", {i18n.t("view-projects")} }
                a { class: "button button--ghost", href: "#contact", "data-translate": "contact-me", {i18n.t("contact-me")} }
            }
        }
    }
}

fn projects(i18n: &I18nContext) -> Element {
    let technologies = SKILL_GROUPS.len();

    rsx! {
        section { id: "projects", class: "projects",
            header { class: "projects__header",
                h2 { "data-translate": "my-projects", {i18n.t("my-projects")} }
                p { class: "projects__lead", "data-translate": "explore-portfolio", {i18n.t("explore-portfolio")} }
                p { "data-translate": "projects-description", {i18n.t("projects-description")} }
            }

            ul { class: "projects__features",
                { FEATURE_KEYS.iter().map(|key| rsx! {
                    li { key: "{key}", "data-translate": *key, {i18n.t(key)} }
                })}
            }

            div { class: "projects__stats",
                div { class: "projects__stat",
                    span { class: "projects__stat-value", "{PROJECT_COUNT}" }
                    span { class: "projects__stat-label", "data-translate": "projects-count", {i18n.t("projects-count")} }
                }
                div { class: "projects__stat",
                    span { class: "projects__stat-value", "{technologies}" }
                    span { class: "projects__stat-label", "data-translate": "technologies-count", {i18n.t("technologies-count")} }
                }
            }

            article { class: "project-card",
                p { class: "project-card__description", "data-translate": "project-description", {i18n.t("project-description")} }
                div { class: "project-card__actions",
                    a { class: "button button--primary", href: "#projects", "data-translate": "see-project", {i18n.t("see-project")} }
                    a { class: "button button--ghost", href: "#projects", "data-translate": "view-code", {i18n.t("view-code")} }
                    a { class: "button button--accent", href: "#projects", "data-translate": "view-live", {i18n.t("view-live")} }
                }
            }
        }
    }
}

fn about(i18n: &I18nContext) -> Element {
    rsx! {
        section { id: "about", class: "about",
            h2 { "data-translate": "about.title", {i18n.t("about.title")} }
            p { "data-translate": "about.summary", {i18n.t("about.summary")} }
            h3 { "data-translate": "about.skills.title", {i18n.t("about.skills.title")} }
            div { class: "about__skills",
                { SKILL_GROUPS.iter().map(|group| {
                    let title_key = format!("about.skills.{group}.title");
                    let items_key = format!("about.skills.{group}.items");
                    let title = i18n.t(&title_key);
                    let items = i18n.t(&items_key);
                    rsx! {
                        div { key: "{group}", class: "about__skill-group",
                            h4 { "data-translate": "{title_key}", "{title}" }
                            p { class: "about__skill-items", "data-translate": "{items_key}", "{items}" }
                        }
                    }
                })}
            }
        }
    }
}

fn contact(i18n: &I18nContext) -> Element {
    rsx! {
        section { id: "contact", class: "contact",
            h2 { "data-translate": "contact.title", {i18n.t("contact.title")} }
            p { "data-translate": "contact.description", {i18n.t("contact.description")} }
            form { class: "contact__form", onsubmit: move |evt: FormEvent| evt.prevent_default(),
                input {
                    r#type: "text",
                    name: "name",
                    "data-translate": "contact.name-placeholder",
                    placeholder: i18n.t("contact.name-placeholder"),
                }
                input {
                    r#type: "email",
                    name: "email",
                    "data-translate": "contact.email-placeholder",
                    placeholder: i18n.t("contact.email-placeholder"),
                }
                textarea {
                    name: "message",
                    rows: "5",
                    "data-translate": "contact.message-placeholder",
                    placeholder: i18n.t("contact.message-placeholder"),
                }
                button { r#type: "submit", class: "button button--primary",
                    span { "data-translate": "contact.send", {i18n.t("contact.send")} }
                }
            }
        }
    }
}
