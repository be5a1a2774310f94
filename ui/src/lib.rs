//! Shared UI crate for folio. Localization, theming and the page views live
//! here; platform crates only add routing and launch.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod theme;
pub mod views;

pub mod components {
    // Site header with language and theme switches (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

#[cfg(test)]
mod test_utils;

/// Shared theme stylesheet, including the language transition classes.
pub const MAIN_CSS: Asset = asset!("/assets/theme/main.css");
