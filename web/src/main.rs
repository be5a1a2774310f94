use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::i18n::use_i18n_provider;
use ui::theme::use_theme_provider;
use ui::views::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Both contexts live at the root so the navbar and every view share them.
    use_i18n_provider();
    use_theme_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
