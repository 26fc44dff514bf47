use dioxus::{
    logger::tracing::{Level, warn},
    prelude::*,
};

mod api;
mod app_settings;
mod message;
mod storage;
mod topics;
mod ui;
mod utils;

use app_settings::AppSettings;
use storage::{Storage, get_storage};
use ui::chat::Chat;
use ui::landing::Landing;
use ui::settings::Settings;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).unwrap();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let _settings: Signal<Option<AppSettings>> = use_context_provider(|| Signal::new(None));
    // Load persisted settings (or defaults) into the context before routing.
    let init = use_resource(move || async move {
        let storage = match get_storage().await {
            Ok(s) => Some(s),
            Err(e) => {
                warn!("Could not get storage: {e:?}");
                None
            }
        };
        let stored = match &storage {
            Some(st) => st.load_settings().await.unwrap_or_else(|e| {
                warn!("Could not load settings: {e:?}");
                None
            }),
            None => None,
        };
        let mut settings_ctx = consume_context::<Signal<Option<AppSettings>>>();
        settings_ctx.set(Some(stored.unwrap_or_default()));
    });
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if init.read().is_none() {
            "Loading..."
        } else {
            Router::<Route> {}
        }
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Landing {},
    #[route("/chat")]
    Chat {},
    #[route("/settings")]
    Settings { },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        "Could not find the page you are looking for."
        Link { to: Route::Landing {}, "Go To Home" }
    }
}
