use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod error;
mod playback;
mod routing;

use components::AppShell;
use config::AppConfig;
use playback::PageMedia;

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    let config = AppConfig::from_page();
    if let Err(err) = dioxus::logger::init(config.log_level()) {
        eprintln!("logging disabled: {err}");
    }
    tracing::info!("catalog at {}", config.api_base);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let media = use_hook(PageMedia::attach);

    rsx! {
        document::Title { "beets" }
        document::Stylesheet { href: APP_CSS }

        if let Some(media) = media {
            AppShell { media }
        } else {
            div { class: "unavailable", "Audio playback is not available in this browser." }
        }
    }
}
