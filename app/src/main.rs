#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod session;
mod utils;

use folio_core::{SiteConfig, SiteConfigExt};

fn main() {
    // Only the log level is needed up front; the app reports config errors itself
    let debug = SiteConfig::from_toml_str(app::SITE_TOML).is_ok_and(|config| config.debug_logging);
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {e}");
    }

    for issue in folio_core::validate_content() {
        tracing::warn!(%issue, "Content issue");
    }

    dioxus::launch(app::App);
}
