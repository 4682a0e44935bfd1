use dioxus::prelude::*;
use folio_core::navigation::with_base_path;
use folio_core::{SiteConfig, SiteConfigExt};

use crate::components::{
    About, Contact, CopyNotification, Footer, Hero, InteractionOverlay, LoadingOverlay, Navbar,
    Timeline,
};
use crate::session::{use_interaction_blocker, use_page_provider};

static CSS: Asset = asset!("/assets/styles.css");
const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Build-time site configuration.
pub const SITE_TOML: &str = include_str!("../site.toml");

#[component]
pub fn App() -> Element {
    let config = use_hook(|| SiteConfig::load_or_default(SITE_TOML));
    let page = use_page_provider(&config);
    use_interaction_blocker(page);

    let favicon = with_base_path(config.base_path.as_deref(), "favicon.svg");

    rsx! {
        document::Stylesheet { href: FONT_AWESOME }
        document::Stylesheet { href: CSS }
        document::Link { rel: "icon", href: "{favicon}" }
        document::Title { "Nguyen Sy Nguyen | Portfolio" }

        InteractionOverlay {}
        LoadingOverlay {}
        Navbar {}
        main { class: "page",
            Hero {}
            About {}
            Timeline {}
            Contact {}
        }
        Footer {}
        CopyNotification {}
    }
}
