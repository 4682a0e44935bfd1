use dioxus::prelude::*;

use crate::session::use_page;

/// Transparent layer that swallows pointer input until the intro completes.
#[component]
pub fn InteractionOverlay() -> Element {
    let page = use_page();
    if page.is_animations_complete() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "interaction-overlay",
            aria_hidden: "true",
            onwheel: move |e| e.prevent_default(),
            ontouchmove: move |e| e.prevent_default(),
        }
    }
}
