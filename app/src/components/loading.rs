use dioxus::prelude::*;

use crate::session::use_page;

#[component]
pub fn LoadingOverlay() -> Element {
    let page = use_page();
    let snapshot = page.snapshot();
    if !snapshot.loading_visible {
        return rsx! {};
    }

    let (progress, status) = page.loading_status();
    let percent = progress.round();
    let announcement = if snapshot.loading_done {
        "Loading complete".to_string()
    } else {
        format!("Loading progress: {percent} percent complete")
    };

    rsx! {
        div { class: "loading-screen",
            div { class: "loading-inner",
                h2 { class: "loading-title", "Loading..." }
                div {
                    class: "loading-track",
                    role: "progressbar",
                    aria_valuemin: "0",
                    aria_valuemax: "100",
                    aria_valuenow: "{percent}",
                    aria_label: "Loading progress",
                    div { class: "loading-bar", style: "width: {progress}%" }
                }
                p { class: "loading-status",
                    span { class: "accent-text", ">>" }
                    " {status}"
                }
                div { class: "sr-only", aria_live: "polite", aria_atomic: "true", "{announcement}" }
                div { class: "loading-dots",
                    for (i, delay) in ["0s", "0.1s", "0.2s"].into_iter().enumerate() {
                        div { key: "{i}", class: "loading-dot", style: "animation-delay: {delay}" }
                    }
                }
            }
        }
    }
}
