//! "Copied to clipboard" toast.
//!
//! Rendered from the page session's notification phase: mounted off-screen,
//! slid in on the next tick, slid out before removal.

use dioxus::prelude::*;
use folio_core::NotificationPhase;

use crate::session::use_page;

#[component]
pub fn CopyNotification() -> Element {
    let page = use_page();
    let phase = page.snapshot().notification;
    if phase == NotificationPhase::Hidden {
        return rsx! {};
    }

    let visible = phase == NotificationPhase::Entered;
    let running = phase != NotificationPhase::Mounted;
    let display_ms = page.config().read().notification.display_duration_ms;

    rsx! {
        div {
            class: if visible { "copy-toast copy-toast--visible" } else { "copy-toast" },
            role: "status",
            aria_live: "polite",
            div { class: "copy-toast-body",
                span { class: "copy-toast-icon",
                    i { class: "fa-solid fa-check" }
                }
                span { class: "copy-toast-message", "Discord username copied to clipboard!" }
                div {
                    class: if running { "copy-toast-progress copy-toast-progress--run" } else { "copy-toast-progress" },
                    style: "transition-duration: {display_ms}ms",
                }
            }
        }
    }
}
