use dioxus::prelude::*;
use folio_core::Section;

use crate::session::{TextRun, use_page};
use crate::utils::reveal_class;

#[component]
fn TypedText(runs: Vec<TextRun>, cursor: bool, strong: bool) -> Element {
    rsx! {
        for (i, run) in runs.iter().enumerate() {
            if run.highlighted {
                span {
                    key: "{i}",
                    class: if strong { "accent-text accent-strong" } else { "accent-text" },
                    "{run.text}"
                }
            } else {
                span { key: "{i}", "{run.text}" }
            }
        }
        if cursor {
            span { class: "accent-text typing-cursor", "|" }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let page = use_page();
    let typing = page.snapshot().typing;
    let offset = page.config().read().header_offset_px;

    let scroll = move |section: Section| {
        move |_: MouseEvent| {
            crate::api::scroll_to_element(section.id(), offset);
        }
    };

    let description_shown = typing.typing_description || typing.revealed_description > 0;

    rsx! {
        section { class: "hero",
            div { class: "hero-inner",
                h1 { class: reveal_class("hero-title", typing.started),
                    TypedText {
                        runs: page.title_runs(),
                        cursor: typing.typing_title && typing.cursor_visible,
                        strong: false,
                    }
                }
                p { class: reveal_class("hero-description", description_shown),
                    TypedText {
                        runs: page.description_runs(),
                        cursor: typing.typing_description && typing.cursor_visible,
                        strong: true,
                    }
                }
                div { class: reveal_class("hero-buttons", typing.buttons_visible),
                    button {
                        class: "button-primary",
                        onclick: scroll(Section::Timeline),
                        span { "View My Journey" }
                        i { class: "fa-solid fa-arrow-right button-icon" }
                    }
                    button {
                        class: "button-outline",
                        onclick: scroll(Section::Contact),
                        "Contact Me"
                    }
                }
            }
        }
    }
}
