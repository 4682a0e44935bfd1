use dioxus::prelude::*;
use folio_core::Section;
use folio_core::content::{Side, TIMELINE, TimelineEntry};

use crate::utils::accent_class;

#[component]
fn TimelineItem(entry: TimelineEntry) -> Element {
    let side = match entry.side {
        Side::Left => "timeline-item timeline-left",
        Side::Right => "timeline-item timeline-right",
    };
    let accent = accent_class("accent", entry.accent);

    rsx! {
        div { class: side,
            div { class: "timeline-branch" }
            div { class: "timeline-junction" }
            div { class: "timeline-card {accent}",
                div { class: "timeline-year", "{entry.year}" }
                h3 { "{entry.title}" }
                div { class: "timeline-items",
                    for (i, item) in entry.items.iter().enumerate() {
                        p { key: "{i}", "• {item}" }
                    }
                }
                div { class: "timeline-tags",
                    for tag in entry.tags {
                        span {
                            key: "{tag.label}",
                            class: format!("tag {}", accent_class("tag", tag.accent)),
                            "{tag.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Timeline() -> Element {
    rsx! {
        section { id: Section::Timeline.id(), class: "section section-muted",
            div { class: "section-header",
                h2 { "My Journey" }
                div { class: "section-rule" }
                p { "A timeline of my achievements, experiences, and milestones." }
            }

            div { class: "timeline",
                div { class: "timeline-trunk" }
                for entry in TIMELINE {
                    TimelineItem { key: "{entry.year}-{entry.title}", entry: *entry }
                }
                div { class: "timeline-root",
                    div { class: "timeline-root-badge",
                        i { class: "fa-solid fa-bolt" }
                    }
                    p { class: "accent-text", "The Beginning" }
                    p { class: "timeline-root-caption", "My journey starts here" }
                }
            }
        }
    }
}
