use dioxus::prelude::*;
use folio_core::TechCategory;
use folio_core::content::filter_tech;

use crate::components::icons::tech_icon;

#[component]
pub fn TechStack() -> Element {
    let mut active = use_signal(TechCategory::default);
    let mut hovered = use_signal(|| None::<usize>);
    let mut hint_hovered = use_signal(|| false);

    let category = active();
    let items: Vec<_> = filter_tech(category).collect();
    let summary = match category {
        TechCategory::All => format!("Showing {} technologies", items.len()),
        other => format!("Showing {} technologies in {other}", items.len()),
    };

    rsx! {
        div { class: "tech-stack",
            div { class: "tech-filters",
                for option in TechCategory::ALL {
                    button {
                        key: "{option}",
                        class: if option == category { "tech-filter tech-filter--active" } else { "tech-filter" },
                        onclick: move |_| {
                            active.set(option);
                            hovered.set(None);
                        },
                        "{option}"
                    }
                }
            }

            div {
                class: if hint_hovered() { "tech-grid-scroll tech-grid-scroll--hinted" } else { "tech-grid-scroll" },
                role: "region",
                aria_label: "Technology stack",
                tabindex: "0",
                div { class: "tech-grid",
                    for (index, tech) in items.iter().enumerate() {
                        div {
                            key: "{tech.name}",
                            class: if hovered() == Some(index) { "tech-card tech-card--hovered" } else { "tech-card" },
                            role: "button",
                            tabindex: "0",
                            aria_label: "{tech.name} - {tech.category} technology",
                            onmouseenter: move |_| hovered.set(Some(index)),
                            onmouseleave: move |_| hovered.set(None),
                            onfocus: move |_| hovered.set(Some(index)),
                            onblur: move |_| hovered.set(None),
                            i { class: format!("{} tech-icon", tech_icon(tech.name)), style: "color: {tech.color}" }
                            span { class: "tech-name", "{tech.name}" }
                            span { class: "tech-badge", "{tech.category}" }
                        }
                    }
                }
            }

            p {
                class: "tech-hint",
                onmouseenter: move |_| hint_hovered.set(true),
                onmouseleave: move |_| hint_hovered.set(false),
                i { class: "fa-solid fa-arrows-up-down" }
                span { "Scroll to explore all technologies" }
            }
            p { class: "tech-summary", "{summary}" }
        }
    }
}
