use dioxus::prelude::*;
use folio_core::Section;
use folio_core::content::{FUN_FACTS, LEARNING_ITEMS, PERSONAL_TRAITS, SKILL_GROUPS, SkillRating};

use crate::components::icons::skill_icon;
use crate::components::tech_stack::TechStack;
use crate::utils::accent_class;

#[component]
fn SkillDots(skill: SkillRating) -> Element {
    let filled = format!("dot {}", accent_class("dot", skill.accent));
    let dots: Vec<&str> = skill
        .dots()
        .map(|on| if on { filled.as_str() } else { "dot dot-empty" })
        .collect();

    rsx! {
        div { class: "skill-row",
            span { class: "skill-name", "{skill.name}" }
            div { class: "skill-dots",
                for (i, class) in dots.into_iter().enumerate() {
                    div { key: "{i}", class: "{class}" }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: Section::About.id(), class: "section section-light",
            div { class: "section-header",
                h2 { "About Me" }
                div { class: "section-rule" }
                p { "Passionate about crafting digital experiences that make a difference" }
            }

            div { class: "about-grid",
                div { class: "about-story",
                    div { class: "card card-gradient",
                        h3 { span { class: "dot dot-emerald" } "Who I Am" }
                        p {
                            "Hello! I'm "
                            span { class: "accent-text accent-strong", "Nguyen Sy Nguyen" }
                            ", a passionate Software Engineering student at "
                            strong { "FPT University" }
                            " with a deep love for creating innovative digital solutions that solve real-world problems."
                        }
                        p {
                            "My journey in technology began with a curiosity about how things work, which evolved into a passion \
                             for building them. From winning provincial physics competitions to managing developer communities, \
                             I've always been driven by the desire to learn, create, and share knowledge."
                        }
                    }

                    div { class: "skill-groups",
                        for group in SKILL_GROUPS {
                            div { key: "{group.title}", class: "card",
                                h4 {
                                    i { class: format!("{} heading-icon", skill_icon(group.icon)) }
                                    "{group.title}"
                                }
                                for skill in group.skills {
                                    SkillDots { key: "{skill.name}", skill: *skill }
                                }
                            }
                        }
                    }

                    div { class: "traits",
                        for personal in PERSONAL_TRAITS {
                            span {
                                key: "{personal.label}",
                                class: format!("trait {}", accent_class("trait", personal.accent)),
                                span { class: format!("dot {}", accent_class("dot", personal.accent)) }
                                "{personal.label}"
                            }
                        }
                    }
                }

                div { class: "about-extras",
                    div { class: "card",
                        h3 {
                            i { class: "fa-solid fa-flask heading-icon" }
                            "Tech Stack & Tools"
                        }
                        TechStack {}
                    }

                    div { class: "card card-learning",
                        h4 {
                            i { class: "fa-solid fa-bolt heading-icon" }
                            "Currently Learning"
                        }
                        for item in LEARNING_ITEMS {
                            div { key: "{item.text}", class: "learning-item",
                                span { class: format!("dot {}", accent_class("dot", item.accent)) }
                                "{item.text}"
                            }
                        }
                    }

                    div { class: "card card-facts",
                        h4 {
                            i { class: "fa-regular fa-face-smile heading-icon" }
                            "Fun Facts"
                        }
                        for fact in FUN_FACTS {
                            p { key: "{fact}", "{fact}" }
                        }
                    }
                }
            }
        }
    }
}
