use dioxus::prelude::*;
use folio_core::content::{ContactAction, ContactCard, PERSONAL_CONTACTS, PROFESSIONAL_CONTACTS};
use folio_core::{CopyOutcome, Section, copy_with_fallback};

use crate::api::{BrowserAlert, BrowserClipboard};
use crate::components::icons::contact_icon;
use crate::session::use_page;
use crate::utils::accent_class;

#[component]
fn ContactCardView(card: ContactCard) -> Element {
    let page = use_page();
    let icon = format!("{} {}", contact_icon(card.icon), accent_class("icon", card.accent));
    let button = format!("contact-button {}", accent_class("button", card.accent));

    let action = match card.action {
        ContactAction::Link { href, label } => {
            let (target, rel) = if card.action.opens_new_tab() {
                (Some("_blank"), Some("noopener noreferrer"))
            } else {
                (None, None)
            };
            rsx! {
                a { class: "{button}", href: href, target: target, rel: rel, "{label}" }
            }
        }
        ContactAction::Copy { label, .. } => {
            // The configured username wins over the card's built-in one
            let username = page.config().read().notification.username.clone();
            let copied = username.clone();
            rsx! {
                div { class: "contact-copy",
                    p { class: "contact-username", "{username}" }
                    button {
                        class: "{button}",
                        onclick: move |_| {
                            let username = copied.clone();
                            spawn(async move {
                                let outcome =
                                    copy_with_fallback(&BrowserClipboard, &BrowserAlert, &username).await;
                                if outcome == CopyOutcome::Copied {
                                    page.notify_copied();
                                }
                            });
                        },
                        i { class: "fa-regular fa-copy button-icon" }
                        "{label}"
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "contact-card",
            div { class: "contact-icon",
                i { class: "{icon}" }
            }
            h3 { "{card.title}" }
            p { class: "contact-description", "{card.description}" }
            {action}
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: Section::Contact.id(), class: "section section-light",
            div { class: "section-header",
                h2 { "Let's Connect" }
                div { class: "section-rule" }
                p {
                    "Ready to collaborate on your next project, discuss opportunities, or just have a chat? Find me on these platforms!"
                }
            }

            div { class: "contact-group",
                h3 {
                    i { class: "fa-solid fa-briefcase heading-icon" }
                    "Professional Contact"
                }
                div { class: "contact-grid",
                    for card in PROFESSIONAL_CONTACTS {
                        ContactCardView { key: "{card.title}", card: *card }
                    }
                }
            }

            div { class: "contact-group",
                h3 {
                    i { class: "fa-regular fa-face-smile heading-icon" }
                    "Personal & Gaming"
                }
                div { class: "contact-grid",
                    for card in PERSONAL_CONTACTS {
                        ContactCardView { key: "{card.title}", card: *card }
                    }
                }
            }

            div { class: "contact-cta",
                h3 { "Ready to Start a Project?" }
                p {
                    "I'm always excited to work on innovative projects and help bring ideas to life. \
                     Let's discuss how we can collaborate!"
                }
                div { class: "cta-buttons",
                    a {
                        class: "button-primary",
                        href: "mailto:contact.nguyensynguyen@gmail.com",
                        i { class: "fa-solid fa-envelope button-icon" }
                        "Send Me an Email"
                    }
                    a {
                        class: "button-outline",
                        href: "https://linkedin.com/in/nguyensynguyen",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        i { class: "fa-brands fa-linkedin button-icon" }
                        "Let's Chat on LinkedIn"
                    }
                }
            }
        }
    }
}
