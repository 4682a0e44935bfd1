use dioxus::prelude::*;
use folio_core::Section;
use folio_core::content::NAV_ITEMS;

use crate::session::{MENU_BUTTON_ID, MENU_ID, MenuHandle, use_mobile_menu, use_page};
use crate::utils::reveal_class;

#[component]
fn NavButtons(menu: MenuHandle, class: &'static str) -> Element {
    rsx! {
        for item in NAV_ITEMS {
            button {
                key: "{item.section_id}",
                class: class,
                onclick: move |_| match item.section_id.parse::<Section>() {
                    Ok(section) => menu.navigate(section),
                    Err(e) => tracing::warn!(error = %e, "Nav item has no section"),
                },
                "{item.label}"
            }
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let page = use_page();
    let menu = use_mobile_menu(page);
    let sequence = page.snapshot().sequence;
    let hub_url = page.config().read().hub_url.clone();
    let open = menu.is_open();

    rsx! {
        nav { class: reveal_class("navbar", sequence.header_visible),
            div { class: "navbar-inner",
                a {
                    class: reveal_class("back-link", sequence.back_button_visible),
                    href: "{hub_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    span { class: "accent-text", "<<" }
                    " Back to Hub"
                }

                div { class: reveal_class("nav-desktop", sequence.header_visible),
                    NavButtons { menu, class: "nav-link" }
                }

                div { class: reveal_class("nav-mobile", sequence.header_visible),
                    button {
                        id: MENU_BUTTON_ID,
                        class: "mobile-menu-button",
                        aria_label: "Toggle menu",
                        aria_expanded: if open { "true" } else { "false" },
                        aria_controls: MENU_ID,
                        onclick: move |_| menu.toggle(),
                        i { class: "fa-solid fa-bars" }
                    }
                    div {
                        id: MENU_ID,
                        class: if open { "mobile-menu mobile-menu--open" } else { "mobile-menu" },
                        NavButtons { menu, class: "mobile-menu-item" }
                    }
                }
            }
        }
    }
}
