use dioxus::prelude::*;

use crate::api;

#[component]
pub fn Footer() -> Element {
    let year = use_hook(api::current_year);

    rsx! {
        footer { class: "footer",
            p { "© {year} Nguyen Sy Nguyen. All rights reserved." }
        }
    }
}
