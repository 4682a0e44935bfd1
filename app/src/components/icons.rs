//! Font Awesome class names for content icons.

use folio_core::content::{ContactIcon, SkillIcon};

pub fn contact_icon(icon: ContactIcon) -> &'static str {
    match icon {
        ContactIcon::Email => "fa-solid fa-envelope",
        ContactIcon::LinkedIn => "fa-brands fa-linkedin",
        ContactIcon::GitHub => "fa-brands fa-github",
        ContactIcon::Discord => "fa-brands fa-discord",
        ContactIcon::Facebook => "fa-brands fa-facebook",
        ContactIcon::Chess => "fa-solid fa-chess-knight",
    }
}

pub fn skill_icon(icon: SkillIcon) -> &'static str {
    match icon {
        SkillIcon::Code => "fa-solid fa-code",
        SkillIcon::People => "fa-solid fa-users",
    }
}

/// Brand icon for a tech stack entry.
pub fn tech_icon(name: &str) -> &'static str {
    match name {
        "Java" => "fa-brands fa-java",
        "JavaScript" | "TypeScript" => "fa-brands fa-js",
        "React" => "fa-brands fa-react",
        "Node.js" => "fa-brands fa-node-js",
        "Git" => "fa-brands fa-git-alt",
        "GitHub" => "fa-brands fa-github",
        "Tailwind" => "fa-solid fa-wind",
        _ => "fa-solid fa-code",
    }
}
