//! Contact cards, split into the professional and personal rows.

use super::{Accent, ContactAction, ContactCard, ContactIcon};

/// Discord handle offered through the copy button.
pub const DISCORD_USERNAME: &str = "_notNguyen";

pub static PROFESSIONAL_CONTACTS: &[ContactCard] = &[
    ContactCard {
        title: "Email",
        description: "Drop me a line for project inquiries or collaboration opportunities",
        icon: ContactIcon::Email,
        accent: Accent::Emerald,
        action: ContactAction::Link {
            href: "mailto:contact.nguyensynguyen@gmail.com",
            label: "Send Email",
        },
    },
    ContactCard {
        title: "LinkedIn",
        description: "Connect with me for professional networking and career discussions",
        icon: ContactIcon::LinkedIn,
        accent: Accent::Blue,
        action: ContactAction::Link {
            href: "https://linkedin.com/in/nguyensynguyen",
            label: "Connect",
        },
    },
    ContactCard {
        title: "GitHub",
        description: "Explore my projects and see what I've been building lately",
        icon: ContactIcon::GitHub,
        accent: Accent::Slate,
        action: ContactAction::Link {
            href: "https://github.com/KaitoJD",
            label: "View Profile",
        },
    },
];

pub static PERSONAL_CONTACTS: &[ContactCard] = &[
    ContactCard {
        title: "Discord",
        description: "Join me on Discord for casual chats and community discussions",
        icon: ContactIcon::Discord,
        accent: Accent::Indigo,
        action: ContactAction::Copy {
            username: DISCORD_USERNAME,
            label: "Copy Username",
        },
    },
    ContactCard {
        title: "Facebook",
        description: "Connect with me on Facebook for personal updates and conversations",
        icon: ContactIcon::Facebook,
        accent: Accent::Blue,
        action: ContactAction::Link {
            href: "https://facebook.com/kaito.dev",
            label: "Add Friend",
        },
    },
    ContactCard {
        title: "Chess.com",
        description: "Challenge me to a game of chess or check out my tournament history",
        icon: ContactIcon::Chess,
        accent: Accent::Emerald,
        action: ContactAction::Link {
            href: "https://chess.com/member/nsNguyen",
            label: "Challenge Me",
        },
    },
];
