//! Static page content
//!
//! Everything the sections render besides the hero text lives here as
//! immutable tables. [`validate_content`] checks the tables for mistakes a
//! compiler cannot catch (ratings out of range, malformed links, nav ids
//! with no matching section).

mod contacts;
mod skills;
mod tech;
mod timeline;

use std::collections::HashSet;
use std::fmt;

use crate::navigation::Section;

pub use contacts::{DISCORD_USERNAME, PERSONAL_CONTACTS, PROFESSIONAL_CONTACTS};
pub use skills::{FUN_FACTS, LEARNING_ITEMS, PERSONAL_TRAITS, SKILL_GROUPS};
pub use tech::{TECH_STACK, TechCategory, TechItem, filter_tech};
pub use timeline::TIMELINE;

// ─────────────────────────────────────────────────────────────────────────────
// Shared Types
// ─────────────────────────────────────────────────────────────────────────────

/// Palette name used by the stylesheet (`accent-emerald`, `dot-blue`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Emerald,
    Blue,
    Purple,
    Orange,
    Pink,
    Indigo,
    Violet,
    Slate,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Accent::Emerald => "emerald",
            Accent::Blue => "blue",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Pink => "pink",
            Accent::Indigo => "indigo",
            Accent::Violet => "violet",
            Accent::Slate => "slate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub label: &'static str,
    pub accent: Accent,
}

impl Tag {
    pub const fn new(label: &'static str, accent: Accent) -> Self {
        Self { label, accent }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub tags: &'static [Tag],
    /// Side of the center line on wide screens
    pub side: Side,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    People,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRating {
    pub name: &'static str,
    pub filled: u8,
    pub total: u8,
    pub accent: Accent,
}

impl SkillRating {
    pub const fn new(name: &'static str, filled: u8, total: u8, accent: Accent) -> Self {
        Self {
            name,
            filled,
            total,
            accent,
        }
    }

    /// One flag per dot, filled dots first.
    pub fn dots(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.total).map(|i| i < self.filled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: SkillIcon,
    pub skills: &'static [SkillRating],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalTrait {
    pub label: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningItem {
    pub text: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactIcon {
    Email,
    LinkedIn,
    GitHub,
    Discord,
    Facebook,
    Chess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    Link {
        href: &'static str,
        label: &'static str,
    },
    /// Copy a username instead of navigating
    Copy {
        username: &'static str,
        label: &'static str,
    },
}

impl ContactAction {
    pub fn label(&self) -> &'static str {
        match self {
            ContactAction::Link { label, .. } | ContactAction::Copy { label, .. } => *label,
        }
    }

    /// Mail links open in place; everything else opens a new tab.
    pub fn opens_new_tab(&self) -> bool {
        matches!(self, ContactAction::Link { href, .. } if !href.starts_with("mailto:"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ContactIcon,
    pub accent: Accent,
    pub action: ContactAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "About", section_id: "about" },
    NavItem { label: "Timeline", section_id: "timeline" },
    NavItem { label: "Contact", section_id: "contact" },
];

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

/// A problem found in one of the content tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIssue {
    pub table: &'static str,
    pub message: String,
}

impl ContentIssue {
    fn new(table: &'static str, message: impl Into<String>) -> Self {
        Self {
            table,
            message: message.into(),
        }
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.table, self.message)
    }
}

/// Check every built-in table.
pub fn validate_content() -> Vec<ContentIssue> {
    let mut issues = Vec::new();
    check_skills(SKILL_GROUPS, &mut issues);
    check_timeline(TIMELINE, &mut issues);
    check_nav(NAV_ITEMS, &mut issues);
    check_contacts(PROFESSIONAL_CONTACTS, &mut issues);
    check_contacts(PERSONAL_CONTACTS, &mut issues);
    check_tech(TECH_STACK, &mut issues);
    issues
}

fn check_skills(groups: &[SkillGroup], issues: &mut Vec<ContentIssue>) {
    for group in groups {
        if group.skills.is_empty() {
            issues.push(ContentIssue::new("skills", format!("group '{}' has no skills", group.title)));
        }
        for skill in group.skills {
            if skill.total == 0 || skill.filled > skill.total {
                issues.push(ContentIssue::new(
                    "skills",
                    format!("'{}' rated {}/{}", skill.name, skill.filled, skill.total),
                ));
            }
        }
    }
}

fn check_timeline(entries: &[TimelineEntry], issues: &mut Vec<ContentIssue>) {
    for entry in entries {
        if entry.items.is_empty() || entry.items.iter().any(|item| item.trim().is_empty()) {
            issues.push(ContentIssue::new(
                "timeline",
                format!("{} '{}' has empty items", entry.year, entry.title),
            ));
        }
        if entry.year.parse::<u16>().is_err() {
            issues.push(ContentIssue::new("timeline", format!("bad year '{}'", entry.year)));
        }
    }
}

fn check_nav(items: &[NavItem], issues: &mut Vec<ContentIssue>) {
    let mut seen = HashSet::new();
    for item in items {
        if let Err(e) = item.section_id.parse::<Section>() {
            issues.push(ContentIssue::new("navigation", e.to_string()));
        }
        if !seen.insert(item.section_id) {
            issues.push(ContentIssue::new(
                "navigation",
                format!("duplicate section id '{}'", item.section_id),
            ));
        }
    }
}

fn check_contacts(cards: &[ContactCard], issues: &mut Vec<ContentIssue>) {
    for card in cards {
        match card.action {
            ContactAction::Link { href, .. } if !is_well_formed_link(href) => {
                issues.push(ContentIssue::new(
                    "contacts",
                    format!("'{}' has malformed link '{href}'", card.title),
                ));
            }
            ContactAction::Copy { username, .. } if username.trim().is_empty() => {
                issues.push(ContentIssue::new(
                    "contacts",
                    format!("'{}' copies an empty username", card.title),
                ));
            }
            _ => {}
        }
    }
}

fn check_tech(items: &[TechItem], issues: &mut Vec<ContentIssue>) {
    for item in items {
        if item.category == TechCategory::All {
            issues.push(ContentIssue::new(
                "tech",
                format!("'{}' uses the All pseudo-category", item.name),
            ));
        }
        if !tech::is_hex_color(item.color) {
            issues.push(ContentIssue::new(
                "tech",
                format!("'{}' has bad color '{}'", item.name, item.color),
            ));
        }
    }
}

/// `https://host/...` or `mailto:user@host`.
pub fn is_well_formed_link(href: &str) -> bool {
    if let Some(address) = href.strip_prefix("mailto:") {
        return address
            .split_once('@')
            .is_some_and(|(user, host)| !user.is_empty() && host.contains('.'));
    }
    href.strip_prefix("https://")
        .and_then(|rest| rest.split('/').next())
        .is_some_and(|host| host.contains('.') && !host.contains(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_tables_are_clean() {
        let issues = validate_content();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn skill_out_of_range_is_reported() {
        static BAD: &[SkillGroup] = &[SkillGroup {
            title: "Broken",
            icon: SkillIcon::Code,
            skills: &[SkillRating::new("Overrated", 6, 5, Accent::Blue)],
        }];
        let mut issues = Vec::new();
        check_skills(BAD, &mut issues);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "[skills] 'Overrated' rated 6/5");
    }

    #[test]
    fn duplicate_and_unknown_nav_ids() {
        static BAD: &[NavItem] = &[
            NavItem { label: "About", section_id: "about" },
            NavItem { label: "Again", section_id: "about" },
            NavItem { label: "Blog", section_id: "blog" },
        ];
        let mut issues = Vec::new();
        check_nav(BAD, &mut issues);
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn link_shapes() {
        assert!(is_well_formed_link("https://github.com/KaitoJD"));
        assert!(is_well_formed_link("mailto:contact.nguyensynguyen@gmail.com"));
        assert!(!is_well_formed_link("http://github.com"));
        assert!(!is_well_formed_link("mailto:nobody"));
        assert!(!is_well_formed_link("https://localhost"));
    }

    #[test]
    fn skill_dots_fill_from_the_left() {
        let dots: Vec<bool> = SkillRating::new("x", 2, 4, Accent::Pink).dots().collect();
        assert_eq!(dots, [true, true, false, false]);
    }

    #[test]
    fn only_discord_copies() {
        let copy_cards: Vec<&str> = PROFESSIONAL_CONTACTS
            .iter()
            .chain(PERSONAL_CONTACTS)
            .filter(|card| matches!(card.action, ContactAction::Copy { .. }))
            .map(|card| card.title)
            .collect();
        assert_eq!(copy_cards, ["Discord"]);
    }

    #[test]
    fn default_copy_username_matches_card() {
        let config = folio_types::NotificationConfig::default();
        assert_eq!(config.username, DISCORD_USERNAME);
    }

    #[test]
    fn mail_link_stays_in_tab() {
        assert!(!PROFESSIONAL_CONTACTS[0].action.opens_new_tab());
        assert!(PROFESSIONAL_CONTACTS[1].action.opens_new_tab());
    }

    #[test]
    fn nav_items_cover_every_section() {
        let ids: Vec<&str> = NAV_ITEMS.iter().map(|item| item.section_id).collect();
        let sections: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, sections);
    }
}
