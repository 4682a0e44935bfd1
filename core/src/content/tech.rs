//! Tech stack grid and its category filter

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TechCategory {
    #[default]
    All,
    Language,
    Frontend,
    Backend,
    Tools,
}

impl TechCategory {
    /// Filter buttons, in display order.
    pub const ALL: [TechCategory; 5] = [
        TechCategory::All,
        TechCategory::Language,
        TechCategory::Frontend,
        TechCategory::Backend,
        TechCategory::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TechCategory::All => "All",
            TechCategory::Language => "Language",
            TechCategory::Frontend => "Frontend",
            TechCategory::Backend => "Backend",
            TechCategory::Tools => "Tools",
        }
    }
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechItem {
    pub name: &'static str,
    /// Brand color as `#RRGGBB`
    pub color: &'static str,
    pub category: TechCategory,
}

impl TechItem {
    const fn new(name: &'static str, color: &'static str, category: TechCategory) -> Self {
        Self {
            name,
            color,
            category,
        }
    }
}

pub static TECH_STACK: &[TechItem] = &[
    TechItem::new("C++", "#00599C", TechCategory::Language),
    TechItem::new("Java", "#ED8B00", TechCategory::Language),
    TechItem::new("JavaScript", "#F7DF1E", TechCategory::Language),
    TechItem::new("TypeScript", "#3178C6", TechCategory::Language),
    TechItem::new("React", "#61DAFB", TechCategory::Frontend),
    TechItem::new("Next.js", "#000000", TechCategory::Frontend),
    TechItem::new("Tailwind", "#06B6D4", TechCategory::Frontend),
    TechItem::new("Node.js", "#339933", TechCategory::Backend),
    TechItem::new("Git", "#F05032", TechCategory::Tools),
    TechItem::new("GitHub", "#181717", TechCategory::Tools),
];

/// Items shown for the selected filter.
pub fn filter_tech(category: TechCategory) -> impl Iterator<Item = &'static TechItem> {
    TECH_STACK
        .iter()
        .filter(move |item| category == TechCategory::All || item.category == category)
}

/// Whether `color` is a `#RRGGBB` hex string.
pub(super) fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
