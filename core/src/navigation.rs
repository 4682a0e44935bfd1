//! In-page sections and scroll math

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section '{0}'")]
pub struct SectionError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Timeline,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Timeline, Section::Contact];

    /// Element id of the section anchor.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Timeline => "timeline",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Timeline => "Timeline",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#');
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| SectionError(s.to_string()))
    }
}

/// Document scroll position that puts a section just below the fixed header.
pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    (offset_top - header_offset).max(0.0)
}

/// Prefix an asset path with the deployment base path, if any.
pub fn with_base_path(base_path: Option<&str>, path: &str) -> String {
    let path = path.trim_start_matches('/');
    match base_path.map(|base| base.trim_end_matches('/')) {
        Some(base) if !base.is_empty() => format!("{base}/{path}"),
        _ => format!("/{path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_sections() {
        assert_eq!("about".parse::<Section>(), Ok(Section::About));
        assert_eq!("#timeline".parse::<Section>(), Ok(Section::Timeline));
        assert_eq!(" contact ".parse::<Section>(), Ok(Section::Contact));
    }

    #[test]
    fn rejects_unknown_sections() {
        let err = "projects".parse::<Section>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section 'projects'");
    }

    #[test]
    fn ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(600.0, 80.0), 520.0);
        assert_eq!(scroll_target(40.0, 80.0), 0.0);
    }

    #[test]
    fn base_path_prefix() {
        assert_eq!(with_base_path(None, "avatar.png"), "/avatar.png");
        assert_eq!(with_base_path(Some("/folio/"), "/avatar.png"), "/folio/avatar.png");
        assert_eq!(with_base_path(Some(""), "avatar.png"), "/avatar.png");
    }
}
