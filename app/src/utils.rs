//! Utility functions
//!
//! Class-name helpers shared by the section components.

use folio_core::content::Accent;

/// `"{prefix}-{accent}"`, e.g. `dot-emerald`.
pub fn accent_class(prefix: &str, accent: Accent) -> String {
    format!("{prefix}-{}", accent.name())
}

/// `base` plus `base--visible` while `visible`, for CSS transitions.
pub fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{base} {base}--visible")
    } else {
        base.to_string()
    }
}
