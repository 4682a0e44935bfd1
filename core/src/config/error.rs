//! Error types for site configuration

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize site config")]
    Serialize(#[from] toml::ser::Error),

    #[error("{field} must not be empty")]
    EmptyText { field: &'static str },

    #[error("{field} '{needle}' does not occur in the text it highlights")]
    HighlightNotFound { field: &'static str, needle: String },

    #[error("{field} variation {value} is outside [0, 1)")]
    InvalidVariation { field: &'static str, value: f64 },

    #[error("invalid timing for {field}: {reason}")]
    InvalidTiming { field: &'static str, reason: String },
}
