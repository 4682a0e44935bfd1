//! Site configuration
//!
//! Re-exports the shared types from folio-types and adds parsing and
//! validation on top of them.

mod error;

pub use error::ConfigError;
pub use folio_types::{
    IncrementRange, IntroConfig, LoadingConfig, MIN_TYPING_DELAY_MS, NotificationConfig,
    SiteConfig, TypingSpeed,
};

use crate::typing::highlight_range;

// ─────────────────────────────────────────────────────────────────────────────
// SiteConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for parsing and checking `site.toml`
pub trait SiteConfigExt: Sized {
    fn from_toml_str(source: &str) -> Result<Self, ConfigError>;
    fn to_toml_string(&self) -> Result<String, ConfigError>;
    /// Every problem found, empty when the config is usable.
    fn validate(&self) -> Vec<ConfigError>;
    /// Parse and validate, falling back to defaults (with a log line) on any problem.
    fn load_or_default(source: &str) -> Self;
}

impl SiteConfigExt for SiteConfig {
    fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_intro(&self.intro, &mut errors);
        check_loading(&self.loading, &mut errors);
        check_notification(&self.notification, &mut errors);

        if !is_non_negative(self.header_offset_px) {
            errors.push(ConfigError::InvalidTiming {
                field: "header_offset_px",
                reason: format!("{} is negative", self.header_offset_px),
            });
        }
        if self.hub_url.trim().is_empty() {
            errors.push(ConfigError::EmptyText { field: "hub_url" });
        }
        errors
    }

    fn load_or_default(source: &str) -> Self {
        let config = match Self::from_toml_str(source) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Site config unreadable, using defaults");
                return Self::default();
            }
        };

        let errors = config.validate();
        if errors.is_empty() {
            return config;
        }
        for e in &errors {
            tracing::error!(error = %e, "Invalid site config");
        }
        tracing::warn!(count = errors.len(), "Falling back to default site config");
        Self::default()
    }
}

/// False for negatives and NaN.
fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}

fn check_intro(intro: &IntroConfig, errors: &mut Vec<ConfigError>) {
    if intro.title.is_empty() {
        errors.push(ConfigError::EmptyText { field: "intro.title" });
    }
    if intro.description.is_empty() {
        errors.push(ConfigError::EmptyText { field: "intro.description" });
    }

    for (field, text, needle) in [
        ("intro.highlighted_name", &intro.title, &intro.highlighted_name),
        ("intro.highlighted_phrase", &intro.description, &intro.highlighted_phrase),
    ] {
        if !needle.is_empty() && highlight_range(text, needle).is_none() {
            errors.push(ConfigError::HighlightNotFound {
                field,
                needle: needle.clone(),
            });
        }
    }

    if let Some(greeting) = &intro.greeting
        && !intro.title.starts_with(greeting.as_str())
    {
        errors.push(ConfigError::HighlightNotFound {
            field: "intro.greeting",
            needle: greeting.clone(),
        });
    }

    for (field, speed) in [
        ("intro.title_speed", intro.title_speed),
        ("intro.greeting_pause", intro.greeting_pause),
        ("intro.title_pause", intro.title_pause),
        ("intro.description_speed", intro.description_speed),
    ] {
        check_speed(field, speed, errors);
    }

    if !is_non_negative(intro.min_delay_ms) {
        errors.push(ConfigError::InvalidTiming {
            field: "intro.min_delay_ms",
            reason: format!("{} is negative", intro.min_delay_ms),
        });
    }
}

fn check_speed(field: &'static str, speed: TypingSpeed, errors: &mut Vec<ConfigError>) {
    if !is_non_negative(speed.base_ms) {
        errors.push(ConfigError::InvalidTiming {
            field,
            reason: format!("base {} is negative", speed.base_ms),
        });
    }
    if !(0.0..1.0).contains(&speed.variation) {
        errors.push(ConfigError::InvalidVariation {
            field,
            value: speed.variation,
        });
    }
}

fn check_loading(loading: &LoadingConfig, errors: &mut Vec<ConfigError>) {
    if loading.tick_interval_ms == 0 {
        errors.push(ConfigError::InvalidTiming {
            field: "loading.tick_interval_ms",
            reason: "must be positive".to_string(),
        });
    }
    if !(0.0..=100.0).contains(&loading.fast_threshold) {
        errors.push(ConfigError::InvalidTiming {
            field: "loading.fast_threshold",
            reason: format!("{} is outside [0, 100]", loading.fast_threshold),
        });
    }
    for (field, range) in [
        ("loading.fast_increment", loading.fast_increment),
        ("loading.slow_increment", loading.slow_increment),
    ] {
        if !(range.min > 0.0 && range.min <= range.max) {
            errors.push(ConfigError::InvalidTiming {
                field,
                reason: format!("range {}..={} must be positive and ordered", range.min, range.max),
            });
        }
    }
}

fn check_notification(notification: &NotificationConfig, errors: &mut Vec<ConfigError>) {
    if notification.username.trim().is_empty() {
        errors.push(ConfigError::EmptyText { field: "notification.username" });
    }
    if notification.display_duration_ms <= notification.enter_delay_ms {
        errors.push(ConfigError::InvalidTiming {
            field: "notification.display_duration_ms",
            reason: format!(
                "{} must come after enter_delay_ms {}",
                notification.display_duration_ms, notification.enter_delay_ms
            ),
        });
    }
    if notification.total_duration_ms <= notification.display_duration_ms {
        errors.push(ConfigError::InvalidTiming {
            field: "notification.total_duration_ms",
            reason: format!(
                "{} must come after display_duration_ms {}",
                notification.total_duration_ms, notification.display_duration_ms
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let errors = SiteConfig::default().validate();
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn defaults_round_trip() {
        let text = SiteConfig::default().to_toml_string().unwrap();
        assert_eq!(SiteConfig::from_toml_str(&text).unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            header_offset_px = 64.0

            [intro]
            loading_screen = false
            seed = 42
            title_speed = { base_ms = 40.0 }

            [notification]
            username = "someone"
            "#,
        )
        .unwrap();

        assert_eq!(config.header_offset_px, 64.0);
        assert!(!config.intro.loading_screen);
        assert_eq!(config.intro.seed, Some(42));
        assert_eq!(config.intro.title_speed, TypingSpeed::new(40.0, 0.5));
        assert_eq!(config.intro.title, IntroConfig::default().title);
        assert_eq!(config.notification.username, "someone");
        assert_eq!(config.notification.total_duration_ms, 3000);
        assert_eq!(config.loading, LoadingConfig::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("intro = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn notification_offsets_must_increase() {
        let mut config = SiteConfig::default();
        config.notification.total_duration_ms = 2000;
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ConfigError::InvalidTiming { field: "notification.total_duration_ms", .. }
        ));
    }

    #[test]
    fn highlight_must_occur_in_text() {
        let mut config = SiteConfig::default();
        config.intro.highlighted_name = "Somebody Else".to_string();
        let errors = config.validate();
        assert!(matches!(
            errors.as_slice(),
            [ConfigError::HighlightNotFound { field: "intro.highlighted_name", .. }]
        ));
    }

    #[test]
    fn variation_must_stay_below_one() {
        let mut config = SiteConfig::default();
        config.intro.description_speed = TypingSpeed::new(55.0, 1.5);
        let errors = config.validate();
        assert!(matches!(
            errors.as_slice(),
            [ConfigError::InvalidVariation { field: "intro.description_speed", .. }]
        ));
    }

    #[test]
    fn load_or_default_falls_back_on_invalid() {
        let config = SiteConfig::load_or_default("[intro]\ntitle = \"\"\n");
        assert_eq!(config, SiteConfig::default());

        let config = SiteConfig::load_or_default("not toml at all [");
        assert_eq!(config, SiteConfig::default());

        let config = SiteConfig::load_or_default("debug_logging = true");
        assert!(config.debug_logging);
    }
}
