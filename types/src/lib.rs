//! Shared configuration types for folio
//!
//! This crate contains serializable configuration types that are shared between
//! the pure core (folio-core), the WASM frontend (folio-ui) and the
//! validation CLI (folio-validate). Every field has a serde default so a
//! partial `site.toml` is always accepted.

use serde::{Deserialize, Serialize};

/// Lower bound for any randomized typing delay, in milliseconds.
pub const MIN_TYPING_DELAY_MS: f64 = 20.0;

// ─────────────────────────────────────────────────────────────────────────────
// Typing Speeds
// ─────────────────────────────────────────────────────────────────────────────

/// Base delay with symmetric random variation.
///
/// A variation of `0.3` means each draw lands in `base * [0.7, 1.3]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypingSpeed {
    pub base_ms: f64,
    #[serde(default = "default_variation")]
    pub variation: f64,
}

impl TypingSpeed {
    pub const fn new(base_ms: f64, variation: f64) -> Self {
        Self { base_ms, variation }
    }
}

fn default_variation() -> f64 { 0.5 }

/// Inclusive range for a random increment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncrementRange {
    pub min: f64,
    pub max: f64,
}

impl IncrementRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Intro Sequence
// ─────────────────────────────────────────────────────────────────────────────

/// Hero typing animation and reveal choreography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntroConfig {
    /// Show the simulated loading screen before typing starts
    #[serde(default = "default_true")]
    pub loading_screen: bool,
    /// Fixed seed for the typing jitter (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// Substring of the title rendered with accent styling
    #[serde(default = "default_highlighted_name")]
    pub highlighted_name: String,
    /// Substring of the description rendered with accent styling
    #[serde(default = "default_highlighted_phrase")]
    pub highlighted_phrase: String,
    /// Title prefix followed by a longer pause once fully typed
    #[serde(default = "default_greeting")]
    pub greeting: Option<String>,

    /// Delay between mount and the first typed character (no loading screen)
    #[serde(default = "default_start_delay_ms")]
    pub start_delay_ms: u64,
    #[serde(default = "default_title_speed")]
    pub title_speed: TypingSpeed,
    #[serde(default = "default_greeting_pause")]
    pub greeting_pause: TypingSpeed,
    #[serde(default = "default_title_pause")]
    pub title_pause: TypingSpeed,
    #[serde(default = "default_description_speed")]
    pub description_speed: TypingSpeed,
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: f64,

    #[serde(default = "default_cursor_hide_delay_ms")]
    pub cursor_hide_delay_ms: u64,
    /// Delay between hiding the cursor and showing the hero buttons
    #[serde(default = "default_buttons_delay_ms")]
    pub buttons_delay_ms: u64,
    #[serde(default = "default_header_delay_ms")]
    pub header_delay_ms: u64,
    #[serde(default = "default_back_button_delay_ms")]
    pub back_button_delay_ms: u64,
    #[serde(default = "default_complete_delay_ms")]
    pub complete_delay_ms: u64,
}

fn default_true() -> bool { true }
fn default_title() -> String { "Hi! I'm Nguyen Sy Nguyen".to_string() }
fn default_description() -> String {
    "A Software Engineering student passionate about creating products that solve real-world problems."
        .to_string()
}
fn default_highlighted_name() -> String { "Nguyen Sy Nguyen".to_string() }
fn default_highlighted_phrase() -> String { "creating products".to_string() }
fn default_greeting() -> Option<String> { Some("Hi! ".to_string()) }
fn default_start_delay_ms() -> u64 { 200 }
fn default_title_speed() -> TypingSpeed { TypingSpeed::new(60.0, 0.3) }
fn default_greeting_pause() -> TypingSpeed { TypingSpeed::new(500.0, 0.2) }
fn default_title_pause() -> TypingSpeed { TypingSpeed::new(400.0, 0.2) }
fn default_description_speed() -> TypingSpeed { TypingSpeed::new(55.0, 0.5) }
fn default_min_delay_ms() -> f64 { MIN_TYPING_DELAY_MS }
fn default_cursor_hide_delay_ms() -> u64 { 200 }
fn default_buttons_delay_ms() -> u64 { 200 }
fn default_header_delay_ms() -> u64 { 300 }
fn default_back_button_delay_ms() -> u64 { 400 }
fn default_complete_delay_ms() -> u64 { 200 }

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            loading_screen: true,
            seed: None,
            title: default_title(),
            description: default_description(),
            highlighted_name: default_highlighted_name(),
            highlighted_phrase: default_highlighted_phrase(),
            greeting: default_greeting(),
            start_delay_ms: default_start_delay_ms(),
            title_speed: default_title_speed(),
            greeting_pause: default_greeting_pause(),
            title_pause: default_title_pause(),
            description_speed: default_description_speed(),
            min_delay_ms: default_min_delay_ms(),
            cursor_hide_delay_ms: default_cursor_hide_delay_ms(),
            buttons_delay_ms: default_buttons_delay_ms(),
            header_delay_ms: default_header_delay_ms(),
            back_button_delay_ms: default_back_button_delay_ms(),
            complete_delay_ms: default_complete_delay_ms(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading Screen
// ─────────────────────────────────────────────────────────────────────────────

/// Simulated progress bar shown before the intro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Progress below this value uses the fast increment
    #[serde(default = "default_fast_threshold")]
    pub fast_threshold: f64,
    #[serde(default = "default_fast_increment")]
    pub fast_increment: IncrementRange,
    #[serde(default = "default_slow_increment")]
    pub slow_increment: IncrementRange,
    /// How long "Done" stays on screen
    #[serde(default = "default_done_display_ms")]
    pub done_display_ms: u64,
    /// Delay between the loading screen finishing and typing starting
    #[serde(default = "default_typing_start_delay_ms")]
    pub typing_start_delay_ms: u64,
}

fn default_tick_interval_ms() -> u64 { 200 }
fn default_fast_threshold() -> f64 { 70.0 }
fn default_fast_increment() -> IncrementRange { IncrementRange::new(2.0, 10.0) }
fn default_slow_increment() -> IncrementRange { IncrementRange::new(0.5, 2.5) }
fn default_done_display_ms() -> u64 { 1000 }
fn default_typing_start_delay_ms() -> u64 { 500 }

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            fast_threshold: default_fast_threshold(),
            fast_increment: default_fast_increment(),
            slow_increment: default_slow_increment(),
            done_display_ms: default_done_display_ms(),
            typing_start_delay_ms: default_typing_start_delay_ms(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Copy Notification
// ─────────────────────────────────────────────────────────────────────────────

/// Timings for the "copied to clipboard" toast. All offsets are measured
/// from the moment the copy succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Text written to the clipboard
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_enter_delay_ms")]
    pub enter_delay_ms: u64,
    /// Offset at which the exit transition starts
    #[serde(default = "default_display_duration_ms")]
    pub display_duration_ms: u64,
    /// Offset at which the toast is removed
    #[serde(default = "default_total_duration_ms")]
    pub total_duration_ms: u64,
}

fn default_username() -> String { "_notNguyen".to_string() }
fn default_enter_delay_ms() -> u64 { 10 }
fn default_display_duration_ms() -> u64 { 2500 }
fn default_total_duration_ms() -> u64 { 3000 }

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            enter_delay_ms: default_enter_delay_ms(),
            display_duration_ms: default_display_duration_ms(),
            total_duration_ms: default_total_duration_ms(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Site
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level build-time configuration (`site.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Sub-path the site is served from, e.g. `/portfolio`
    #[serde(default)]
    pub base_path: Option<String>,
    /// Fixed header height subtracted from section scroll targets
    #[serde(default = "default_header_offset_px")]
    pub header_offset_px: f64,
    /// "Back to Hub" link target
    #[serde(default = "default_hub_url")]
    pub hub_url: String,
    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default)]
    pub intro: IntroConfig,
    #[serde(default)]
    pub loading: LoadingConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
}

fn default_header_offset_px() -> f64 { 80.0 }
fn default_hub_url() -> String { "https://kaitojd.me".to_string() }

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            header_offset_px: default_header_offset_px(),
            hub_url: default_hub_url(),
            debug_logging: false,
            intro: IntroConfig::default(),
            loading: LoadingConfig::default(),
            notification: NotificationConfig::default(),
        }
    }
}
