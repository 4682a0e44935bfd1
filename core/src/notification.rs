//! Clipboard copy with a transient notification
//!
//! Copying the Discord username is the one fallible operation on the page.
//! On success a toast is mounted, slides in, slides out and is removed, each
//! step one timer after the previous. On failure the user gets a blocking
//! alert with the username instead and the toast never appears.

use std::future::Future;
use std::time::Duration;

use folio_types::NotificationConfig;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unavailable,

    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
}

/// Asynchronous text clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Synchronous, blocking user alert.
pub trait Alert {
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text is on the clipboard; show the notification
    Copied,
    /// Clipboard failed; the fallback alert was shown
    AlertShown,
}

/// Alert text used when the clipboard write fails.
pub fn fallback_message(username: &str) -> String {
    format!("Username: {username} (copied to clipboard)")
}

/// Write `text` to the clipboard, falling back to an alert on failure.
pub async fn copy_with_fallback<C, A>(clipboard: &C, alert: &A, text: &str) -> CopyOutcome
where
    C: Clipboard,
    A: Alert,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            tracing::debug!(text, "Copied to clipboard");
            CopyOutcome::Copied
        }
        Err(error) => {
            tracing::warn!(%error, "Failed to copy username");
            alert.alert(&fallback_message(text));
            CopyOutcome::AlertShown
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notification State
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationPhase {
    #[default]
    Hidden,
    /// In the DOM, still off-screen
    Mounted,
    /// Slid in
    Entered,
    /// Sliding out
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyCue {
    Enter,
    Exit,
    Hide,
}

/// Delays between consecutive notification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    pub enter: Duration,
    pub exit_after_enter: Duration,
    pub hide_after_exit: Duration,
}

impl NotificationTimings {
    /// Convert the absolute offsets in the config into step delays.
    pub fn from_config(config: &NotificationConfig) -> Self {
        Self {
            enter: Duration::from_millis(config.enter_delay_ms),
            exit_after_enter: Duration::from_millis(
                config.display_duration_ms.saturating_sub(config.enter_delay_ms),
            ),
            hide_after_exit: Duration::from_millis(
                config.total_duration_ms.saturating_sub(config.display_duration_ms),
            ),
        }
    }
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self::from_config(&NotificationConfig::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CopyNotification {
    timings: NotificationTimings,
    phase: NotificationPhase,
}

impl CopyNotification {
    pub fn new(timings: NotificationTimings) -> Self {
        Self {
            timings,
            phase: NotificationPhase::Hidden,
        }
    }

    pub fn phase(&self) -> NotificationPhase {
        self.phase
    }

    /// Whether the toast is in the DOM at all.
    pub fn is_shown(&self) -> bool {
        self.phase != NotificationPhase::Hidden
    }

    /// Whether the toast is in its on-screen position.
    pub fn is_visible(&self) -> bool {
        self.phase == NotificationPhase::Entered
    }

    /// Mount (or remount) the toast. The caller cancels any cue still
    /// outstanding from a previous run.
    pub fn show(&mut self) -> (NotifyCue, Duration) {
        self.phase = NotificationPhase::Mounted;
        (NotifyCue::Enter, self.timings.enter)
    }

    pub fn on_cue(&mut self, cue: NotifyCue) -> Option<(NotifyCue, Duration)> {
        match (self.phase, cue) {
            (NotificationPhase::Mounted, NotifyCue::Enter) => {
                self.phase = NotificationPhase::Entered;
                Some((NotifyCue::Exit, self.timings.exit_after_enter))
            }
            (NotificationPhase::Entered, NotifyCue::Exit) => {
                self.phase = NotificationPhase::Exiting;
                Some((NotifyCue::Hide, self.timings.hide_after_exit))
            }
            (NotificationPhase::Exiting, NotifyCue::Hide) => {
                self.phase = NotificationPhase::Hidden;
                None
            }
            _ => None,
        }
    }
}
