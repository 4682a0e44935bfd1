//! Header reveal sequencer
//!
//! Once the hero buttons are visible the navigation bar slides in, then the
//! "Back to Hub" link, then the whole intro is marked complete. Each step is
//! armed only by the step before it, and no flag ever reverts.

use std::time::Duration;

use folio_types::IntroConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCue {
    ShowHeader,
    ShowBackButton,
    Complete,
}

/// Flags consumed by the navbar and the interaction blocker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceState {
    pub header_visible: bool,
    pub back_button_visible: bool,
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTimings {
    pub header: Duration,
    pub back_button: Duration,
    pub complete: Duration,
}

impl RevealTimings {
    pub fn from_config(config: &IntroConfig) -> Self {
        Self {
            header: Duration::from_millis(config.header_delay_ms),
            back_button: Duration::from_millis(config.back_button_delay_ms),
            complete: Duration::from_millis(config.complete_delay_ms),
        }
    }
}

impl Default for RevealTimings {
    fn default() -> Self {
        Self::from_config(&IntroConfig::default())
    }
}

#[derive(Debug, Clone)]
pub struct RevealSequencer {
    timings: RevealTimings,
    /// Set once the buttons-visible signal has been seen
    armed: bool,
    state: SequenceState,
}

impl RevealSequencer {
    pub fn new(timings: RevealTimings) -> Self {
        Self {
            timings,
            armed: false,
            state: SequenceState::default(),
        }
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn is_animations_complete(&self) -> bool {
        self.state.complete
    }

    /// The typing animation showed its buttons. Only the first call arms the header.
    pub fn on_buttons_visible(&mut self) -> Option<(RevealCue, Duration)> {
        if self.armed {
            return None;
        }
        self.armed = true;
        Some((RevealCue::ShowHeader, self.timings.header))
    }

    pub fn on_cue(&mut self, cue: RevealCue) -> Option<(RevealCue, Duration)> {
        let state = &mut self.state;
        match cue {
            RevealCue::ShowHeader if self.armed && !state.header_visible => {
                state.header_visible = true;
                tracing::debug!("Header revealed");
                Some((RevealCue::ShowBackButton, self.timings.back_button))
            }
            RevealCue::ShowBackButton if state.header_visible && !state.back_button_visible => {
                state.back_button_visible = true;
                tracing::debug!("Back button revealed");
                Some((RevealCue::Complete, self.timings.complete))
            }
            RevealCue::Complete if state.back_button_visible && !state.complete => {
                state.complete = true;
                tracing::info!("Intro sequence complete");
                None
            }
            _ => {
                tracing::trace!(?cue, "Ignoring out-of-order reveal cue");
                None
            }
        }
    }
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new(RevealTimings::default())
    }
}
